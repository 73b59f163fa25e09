use crate::prelude::{Epoch, Frame, Orbit};

#[cfg(doc)]
use crate::prelude::{Error, Solver};

/// Each endpoint trajectory must implement [OrbitSource] for the [Solver]
/// to evaluate its state at whatever instants the light-time iteration
/// requires.
pub trait OrbitSource {
    /// Provide the endpoint [Orbit]al state at requested [Epoch], expressed
    /// in the requested [Frame]. Returning None here (state not available,
    /// requested [Epoch] outside your fitting arc..) makes the ongoing
    /// resolution abort with [Error::UnresolvedState].
    fn state_at(&self, epoch: Epoch, frame: Frame) -> Option<Orbit>;

    /// [Frame] in which this trajectory is natively described, at requested
    /// [Epoch]. The [Solver] only uses it to trace frame re-expressions,
    /// which remain under your responsibility.
    fn native_frame(&self, epoch: Epoch) -> Frame;
}
