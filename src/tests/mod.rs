use std::str::FromStr;
use std::sync::Once;

use log::LevelFilter;

use crate::prelude::Epoch;


mod fuzz;

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::builder()
            .is_test(true)
            .filter_level(LevelFilter::Debug)
            .init();
    });
}

/// Reference anchor all scenarios build around.
pub fn t0_gpst() -> Epoch {
    Epoch::from_str("2020-06-25T00:00:00 GPST").unwrap()
}

/// |value - expected| below tolerance, with a readable report.
pub fn assert_close(value: f64, expected: f64, tol: f64, what: &str) {
    let err = (value - expected).abs();
    assert!(
        err < tol,
        "{}: {:.6E} vs expected {:.6E} (err={:.3E}, tol={:.3E})",
        what,
        value,
        expected,
        err,
        tol
    );
}
