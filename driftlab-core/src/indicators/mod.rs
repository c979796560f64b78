//! Indicator engine.
//!
//! Each indicator is a pure function: value series in, `Vec<Option<f64>>`
//! out, 1:1 with the input. Warm-up entries are `None`, never NaN or a
//! silently-wrong number, with the warm-up length documented per
//! indicator. [`IndicatorFrame::compute`] assembles all columns for one
//! run.

pub mod bollinger;
pub mod frame;
pub mod roc;
pub mod sma;
pub mod volume_ratio;

pub use bollinger::{bollinger, BollingerBands};
pub use frame::IndicatorFrame;
pub use roc::roc;
pub use sma::sma;
pub use volume_ratio::volume_ratio;

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
