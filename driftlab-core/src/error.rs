//! Error taxonomy for the core pipeline.
//!
//! Two fail-fast validation errors plus one input-shape error. Indicator
//! warm-up is *not* an error: undefined values are `None` entries in the
//! [`IndicatorFrame`](crate::indicators::IndicatorFrame) and suppress
//! signal evaluation locally.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Series shorter than the minimum required for the configured windows.
    /// Raised before any simulation step; no partial output is produced.
    #[error("insufficient data: need at least {required} points, got {got}")]
    DataInsufficient { required: usize, got: usize },

    /// A strategy parameter failed validation (fast >= slow, non-positive
    /// window, non-positive capital, negative cost rate, ...).
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// The raw price series violates its contract (non-positive close,
    /// negative volume, non-increasing dates).
    #[error("invalid price series at index {index}: {reason}")]
    InvalidSeries { index: usize, reason: String },
}

impl Error {
    pub(crate) fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
