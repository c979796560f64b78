//! IndicatorFrame: all derived columns for one run, computed in one pass.
//!
//! A new frame is produced per invocation (no in-place accumulation onto a
//! shared table), so many grid-search or Monte Carlo runs can read the same
//! price series concurrently.

use crate::domain::PriceSeries;
use crate::error::Error;
use crate::params::StrategyParams;

use super::bollinger::bollinger;
use super::roc::roc;
use super::sma::sma;
use super::volume_ratio::volume_ratio;

/// Per-timestamp derived values, 1:1 aligned with the price series.
/// Leading entries are `None` until each indicator's window fills.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorFrame {
    pub fast_sma: Vec<Option<f64>>,
    pub slow_sma: Vec<Option<f64>>,
    pub roc: Vec<Option<f64>>,
    pub bb_upper: Vec<Option<f64>>,
    pub bb_middle: Vec<Option<f64>>,
    pub bb_lower: Vec<Option<f64>>,
    pub bb_width: Vec<Option<f64>>,
    pub volume_ratio: Vec<Option<f64>>,
}

impl IndicatorFrame {
    /// Compute all indicator columns for `series`.
    ///
    /// Rejects series shorter than [`StrategyParams::required_len`] with
    /// `Error::DataInsufficient` before computing anything.
    pub fn compute(series: &PriceSeries, params: &StrategyParams) -> Result<Self, Error> {
        params.validate()?;

        let required = params.required_len();
        if series.len() < required {
            return Err(Error::DataInsufficient {
                required,
                got: series.len(),
            });
        }

        let closes = series.closes();
        let volumes = series.volumes();

        let bands = bollinger(&closes, params.bollinger_window, params.bollinger_mult);

        Ok(Self {
            fast_sma: sma(&closes, params.fast_window),
            slow_sma: sma(&closes, params.slow_window),
            roc: roc(&closes, params.momentum_period),
            bb_upper: bands.upper,
            bb_middle: bands.middle,
            bb_lower: bands.lower,
            bb_width: bands.width,
            volume_ratio: volume_ratio(&volumes, params.volume_window),
        })
    }

    pub fn len(&self) -> usize {
        self.fast_sma.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fast_sma.is_empty()
    }
}
