//! Strategy parameters: one immutable value passed into every pipeline
//! invocation.
//!
//! There is no shared mutable default object: callers clone and adjust a
//! `StrategyParams`, and every run reads only its own copy, which keeps
//! parallel grid-search and Monte Carlo execution free of aliasing hazards.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Extra bars beyond the slow window required before a run is accepted,
/// so every indicator has left its warm-up before signals can matter.
pub const WARMUP_BUFFER: usize = 10;

/// Absolute floor on accepted series length.
pub const MIN_SERIES_LEN: usize = 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyParams {
    /// Fast SMA window (days).
    pub fast_window: usize,
    /// Slow SMA window (days); must exceed `fast_window`.
    pub slow_window: usize,
    /// ROC lookback (days).
    pub momentum_period: usize,
    /// Minimum ROC (%) to confirm an entry; exits fire below it.
    pub momentum_threshold: f64,
    /// Window for the volume moving average.
    pub volume_window: usize,
    /// Entry requires volume at least this fraction of its average.
    pub volume_ratio_min: f64,
    /// Bollinger band window (informational output only).
    pub bollinger_window: usize,
    /// Bollinger band width in standard deviations.
    pub bollinger_mult: f64,
    /// Starting cash.
    pub initial_capital: f64,
    /// Fee as a fraction of traded notional, charged each way.
    pub cost_rate: f64,
    /// Force an exit when the open return falls to this (negative)
    /// fraction; `None` disables the stop.
    pub stop_loss: Option<f64>,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            fast_window: 20,
            slow_window: 50,
            momentum_period: 14,
            momentum_threshold: 0.0,
            volume_window: 20,
            volume_ratio_min: 0.8,
            bollinger_window: 20,
            bollinger_mult: 2.0,
            initial_capital: 10_000.0,
            cost_rate: 0.001,
            stop_loss: Some(-0.05),
        }
    }
}

impl StrategyParams {
    /// Fail-fast validation; called before any simulation step.
    pub fn validate(&self) -> Result<(), Error> {
        if self.fast_window == 0 {
            return Err(Error::invalid_parameter("fast_window", "must be positive"));
        }
        if self.slow_window == 0 {
            return Err(Error::invalid_parameter("slow_window", "must be positive"));
        }
        if self.fast_window >= self.slow_window {
            return Err(Error::invalid_parameter(
                "fast_window",
                format!(
                    "fast window ({}) must be smaller than slow window ({})",
                    self.fast_window, self.slow_window
                ),
            ));
        }
        if self.momentum_period == 0 {
            return Err(Error::invalid_parameter(
                "momentum_period",
                "must be positive",
            ));
        }
        if self.volume_window == 0 {
            return Err(Error::invalid_parameter("volume_window", "must be positive"));
        }
        if self.bollinger_window < 2 {
            return Err(Error::invalid_parameter(
                "bollinger_window",
                "must be at least 2",
            ));
        }
        if !self.initial_capital.is_finite() || self.initial_capital <= 0.0 {
            return Err(Error::invalid_parameter(
                "initial_capital",
                format!("must be positive, got {}", self.initial_capital),
            ));
        }
        if !self.cost_rate.is_finite() || self.cost_rate < 0.0 || self.cost_rate >= 1.0 {
            return Err(Error::invalid_parameter(
                "cost_rate",
                format!("must be in [0, 1), got {}", self.cost_rate),
            ));
        }
        if let Some(stop) = self.stop_loss {
            if !stop.is_finite() || stop >= 0.0 {
                return Err(Error::invalid_parameter(
                    "stop_loss",
                    format!("must be a negative fraction, got {stop}"),
                ));
            }
        }
        Ok(())
    }

    /// Minimum series length these parameters accept.
    pub fn required_len(&self) -> usize {
        (self.slow_window + WARMUP_BUFFER).max(MIN_SERIES_LEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        StrategyParams::default().validate().unwrap();
    }

    #[test]
    fn rejects_fast_not_below_slow() {
        let params = StrategyParams {
            fast_window: 50,
            slow_window: 50,
            ..Default::default()
        };
        let err = params.validate().unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidParameter {
                name: "fast_window",
                ..
            }
        ));
    }

    #[test]
    fn rejects_zero_window() {
        let params = StrategyParams {
            fast_window: 0,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn rejects_non_positive_capital() {
        let params = StrategyParams {
            initial_capital: 0.0,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn rejects_negative_cost_rate() {
        let params = StrategyParams {
            cost_rate: -0.001,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn rejects_positive_stop_loss() {
        let params = StrategyParams {
            stop_loss: Some(0.05),
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn no_stop_loss_is_valid() {
        let params = StrategyParams {
            stop_loss: None,
            ..Default::default()
        };
        params.validate().unwrap();
    }

    #[test]
    fn required_len_floors_at_minimum() {
        let params = StrategyParams {
            fast_window: 5,
            slow_window: 10,
            ..Default::default()
        };
        assert_eq!(params.required_len(), MIN_SERIES_LEN);

        let wide = StrategyParams {
            fast_window: 50,
            slow_window: 200,
            ..Default::default()
        };
        assert_eq!(wide.required_len(), 210);
    }

    #[test]
    fn toml_style_partial_deserialization_uses_defaults() {
        let params: StrategyParams =
            serde_json::from_str(r#"{"fast_window": 10, "slow_window": 30}"#).unwrap();
        assert_eq!(params.fast_window, 10);
        assert_eq!(params.slow_window, 30);
        assert_eq!(params.momentum_period, 14);
    }
}
