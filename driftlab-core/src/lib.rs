//! DriftLab Core: price series, indicators, signals, portfolio simulation.
//!
//! This crate contains the computational pipeline of the backtester:
//! - Domain types (price series, position state, trades, equity curve)
//! - Indicator engine (SMA, ROC, Bollinger bands, volume ratio)
//! - Causal FLAT/LONG signal state machine with one-day lag
//! - Day-by-day portfolio simulator with fees and stop-loss
//!
//! No I/O lives here. Data arrives as an already-validated [`PriceSeries`]
//! and every stage produces a new immutable value, so the same series can
//! feed many concurrent grid-search or Monte Carlo runs without locking.

pub mod backtest;
pub mod domain;
pub mod error;
pub mod indicators;
pub mod params;
pub mod signal;

pub use backtest::{run_backtest, BacktestOutput};
pub use domain::{EquityPoint, PositionState, PricePoint, PriceSeries, Trade, TradeSide};
pub use error::Error;
pub use indicators::IndicatorFrame;
pub use params::StrategyParams;

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    /// Everything the runner shares across rayon workers is Send + Sync.
    #[test]
    fn pipeline_types_are_send_sync() {
        assert_send_sync::<domain::PriceSeries>();
        assert_send_sync::<domain::Trade>();
        assert_send_sync::<domain::EquityPoint>();
        assert_send_sync::<domain::PositionState>();
        assert_send_sync::<indicators::IndicatorFrame>();
        assert_send_sync::<params::StrategyParams>();
        assert_send_sync::<backtest::BacktestOutput>();
        assert_send_sync::<error::Error>();
    }
}
