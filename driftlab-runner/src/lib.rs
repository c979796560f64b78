//! Orchestration layer on top of `driftlab-core`: performance metrics,
//! grid search, Monte Carlo resampling, synthetic data, and TOML-driven
//! run configuration.
//!
//! The core crate owns the causal pipeline (indicators, signals,
//! simulation); this crate owns everything that runs *around* a backtest
//! and everything that needs randomness or parallelism.

pub mod bootstrap;
pub mod config;
pub mod metrics;
pub mod runner;
pub mod sweep;
pub mod synthetic;

pub use bootstrap::{resample_returns, McConfig, MonteCarloResult};
pub use config::{ConfigError, McSpec, RunConfig};
pub use metrics::PerformanceReport;
pub use runner::{execute, run_strategy, RunOutcome, StrategyRun};
pub use sweep::{sweep, GridCell, ParamGrid, SweepResults};
