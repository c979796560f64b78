//! Single-run orchestration: indicators, signals, simulation, and
//! metrics composed into one pure function, plus the top-level entry
//! point that also executes a config's optional sweep and Monte Carlo
//! stages.

use anyhow::Context;
use serde::{Deserialize, Serialize};

use driftlab_core::{run_backtest, EquityPoint, Error, PriceSeries, StrategyParams, Trade};

use crate::bootstrap::{resample_returns, McConfig, MonteCarloResult};
use crate::config::RunConfig;
use crate::metrics::{buy_hold_total_return, daily_returns, PerformanceReport};
use crate::sweep::{sweep, SweepResults};

/// Everything one strategy run produced, ready for any presentation
/// collaborator (reporter, exporter, dashboard).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyRun {
    pub report: PerformanceReport,
    pub trades: Vec<Trade>,
    pub equity_curve: Vec<EquityPoint>,
    /// Realized per-day returns of the equity curve; Monte Carlo input.
    pub daily_returns: Vec<f64>,
    pub benchmark_total_return: f64,
}

impl StrategyRun {
    /// Equity at the last bar. The simulator always emits one point per
    /// input bar, so this is `None` only for an empty curve.
    pub fn final_equity(&self) -> Option<f64> {
        self.equity_curve.last().map(|p| p.equity)
    }
}

/// Run the full pipeline once. Pure: identical inputs yield an identical
/// `StrategyRun`.
pub fn run_strategy(series: &PriceSeries, params: &StrategyParams) -> Result<StrategyRun, Error> {
    let output = run_backtest(series, params)?;
    let equity = output.equity_values();
    let returns = daily_returns(&equity);
    let benchmark = buy_hold_total_return(series, params.initial_capital, params.cost_rate);
    let report = PerformanceReport::compute(&equity, &output.trades, benchmark);

    Ok(StrategyRun {
        report,
        trades: output.trades,
        equity_curve: output.equity_curve,
        daily_returns: returns,
        benchmark_total_return: benchmark,
    })
}

/// Combined outcome of a configured run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunOutcome {
    /// Content-addressed id of the configuration that produced this.
    pub run_id: String,
    pub strategy: StrategyRun,
    pub sweep: Option<SweepResults>,
    pub monte_carlo: Option<MonteCarloResult>,
}

/// Execute a [`RunConfig`]: the base strategy run, then the parameter
/// sweep and the Monte Carlo resampling if the config asks for them.
pub fn execute(series: &PriceSeries, config: &RunConfig) -> anyhow::Result<RunOutcome> {
    let strategy = run_strategy(series, &config.strategy).context("base strategy run failed")?;

    let sweep_results = config
        .grid
        .as_ref()
        .map(|grid| sweep(series, &config.strategy, grid));

    let monte_carlo = match &config.monte_carlo {
        Some(spec) => {
            let mc_config = McConfig {
                n_trials: spec.n_trials,
                initial_capital: config.strategy.initial_capital,
                seed: spec.seed,
            };
            Some(
                resample_returns(&strategy.daily_returns, &mc_config)
                    .context("Monte Carlo resampling failed")?,
            )
        }
        None => None,
    };

    Ok(RunOutcome {
        run_id: config.run_id(),
        strategy,
        sweep: sweep_results,
        monte_carlo,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthetic::random_walk;

    #[test]
    fn run_strategy_is_deterministic() {
        let series = random_walk(200, 100.0, 0.002, 0.02, 11);
        let params = StrategyParams::default();
        let a = run_strategy(&series, &params).unwrap();
        let b = run_strategy(&series, &params).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn daily_returns_align_with_curve() {
        let series = random_walk(150, 100.0, 0.001, 0.02, 3);
        let run = run_strategy(&series, &StrategyParams::default()).unwrap();
        assert_eq!(run.daily_returns.len(), run.equity_curve.len() - 1);
    }

    #[test]
    fn insufficient_data_fails_fast() {
        let series = random_walk(30, 100.0, 0.001, 0.02, 3);
        let err = run_strategy(&series, &StrategyParams::default()).unwrap_err();
        assert!(matches!(err, Error::DataInsufficient { .. }));
    }
}
