//! Monte Carlo resampling of realized daily returns.
//!
//! Each trial draws the same number of returns as the source sequence,
//! i.i.d. with replacement, and compounds them from the starting capital.
//! Trials run in parallel; each derives its own RNG seed from the master
//! seed and its trial index, so the output is identical regardless of how
//! rayon schedules the work.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use driftlab_core::Error;

/// Resampling controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McConfig {
    pub n_trials: usize,
    pub initial_capital: f64,
    /// Master seed. `None` draws one from OS entropy, making the run
    /// non-reproducible but still internally order-independent.
    pub seed: Option<u64>,
}

/// Distribution of terminal equities across trials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloResult {
    /// Terminal equity per trial, in trial order.
    pub terminal_values: Vec<f64>,
    pub p5: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub p95: f64,
    /// Fraction of trials ending below the starting capital.
    pub loss_probability: f64,
    pub n_trials: usize,
}

/// Run the full resampling experiment.
pub fn resample_returns(daily_returns: &[f64], config: &McConfig) -> Result<MonteCarloResult, Error> {
    if daily_returns.is_empty() {
        return Err(Error::DataInsufficient {
            required: 1,
            got: 0,
        });
    }
    if config.n_trials == 0 {
        return Err(Error::InvalidParameter {
            name: "n_trials",
            reason: "must be positive".into(),
        });
    }
    if !(config.initial_capital > 0.0) {
        return Err(Error::InvalidParameter {
            name: "initial_capital",
            reason: format!("must be positive, got {}", config.initial_capital),
        });
    }

    let master_seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());

    let terminal_values: Vec<f64> = (0..config.n_trials)
        .into_par_iter()
        .map(|trial| {
            let mut rng = StdRng::seed_from_u64(trial_seed(master_seed, trial));
            run_trial(daily_returns, config.initial_capital, &mut rng)
        })
        .collect();

    let losses = terminal_values
        .iter()
        .filter(|&&v| v < config.initial_capital)
        .count();

    let mut sorted = terminal_values.clone();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    Ok(MonteCarloResult {
        p5: percentile_sorted(&sorted, 5.0),
        p25: percentile_sorted(&sorted, 25.0),
        p50: percentile_sorted(&sorted, 50.0),
        p75: percentile_sorted(&sorted, 75.0),
        p95: percentile_sorted(&sorted, 95.0),
        loss_probability: losses as f64 / config.n_trials as f64,
        n_trials: config.n_trials,
        terminal_values,
    })
}

/// Derive a per-trial seed by hashing the master seed with the trial
/// index. Sequential seeds would correlate neighboring StdRng streams.
fn trial_seed(master_seed: u64, trial: usize) -> u64 {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&master_seed.to_le_bytes());
    hasher.update(&(trial as u64).to_le_bytes());
    let digest = hasher.finalize();
    u64::from_le_bytes(digest.as_bytes()[..8].try_into().unwrap())
}

fn run_trial(daily_returns: &[f64], initial_capital: f64, rng: &mut StdRng) -> f64 {
    let n = daily_returns.len();
    let mut equity = initial_capital;
    for _ in 0..n {
        let r = daily_returns[rng.gen_range(0..n)];
        equity *= 1.0 + r;
    }
    equity
}

/// Percentile with linear interpolation between adjacent order statistics.
/// `sorted` must be ascending and non-empty.
fn percentile_sorted(sorted: &[f64], pct: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let rank = pct / 100.0 * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let frac = rank - lo as f64;
        sorted[lo] + (sorted[hi] - sorted[lo]) * frac
    }
}
