//! Performance metrics: pure functions that compute strategy statistics.
//!
//! Every metric is a pure function: equity curve and/or trade list in,
//! scalar out. Degenerate cases (zero trades, zero-variance returns,
//! zero drawdown) surface as `None` (serialized as JSON `null`) so
//! batch operations can proceed past one bad parameter combination
//! without special-casing divide-by-zero.
//!
//! Annualization uses 365 calendar days: the input is daily-bar data for
//! markets that trade every day, with no trading-calendar adjustment.

use serde::{Deserialize, Serialize};

use driftlab_core::{PriceSeries, Trade, TradeSide};

/// Days per year used for annualization.
pub const ANNUALIZATION_DAYS: f64 = 365.0;

/// Aggregate performance report for a single run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub total_return: f64,
    pub annual_return: f64,
    pub sharpe: Option<f64>,
    pub sortino: Option<f64>,
    pub calmar: Option<f64>,
    pub max_drawdown: f64,
    /// Longest contiguous run of days spent below the running equity peak.
    pub max_dd_duration_days: usize,
    pub volatility: Option<f64>,
    pub win_rate: Option<f64>,
    pub profit_factor: Option<f64>,
    pub avg_win: Option<f64>,
    pub avg_loss: Option<f64>,
    /// Strategy total return minus the buy-and-hold benchmark's.
    pub alpha: f64,
    /// All BUY and SELL executions.
    pub total_trades: usize,
}

impl PerformanceReport {
    /// Compute all metrics from an equity curve, trade list, and the
    /// buy-and-hold benchmark total return.
    pub fn compute(equity_curve: &[f64], trades: &[Trade], benchmark_total_return: f64) -> Self {
        let returns = daily_returns(equity_curve);
        let tr = total_return(equity_curve);
        let annual = annual_return(tr, returns.len());
        let dd = max_drawdown(equity_curve);

        Self {
            total_return: tr,
            annual_return: annual,
            sharpe: sharpe_ratio(&returns),
            sortino: sortino_ratio(&returns),
            calmar: calmar_ratio(annual, dd),
            max_drawdown: dd,
            max_dd_duration_days: max_drawdown_duration(equity_curve),
            volatility: volatility(&returns),
            win_rate: win_rate(trades),
            profit_factor: profit_factor(trades),
            avg_win: avg_win(trades),
            avg_loss: avg_loss(trades),
            alpha: tr - benchmark_total_return,
            total_trades: trades.len(),
        }
    }
}

// ─── Benchmark ──────────────────────────────────────────────────────

/// Buy-and-hold benchmark curve: all-in at day 0's close (paying the
/// entry fee), marked to market daily.
pub fn buy_hold_curve(series: &PriceSeries, initial_capital: f64, cost_rate: f64) -> Vec<f64> {
    if series.is_empty() {
        return Vec::new();
    }
    let fee = cost_rate * initial_capital;
    let units = (initial_capital - fee) / series.close(0);
    series.closes().iter().map(|c| units * c).collect()
}

/// Benchmark total return with the fee schedule applied once each way.
pub fn buy_hold_total_return(series: &PriceSeries, initial_capital: f64, cost_rate: f64) -> f64 {
    let curve = buy_hold_curve(series, initial_capital, cost_rate);
    match curve.last() {
        Some(&held) => {
            let exit_fee = cost_rate * held;
            (held - exit_fee) / initial_capital - 1.0
        }
        None => 0.0,
    }
}

// ─── Individual metric functions ────────────────────────────────────

/// Day-over-day returns of an equity curve (length n-1).
pub fn daily_returns(equity_curve: &[f64]) -> Vec<f64> {
    equity_curve
        .windows(2)
        .map(|w| w[1] / w[0] - 1.0)
        .collect()
}

/// Total return as a fraction: final / initial - 1.
pub fn total_return(equity_curve: &[f64]) -> f64 {
    match (equity_curve.first(), equity_curve.last()) {
        (Some(&initial), Some(&final_eq)) if initial > 0.0 => final_eq / initial - 1.0,
        _ => 0.0,
    }
}

/// Annualized return: (1 + total)^(365 / n_days) - 1.
pub fn annual_return(total_return: f64, n_days: usize) -> f64 {
    if n_days == 0 {
        return 0.0;
    }
    (1.0 + total_return).powf(ANNUALIZATION_DAYS / n_days as f64) - 1.0
}

/// Annualized Sharpe ratio: sqrt(365) * mean / std of daily returns.
///
/// `None` with fewer than 2 returns or zero variance.
pub fn sharpe_ratio(returns: &[f64]) -> Option<f64> {
    if returns.len() < 2 {
        return None;
    }
    let mean = mean(returns);
    let std = sample_std(returns, mean)?;
    Some(ANNUALIZATION_DAYS.sqrt() * mean / std)
}

/// Annualized Sortino ratio: like Sharpe, but the deviation is taken over
/// negative daily returns only.
///
/// `None` with fewer than 2 returns, fewer than 2 negative returns, or
/// zero downside variance.
pub fn sortino_ratio(returns: &[f64]) -> Option<f64> {
    if returns.len() < 2 {
        return None;
    }
    let downside: Vec<f64> = returns.iter().copied().filter(|&r| r < 0.0).collect();
    if downside.len() < 2 {
        return None;
    }
    let downside_std = sample_std(&downside, mean(&downside))?;
    Some(ANNUALIZATION_DAYS.sqrt() * mean(returns) / downside_std)
}

/// Maximum drawdown as a positive fraction (0.15 = a 15% decline).
pub fn max_drawdown(equity_curve: &[f64]) -> f64 {
    let mut peak = f64::MIN;
    let mut max_dd = 0.0_f64;

    for &eq in equity_curve {
        if eq > peak {
            peak = eq;
        }
        if peak > 0.0 {
            let dd = (peak - eq) / peak;
            if dd > max_dd {
                max_dd = dd;
            }
        }
    }
    max_dd
}

/// Longest contiguous run, in days, where equity sits below its running peak.
pub fn max_drawdown_duration(equity_curve: &[f64]) -> usize {
    let mut peak = f64::MIN;
    let mut current = 0usize;
    let mut longest = 0usize;

    for &eq in equity_curve {
        if eq > peak {
            peak = eq;
            current = 0;
        } else if eq < peak {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

/// Calmar ratio: annual return / |max drawdown|. `None` with zero drawdown.
pub fn calmar_ratio(annual_return: f64, max_drawdown: f64) -> Option<f64> {
    if max_drawdown == 0.0 {
        return None;
    }
    Some(annual_return / max_drawdown.abs())
}

/// Annualized volatility: std of daily returns * sqrt(365).
///
/// `None` with fewer than 2 returns or zero variance.
pub fn volatility(returns: &[f64]) -> Option<f64> {
    if returns.len() < 2 {
        return None;
    }
    let std = sample_std(returns, mean(returns))?;
    Some(std * ANNUALIZATION_DAYS.sqrt())
}

/// Fraction of closed (SELL) trades with positive pnl. `None` with no SELLs.
pub fn win_rate(trades: &[Trade]) -> Option<f64> {
    let sells: Vec<&Trade> = trades
        .iter()
        .filter(|t| t.side == TradeSide::Sell)
        .collect();
    if sells.is_empty() {
        return None;
    }
    let winners = sells.iter().filter(|t| t.is_winner()).count();
    Some(winners as f64 / sells.len() as f64)
}

/// Gross winning pnl / |gross losing pnl|. `None` with no SELLs or no losers.
pub fn profit_factor(trades: &[Trade]) -> Option<f64> {
    let pnls: Vec<f64> = trades.iter().filter_map(|t| t.pnl).collect();
    if pnls.is_empty() {
        return None;
    }
    let gross_profit: f64 = pnls.iter().filter(|&&p| p > 0.0).sum();
    let gross_loss: f64 = pnls.iter().filter(|&&p| p < 0.0).map(|p| p.abs()).sum();
    if gross_loss == 0.0 {
        return None;
    }
    Some(gross_profit / gross_loss)
}

/// Mean pnl of winning SELLs. `None` when there are none.
pub fn avg_win(trades: &[Trade]) -> Option<f64> {
    let wins: Vec<f64> = trades.iter().filter_map(|t| t.pnl).filter(|&p| p > 0.0).collect();
    if wins.is_empty() {
        return None;
    }
    Some(mean(&wins))
}

/// Mean pnl of losing SELLs (a negative number). `None` when there are none.
pub fn avg_loss(trades: &[Trade]) -> Option<f64> {
    let losses: Vec<f64> = trades
        .iter()
        .filter_map(|t| t.pnl)
        .filter(|&p| p <= 0.0)
        .collect();
    if losses.is_empty() {
        return None;
    }
    Some(mean(&losses))
}

// ─── Helpers ────────────────────────────────────────────────────────

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (divide by n-1). `None` when it is zero.
fn sample_std(values: &[f64], mean: f64) -> Option<f64> {
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    let std = variance.sqrt();
    if std > 0.0 {
        Some(std)
    } else {
        None
    }
}
