//! Portfolio simulator: single forward pass over the price series.
//!
//! Per day, in priority order:
//! 1. If LONG and the stop-loss condition holds, force a SELL at today's
//!    close.
//! 2. Otherwise evaluate the lagged signal transition; a BUY or SELL
//!    executes at today's close.
//! 3. Recompute equity against today's close and append a snapshot.
//!
//! Execution arithmetic (all-in long, fully-out flat):
//! - BUY: fee = cost_rate * cash; units = (cash - fee) / price; cash = 0.
//! - SELL: revenue = units * price; fee = cost_rate * revenue;
//!   cash = revenue - fee; pnl = revenue - fee - (units * entry_price + entry_fee).

use crate::domain::{EquityPoint, PositionState, PriceSeries, Trade, TradeSide};
use crate::error::Error;
use crate::indicators::IndicatorFrame;
use crate::params::StrategyParams;
use crate::signal::{SignalMachine, Transition};

/// Equity curve plus trade log from one simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct BacktestOutput {
    pub equity_curve: Vec<EquityPoint>,
    pub trades: Vec<Trade>,
}

impl BacktestOutput {
    /// Equity values as one contiguous vector (metrics input).
    pub fn equity_values(&self) -> Vec<f64> {
        self.equity_curve.iter().map(|p| p.equity).collect()
    }
}

/// Run the full simulation: indicators, signals, and the daily loop.
///
/// Validation (parameter sanity, minimum series length) fails fast before
/// any simulation step; no partial output is ever produced.
pub fn run_backtest(series: &PriceSeries, params: &StrategyParams) -> Result<BacktestOutput, Error> {
    let frame = IndicatorFrame::compute(series, params)?;
    Ok(simulate(series, &frame, params))
}

/// The daily loop, separated so callers holding a precomputed frame
/// (e.g. a sweep over non-indicator parameters) can reuse it.
pub fn simulate(
    series: &PriceSeries,
    frame: &IndicatorFrame,
    params: &StrategyParams,
) -> BacktestOutput {
    let machine = SignalMachine::new(frame, params);

    let mut cash = params.initial_capital;
    let mut state = PositionState::Flat;
    let mut equity_curve = Vec::with_capacity(series.len());
    let mut trades = Vec::new();

    for (t, point) in series.points().iter().enumerate() {
        let price = point.close;

        match machine.decide(t, &state, price) {
            Transition::Enter => {
                if cash > 0.0 {
                    let fee = params.cost_rate * cash;
                    let units = (cash - fee) / price;
                    state = PositionState::Long {
                        entry_price: price,
                        entry_date: point.date,
                        entry_fee: fee,
                        units,
                    };
                    cash = 0.0;
                    trades.push(Trade {
                        side: TradeSide::Buy,
                        date: point.date,
                        price,
                        units,
                        fee,
                        pnl: None,
                        stop_loss: false,
                    });
                }
            }
            Transition::Exit { stop_loss } => {
                if let PositionState::Long {
                    entry_price,
                    entry_fee,
                    units,
                    ..
                } = state
                {
                    let revenue = units * price;
                    let fee = params.cost_rate * revenue;
                    let pnl = revenue - fee - (units * entry_price + entry_fee);
                    cash += revenue - fee;
                    state = PositionState::Flat;
                    trades.push(Trade {
                        side: TradeSide::Sell,
                        date: point.date,
                        price,
                        units,
                        fee,
                        pnl: Some(pnl),
                        stop_loss,
                    });
                }
            }
            Transition::Hold => {}
        }

        let units = match state {
            PositionState::Long { units, .. } => units,
            PositionState::Flat => 0.0,
        };
        equity_curve.push(EquityPoint {
            date: point.date,
            cash,
            units,
            equity: cash + units * price,
            in_position: state.is_long(),
        });
    }

    BacktestOutput {
        equity_curve,
        trades,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PricePoint;
    use chrono::NaiveDate;

    fn series_from_closes(closes: &[f64]) -> PriceSeries {
        let base = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        PriceSeries::new(
            closes
                .iter()
                .enumerate()
                .map(|(i, &close)| PricePoint {
                    date: base + chrono::Duration::days(i as i64),
                    close,
                    volume: 1000.0,
                })
                .collect(),
        )
        .unwrap()
    }

    fn ramp_params() -> StrategyParams {
        StrategyParams {
            fast_window: 5,
            slow_window: 10,
            momentum_period: 3,
            cost_rate: 0.001,
            stop_loss: None,
            ..Default::default()
        }
    }

    /// 60 flat days at 100, then rising 1% per day.
    fn ramp_closes(ramp_days: usize) -> Vec<f64> {
        let mut closes = vec![100.0; 60];
        let mut price = 100.0;
        for _ in 0..ramp_days {
            price *= 1.01;
            closes.push(price);
        }
        closes
    }

    #[test]
    fn rejects_short_series_with_no_partial_output() {
        let series = series_from_closes(&vec![100.0; 30]);
        let err = run_backtest(&series, &ramp_params()).unwrap_err();
        assert!(matches!(err, Error::DataInsufficient { .. }));
    }

    #[test]
    fn rejects_invalid_params() {
        let series = series_from_closes(&ramp_closes(10));
        let params = StrategyParams {
            initial_capital: -1.0,
            ..ramp_params()
        };
        assert!(run_backtest(&series, &params).is_err());
    }

    #[test]
    fn buy_fee_arithmetic() {
        let params = ramp_params();
        let series = series_from_closes(&ramp_closes(10));
        let output = run_backtest(&series, &params).unwrap();

        let buy = &output.trades[0];
        assert_eq!(buy.side, TradeSide::Buy);
        // fee = cost_rate * cash, units = (cash - fee) / price
        let expected_fee = params.cost_rate * params.initial_capital;
        let expected_units = (params.initial_capital - expected_fee) / buy.price;
        assert!((buy.fee - expected_fee).abs() < 1e-9);
        assert!((buy.units - expected_units).abs() < 1e-9);
        assert_eq!(buy.pnl, None);
    }

    #[test]
    fn equity_identity_every_day() {
        let series = series_from_closes(&ramp_closes(15));
        let output = run_backtest(&series, &ramp_params()).unwrap();

        assert_eq!(output.equity_curve.len(), series.len());
        for (point, price) in output.equity_curve.iter().zip(series.closes()) {
            let expected = point.cash + point.units * price;
            assert!((point.equity - expected).abs() < 1e-9);
            assert!(point.cash >= 0.0);
            assert!(point.units >= 0.0);
        }
    }

    #[test]
    fn no_transition_days_carry_holdings_forward() {
        let series = series_from_closes(&ramp_closes(15));
        let output = run_backtest(&series, &ramp_params()).unwrap();

        // Before any trade: cash unchanged, equity constant.
        let first_trade_date = output.trades[0].date;
        for point in &output.equity_curve {
            if point.date < first_trade_date {
                assert_eq!(point.cash, 10_000.0);
                assert_eq!(point.units, 0.0);
                assert!(!point.in_position);
            }
        }
    }

    #[test]
    fn sell_pnl_accounts_for_both_fees() {
        // Uptrend to trigger entry, then decline to trigger a signal exit.
        let mut closes = vec![100.0; 45];
        let mut price = 100.0;
        for _ in 0..20 {
            price *= 1.01;
            closes.push(price);
        }
        for _ in 0..15 {
            price *= 0.995;
            closes.push(price);
        }
        let series = series_from_closes(&closes);
        let output = run_backtest(&series, &ramp_params()).unwrap();

        assert!(output.trades.len() >= 2);
        let buy = output.trades[0];
        let sell = output.trades[1];
        assert_eq!(buy.side, TradeSide::Buy);
        assert_eq!(sell.side, TradeSide::Sell);
        assert_eq!(buy.units, sell.units);

        let revenue = sell.units * sell.price;
        let expected_pnl = revenue - sell.fee - (buy.units * buy.price + buy.fee);
        assert!((sell.pnl.unwrap() - expected_pnl).abs() < 1e-9);
    }

    #[test]
    fn deterministic_across_runs() {
        let series = series_from_closes(&ramp_closes(20));
        let params = ramp_params();
        let a = run_backtest(&series, &params).unwrap();
        let b = run_backtest(&series, &params).unwrap();
        assert_eq!(a, b);
    }
}
