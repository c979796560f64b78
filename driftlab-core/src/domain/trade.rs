//! Trade: one executed BUY or SELL.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeSide {
    Buy,
    Sell,
}

/// One execution at a day's close. Trades always occur in BUY/SELL pairs;
/// units bought equal units sold per pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub side: TradeSide,
    pub date: NaiveDate,
    pub price: f64,
    pub units: f64,
    pub fee: f64,
    /// Realized pnl net of both fees; `Some` only on SELL.
    pub pnl: Option<f64>,
    /// True when the SELL was forced by the same-day stop-loss check.
    pub stop_loss: bool,
}

impl Trade {
    pub fn is_winner(&self) -> bool {
        self.pnl.is_some_and(|p| p > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sell(pnl: f64) -> Trade {
        Trade {
            side: TradeSide::Sell,
            date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            price: 110.0,
            units: 9.0,
            fee: 0.99,
            pnl: Some(pnl),
            stop_loss: false,
        }
    }

    #[test]
    fn winner_requires_positive_pnl() {
        assert!(sell(12.5).is_winner());
        assert!(!sell(-3.0).is_winner());
        assert!(!sell(0.0).is_winner());
    }

    #[test]
    fn buy_is_never_a_winner() {
        let buy = Trade {
            side: TradeSide::Buy,
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            price: 100.0,
            units: 9.0,
            fee: 1.0,
            pnl: None,
            stop_loss: false,
        };
        assert!(!buy.is_winner());
    }

    #[test]
    fn serialization_roundtrip() {
        let trade = sell(12.5);
        let json = serde_json::to_string(&trade).unwrap();
        let deser: Trade = serde_json::from_str(&json).unwrap();
        assert_eq!(trade, deser);
    }
}
