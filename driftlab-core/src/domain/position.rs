//! Position state: FLAT or LONG with recorded entry terms.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The signal state machine's position. At most one position is open at a
/// time; entry terms are recorded so the stop-loss check and SELL pnl can
/// reference them without re-scanning the trade log.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PositionState {
    Flat,
    Long {
        entry_price: f64,
        entry_date: NaiveDate,
        /// Fee paid on entry; part of the entry notional for pnl.
        entry_fee: f64,
        units: f64,
    },
}

impl PositionState {
    pub fn is_long(&self) -> bool {
        matches!(self, PositionState::Long { .. })
    }

    /// Unrealized return against the entry price, if long.
    pub fn open_return(&self, close: f64) -> Option<f64> {
        match self {
            PositionState::Flat => None,
            PositionState::Long { entry_price, .. } => Some((close - entry_price) / entry_price),
        }
    }
}
