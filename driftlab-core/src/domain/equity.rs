//! Equity curve point: end-of-day portfolio snapshot.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-day portfolio state. The accounting identity
/// `equity == cash + units * close` holds at every point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquityPoint {
    pub date: NaiveDate,
    pub cash: f64,
    pub units: f64,
    pub equity: f64,
    pub in_position: bool,
}
