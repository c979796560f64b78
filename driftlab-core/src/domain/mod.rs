//! Domain types for DriftLab.

pub mod equity;
pub mod position;
pub mod series;
pub mod trade;

pub use equity::EquityPoint;
pub use position::PositionState;
pub use series::{PricePoint, PriceSeries};
pub use trade::{Trade, TradeSide};
