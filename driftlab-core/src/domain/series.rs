//! Price series: the fundamental market data unit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One daily observation: closing price and traded volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
    pub volume: f64,
}

/// Ordered daily price/volume series, validated once at construction.
///
/// Contract: strictly increasing dates, `close > 0`, `volume >= 0`, all
/// values finite. There are no mutating accessors; once built, the series
/// can be shared freely across grid-search and Monte Carlo workers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PricePoint>", into = "Vec<PricePoint>")]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl TryFrom<Vec<PricePoint>> for PriceSeries {
    type Error = Error;

    fn try_from(points: Vec<PricePoint>) -> Result<Self, Error> {
        Self::new(points)
    }
}

impl From<PriceSeries> for Vec<PricePoint> {
    fn from(series: PriceSeries) -> Self {
        series.points
    }
}

impl PriceSeries {
    pub fn new(points: Vec<PricePoint>) -> Result<Self, Error> {
        for (i, p) in points.iter().enumerate() {
            if !p.close.is_finite() || p.close <= 0.0 {
                return Err(Error::InvalidSeries {
                    index: i,
                    reason: format!("close must be positive and finite, got {}", p.close),
                });
            }
            if !p.volume.is_finite() || p.volume < 0.0 {
                return Err(Error::InvalidSeries {
                    index: i,
                    reason: format!("volume must be non-negative and finite, got {}", p.volume),
                });
            }
            if i > 0 && p.date <= points[i - 1].date {
                return Err(Error::InvalidSeries {
                    index: i,
                    reason: format!(
                        "dates must be strictly increasing: {} follows {}",
                        p.date,
                        points[i - 1].date
                    ),
                });
            }
        }
        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn close(&self, index: usize) -> f64 {
        self.points[index].close
    }

    pub fn date(&self, index: usize) -> NaiveDate {
        self.points[index].date
    }

    /// Closing prices as one contiguous vector (indicator input).
    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    /// Volumes as one contiguous vector (indicator input).
    pub fn volumes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.volume).collect()
    }
}
