//! Bollinger Bands: moving average +/- standard deviation multiplier.
//!
//! - Middle: SMA(close, window)
//! - Upper: middle + mult * stddev(close, window)
//! - Lower: middle - mult * stddev(close, window)
//! - Width: (upper - lower) / middle
//!
//! Uses population stddev (divide by N).
//! Warm-up: window - 1.
//!
//! Informational output only; the signal rule never reads these bands.

/// All four Bollinger columns, aligned 1:1 with the input.
#[derive(Debug, Clone, PartialEq)]
pub struct BollingerBands {
    pub upper: Vec<Option<f64>>,
    pub middle: Vec<Option<f64>>,
    pub lower: Vec<Option<f64>>,
    pub width: Vec<Option<f64>>,
}

pub fn bollinger(closes: &[f64], window: usize, multiplier: f64) -> BollingerBands {
    assert!(window >= 2, "Bollinger window must be >= 2");

    let n = closes.len();
    let mut bands = BollingerBands {
        upper: vec![None; n],
        middle: vec![None; n],
        lower: vec![None; n],
        width: vec![None; n],
    };

    if n < window {
        return bands;
    }

    for i in (window - 1)..n {
        let slice = &closes[i + 1 - window..=i];
        let mean = slice.iter().sum::<f64>() / window as f64;
        let variance = slice
            .iter()
            .map(|c| {
                let diff = c - mean;
                diff * diff
            })
            .sum::<f64>()
            / window as f64;
        let stddev = variance.sqrt();

        let upper = mean + multiplier * stddev;
        let lower = mean - multiplier * stddev;

        bands.middle[i] = Some(mean);
        bands.upper[i] = Some(upper);
        bands.lower[i] = Some(lower);
        // Closes are positive, so the mean is positive.
        bands.width[i] = Some((upper - lower) / mean);
    }

    bands
}
