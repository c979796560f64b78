//! Volume ratio: today's volume relative to its trailing average.
//!
//! volume_ratio[t] = volume[t] / mean(volume, window)
//! Warm-up: window - 1. Also `None` when the window's mean volume is
//! zero (a stretch of zero-volume days carries no confirmation signal).

use super::sma::sma;

pub fn volume_ratio(volumes: &[f64], window: usize) -> Vec<Option<f64>> {
    assert!(window >= 1, "volume window must be >= 1");

    let means = sma(volumes, window);
    volumes
        .iter()
        .zip(means)
        .map(|(&v, mean)| match mean {
            Some(m) if m > 0.0 => Some(v / m),
            _ => None,
        })
        .collect()
}
