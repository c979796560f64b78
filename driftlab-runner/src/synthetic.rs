//! Synthetic price series: deterministic fixtures for tests and offline
//! experimentation.
//!
//! The data-fetch collaborator lives outside this workspace; everything
//! here builds valid [`PriceSeries`] values locally.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use driftlab_core::{PricePoint, PriceSeries};

/// Base date for generated series.
fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 2).expect("valid calendar date")
}

/// Seeded geometric random walk with volume noise.
///
/// `daily_drift` and `daily_vol` are fractions (e.g. 0.001 and 0.02);
/// each day's return is `drift + vol * u` with `u` uniform in [-1, 1).
pub fn random_walk(
    n: usize,
    start_price: f64,
    daily_drift: f64,
    daily_vol: f64,
    seed: u64,
) -> PriceSeries {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut price = start_price;
    let points = (0..n)
        .map(|i| {
            let shock = rng.gen::<f64>() * 2.0 - 1.0;
            price *= 1.0 + daily_drift + daily_vol * shock;
            price = price.max(0.01);
            PricePoint {
                date: base_date() + chrono::Duration::days(i as i64),
                close: price,
                volume: 500.0 + rng.gen_range(0.0..1000.0),
            }
        })
        .collect();

    PriceSeries::new(points).expect("generated walk satisfies the series contract")
}

/// `flat_days` at price 100, then `ramp_days` rising `ramp_pct` per day
/// (e.g. 0.01 = +1%/day), constant volume.
pub fn flat_then_ramp(flat_days: usize, ramp_days: usize, ramp_pct: f64) -> PriceSeries {
    let mut price = 100.0;
    let points = (0..flat_days + ramp_days)
        .map(|i| {
            if i >= flat_days {
                price *= 1.0 + ramp_pct;
            }
            PricePoint {
                date: base_date() + chrono::Duration::days(i as i64),
                close: price,
                volume: 1000.0,
            }
        })
        .collect();

    PriceSeries::new(points).expect("ramp satisfies the series contract")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_walk_is_deterministic_per_seed() {
        let a = random_walk(100, 100.0, 0.001, 0.02, 7);
        let b = random_walk(100, 100.0, 0.001, 0.02, 7);
        assert_eq!(a, b);

        let c = random_walk(100, 100.0, 0.001, 0.02, 8);
        assert_ne!(a, c);
    }

    #[test]
    fn random_walk_has_requested_length() {
        assert_eq!(random_walk(250, 100.0, 0.0, 0.01, 1).len(), 250);
    }

    #[test]
    fn flat_then_ramp_shape() {
        let series = flat_then_ramp(60, 10, 0.01);
        assert_eq!(series.len(), 70);
        assert_eq!(series.close(0), 100.0);
        assert_eq!(series.close(59), 100.0);
        assert!((series.close(60) - 101.0).abs() < 1e-9);
        assert!(series.close(69) > series.close(60));
    }
}
