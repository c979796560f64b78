//! Rate of Change (ROC).
//!
//! Percentage price change over a lookback period.
//! ROC[t] = (close[t] - close[t-period]) / close[t-period] * 100
//! Warm-up: period.

/// Compute the ROC of `closes` over `period` days, in percent.
///
/// The first `period` entries are `None`.
pub fn roc(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    assert!(period >= 1, "ROC period must be >= 1");

    let n = closes.len();
    let mut result = vec![None; n];

    for i in period..n {
        let prev = closes[i - period];
        // Closes are validated positive, but guard the division anyway.
        if prev != 0.0 {
            result[i] = Some((closes[i] - prev) / prev * 100.0);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, DEFAULT_EPSILON};

    #[test]
    fn roc_basic() {
        // Closes: 100, 110, 121
        // ROC[1] with period=1: (110-100)/100*100 = 10%
        // ROC[2] with period=1: (121-110)/110*100 = 10%
        let result = roc(&[100.0, 110.0, 121.0], 1);

        assert!(result[0].is_none());
        assert_approx(result[1].unwrap(), 10.0, DEFAULT_EPSILON);
        assert_approx(result[2].unwrap(), 10.0, DEFAULT_EPSILON);
    }

    #[test]
    fn roc_period_2() {
        // ROC[2] with period=2: (121-100)/100*100 = 21%
        let result = roc(&[100.0, 110.0, 121.0], 2);

        assert!(result[0].is_none());
        assert!(result[1].is_none());
        assert_approx(result[2].unwrap(), 21.0, DEFAULT_EPSILON);
    }

    #[test]
    fn roc_negative() {
        let result = roc(&[100.0, 90.0], 1);
        assert_approx(result[1].unwrap(), -10.0, DEFAULT_EPSILON);
    }

    #[test]
    fn roc_flat_is_zero() {
        let result = roc(&[100.0, 100.0, 100.0], 1);
        assert_approx(result[1].unwrap(), 0.0, DEFAULT_EPSILON);
        assert_approx(result[2].unwrap(), 0.0, DEFAULT_EPSILON);
    }
}
