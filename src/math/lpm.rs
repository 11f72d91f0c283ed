//! Lower partial moment.
//!
//! ```text
//! LPM(α, τ, r) = (1/n) Σ max(0, τ - r_i)^α
//! ```
//!
//! The mean is taken over every return in the slice, not just the ones below
//! the target. A zero sum (which covers the empty slice) gives 0.

/// `max(0, target - r)^alpha` for a single return.
fn shortfall(alpha: f64, target: f64, r: f64) -> f64 {
    (target - r).max(0.0).powf(alpha)
}

pub fn lower_partial_moment(alpha: f64, target: f64, returns: &[f64]) -> f64 {
    let sum: f64 = returns.iter().map(|&r| shortfall(alpha, target, r)).sum();
    if sum == 0.0 {
        return 0.0;
    }
    sum / returns.len() as f64
}

/// LPM of every prefix `returns[..=j]`, for `j` in `0..returns.len()`.
///
/// Uses a running sum, accumulated in the same order as
/// [`lower_partial_moment`], so each element matches the direct evaluation.
pub fn lpm_trend(alpha: f64, target: f64, returns: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(returns.len());
    let mut sum = 0.0;
    for (j, &r) in returns.iter().enumerate() {
        sum += shortfall(alpha, target, r);
        out.push(if sum == 0.0 { 0.0 } else { sum / (j + 1) as f64 });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_prefix_is_zero() {
        assert_eq!(lower_partial_moment(2.0, 0.0005, &[]), 0.0);
        assert!(lpm_trend(2.0, 0.0005, &[]).is_empty());
    }

    #[test]
    fn worked_example() {
        // shortfalls: [0, 0.0205, 0.0002] -> squared [0, 4.2025e-4, 4e-8]
        let returns = [0.01, -0.02, 0.0003];
        let lpm = lower_partial_moment(2.0, 0.0005, &returns);
        let expected = (0.0205_f64.powi(2) + 0.0002_f64.powi(2)) / 3.0;
        assert!((lpm - expected).abs() < 1e-15, "got {lpm}, expected {expected}");
        assert!((lpm - 1.4009667e-4).abs() < 1e-10);
    }

    #[test]
    fn all_returns_above_target_is_zero() {
        assert_eq!(lower_partial_moment(2.0, 0.0005, &[0.01, 0.02, 0.001]), 0.0);
    }

    #[test]
    fn mean_is_over_full_length_not_violations() {
        // One violation of 0.1 out of four returns.
        let lpm = lower_partial_moment(1.0, 0.0, &[0.05, -0.1, 0.2, 0.0]);
        assert!((lpm - 0.025).abs() < 1e-12);
    }

    #[test]
    fn trend_matches_direct_prefix_evaluation() {
        let returns = [0.01, -0.02, 0.0003, -0.005, 0.03, -0.011];
        let trend = lpm_trend(2.0, 0.0005, &returns);
        assert_eq!(trend.len(), returns.len());
        for (j, v) in trend.iter().enumerate() {
            assert_eq!(*v, lower_partial_moment(2.0, 0.0005, &returns[..=j]));
        }
        assert_eq!(trend[0], 0.0);
    }
}
