//! Property tests for the return and LPM routines.
//!
//! 1. Returns are one shorter than prices and match the simple-return formula
//! 2. LPM is never negative
//! 3. Raising the target never lowers the LPM
//! 4. The prefix trend agrees with direct evaluation

use keynote_lpm::math::{lower_partial_moment, lpm_trend, simple_returns};
use proptest::prelude::*;

// ── Strategies ───────────────────────────────────────────────────────

fn arb_prices() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(1.0..1000.0_f64, 1..60)
}

fn arb_returns() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-0.2..0.2_f64, 0..60)
}

fn arb_alpha() -> impl Strategy<Value = f64> {
    prop_oneof![Just(1.0), Just(2.0), Just(3.0), 0.5..4.0_f64]
}

// ── Properties ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn returns_follow_formula(prices in arb_prices()) {
        let r = simple_returns(&prices);
        prop_assert_eq!(r.len(), prices.len() - 1);
        for (i, v) in r.iter().enumerate() {
            let expected = (prices[i + 1] - prices[i]) / prices[i];
            prop_assert!((v - expected).abs() <= 1e-12 * expected.abs().max(1.0));
        }
    }

    #[test]
    fn lpm_is_non_negative(returns in arb_returns(), alpha in arb_alpha(), target in -0.05..0.05_f64) {
        prop_assert!(lower_partial_moment(alpha, target, &returns) >= 0.0);
    }

    #[test]
    fn lpm_non_decreasing_in_target(
        returns in arb_returns(),
        alpha in arb_alpha(),
        target in -0.05..0.05_f64,
        bump in 0.0..0.05_f64,
    ) {
        let low = lower_partial_moment(alpha, target, &returns);
        let high = lower_partial_moment(alpha, target + bump, &returns);
        prop_assert!(high >= low - 1e-15, "low={} high={}", low, high);
    }

    #[test]
    fn trend_matches_prefixes(returns in arb_returns(), alpha in arb_alpha(), target in -0.05..0.05_f64) {
        let trend = lpm_trend(alpha, target, &returns);
        prop_assert_eq!(trend.len(), returns.len());
        for (j, v) in trend.iter().enumerate() {
            prop_assert_eq!(*v, lower_partial_moment(alpha, target, &returns[..=j]));
        }
    }
}

#[test]
fn empty_returns_have_zero_lpm() {
    assert_eq!(lower_partial_moment(2.0, 0.0005, &[]), 0.0);
}
