//! Simple (arithmetic) returns from a close series.

/// `r[i] = (p[i + 1] - p[i]) / p[i]`.
///
/// The output is one element shorter than the input; zero or one price gives
/// an empty series.
pub fn simple_returns(closes: &[f64]) -> Vec<f64> {
    closes
        .windows(2)
        .map(|w| (w[1] - w[0]) / w[0])
        .collect()
}
