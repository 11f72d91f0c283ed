//! Formatted terminal output for a study run.
//!
//! Kept apart from the pipeline so the numbers stay testable and output
//! changes stay local.

use chrono::Datelike;

use crate::domain::{EventStudy, StudyConfig};

/// Mean of the final LPM value across events with the given `clustered` flag.
///
/// Events with an empty trend are skipped. Returns `(mean, count)`.
pub fn mean_final_lpm(studies: &[EventStudy], clustered: bool) -> Option<(f64, usize)> {
    let values: Vec<f64> = studies
        .iter()
        .filter(|s| s.event.clustered == clustered)
        .filter_map(|s| s.final_lpm())
        .collect();
    if values.is_empty() {
        return None;
    }
    Some((values.iter().sum::<f64>() / values.len() as f64, values.len()))
}

pub fn format_summary(studies: &[EventStudy], config: &StudyConfig) -> String {
    let mut out = String::new();

    out.push_str("=== lpm - Keynote Lower-Partial Moments ===\n");
    out.push_str(&format!(
        "Ticker: {} | alpha={} | target={:.6}\n",
        config.ticker, config.alpha, config.target
    ));
    out.push_str(&format!(
        "Window: -{}d / +{}d (widened for weekend keynotes)\n\n",
        config.offsets.days_before, config.offsets.days_after
    ));

    out.push_str(&format!(
        "{:>3}  {:<10}  {:<3}  {:<5}  {:>6}  {:<22}  {:>4}  {:>12}  {:>12}\n",
        "#", "event", "day", "clust", "invite", "window", "bars", "final_lpm", "peak_lpm"
    ));
    for s in studies {
        out.push_str(&format!(
            "{:>3}  {:<10}  {:<3}  {:<5}  {:>6}  {:<22}  {:>4}  {:>12}  {:>12}\n",
            s.index,
            s.event.date,
            s.event.date.weekday(),
            if s.event.clustered { "yes" } else { "no" },
            s.invitation_lead_days()
                .map(|d| format!("{d}d"))
                .unwrap_or_else(|| "-".to_string()),
            format!("{}..{}", s.window.start, s.window.end),
            s.bars.len(),
            fmt_opt(s.final_lpm()),
            fmt_opt(s.peak_lpm()),
        ));
    }

    out.push('\n');
    out.push_str(&format!(
        "Mean final LPM: clustered={} | isolated={}\n",
        fmt_group(mean_final_lpm(studies, true)),
        fmt_group(mean_final_lpm(studies, false)),
    ));

    out
}

fn fmt_opt(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.6e}"),
        _ => "-".to_string(),
    }
}

fn fmt_group(group: Option<(f64, usize)>) -> String {
    match group {
        Some((mean, n)) => format!("{mean:.6e} (n={n})"),
        None => "- (n=0)".to_string(),
    }
}
