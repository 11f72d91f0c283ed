//! End-to-end run over the compiled-in calendar with an in-memory price source.

use chrono::Duration;
use keynote_lpm::app::pipeline::run_study_with_source;
use keynote_lpm::data::PriceSource;
use keynote_lpm::domain::{KeynoteCalendar, PriceBar, StudyConfig, StudyWindow};
use keynote_lpm::error::AppError;
use keynote_lpm::plot::{CLUSTERED_COLOR, ISOLATED_COLOR, build_series, render_ascii};
use keynote_lpm::report::format_summary;

/// Deterministic zig-zag path: one bar per calendar day in the window.
struct ZigZag;

impl PriceSource for ZigZag {
    fn fetch_closes(&self, _ticker: &str, window: &StudyWindow) -> Result<Vec<PriceBar>, AppError> {
        let days = (window.end - window.start).num_days();
        Ok((0..=days)
            .map(|i| PriceBar {
                date: window.start + Duration::days(i),
                close: if i % 2 == 0 { 100.0 } else { 99.0 },
            })
            .collect())
    }
}

#[test]
fn full_calendar_produces_one_series_per_keynote() {
    let config = StudyConfig {
        quiet: true,
        ..StudyConfig::default()
    };
    let calendar = KeynoteCalendar::load().unwrap();
    let out = run_study_with_source(&config, calendar, &ZigZag).unwrap();

    assert_eq!(out.studies.len(), 29);
    for s in &out.studies {
        // Weekday windows span 224 days, weekend ones a little more.
        assert!(s.bars.len() >= 225, "event {} has {} bars", s.event.date, s.bars.len());
        assert_eq!(s.returns.len(), s.bars.len() - 1);
        assert_eq!(s.lpm.len(), s.returns.len());
        assert!(s.invitation_lead_days().is_some_and(|d| d > 0));
    }

    let series = build_series(&out.studies);
    let clustered = series.iter().filter(|s| s.color == CLUSTERED_COLOR).count();
    let isolated = series.iter().filter(|s| s.color == ISOLATED_COLOR).count();
    assert_eq!((clustered, isolated), (15, 14));
    assert_eq!(series[28].name, "Event 28");

    let summary = format_summary(&out.studies, &config);
    assert!(summary.contains("(n=15)"));
    assert!(summary.contains("(n=14)"));

    let plot = render_ascii(&series, 60, 12);
    assert_eq!(plot.lines().count(), 13);
}
