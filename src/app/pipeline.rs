//! The study pipeline, separated from presentation:
//! calendar -> study window -> price fetch -> returns -> LPM trend, per event.
//!
//! Events are processed one after another; the first failure aborts the run.

use crate::data::{PriceSource, YahooClient};
use crate::domain::{Event, EventStudy, KeynoteCalendar, StudyConfig, StudyWindow};
use crate::error::AppError;
use crate::math::{lpm_trend, simple_returns};

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub studies: Vec<EventStudy>,
}

/// Run every keynote in the compiled-in calendar against Yahoo Finance.
pub fn run_study(config: &StudyConfig) -> Result<RunOutput, AppError> {
    let source = YahooClient::from_env()?;
    let calendar = KeynoteCalendar::load()?;
    run_study_with_source(config, calendar, &source)
}

/// Run the pipeline over `calendar` with an arbitrary price source.
pub fn run_study_with_source(
    config: &StudyConfig,
    calendar: KeynoteCalendar,
    source: &dyn PriceSource,
) -> Result<RunOutput, AppError> {
    validate_config(config)?;

    let mut studies = Vec::with_capacity(calendar.events.len());
    for (index, event) in calendar.events.iter().enumerate() {
        let study = study_event(index, *event, &calendar, source, config)?;
        if !config.quiet {
            eprintln!(
                "[{}/{}] {} {}..{}: {} bars, {} returns",
                index + 1,
                calendar.events.len(),
                study.event.date,
                study.window.start,
                study.window.end,
                study.bars.len(),
                study.returns.len()
            );
        }
        studies.push(study);
    }

    Ok(RunOutput { studies })
}

/// Fetch and compute the LPM trend for one event.
pub fn study_event(
    index: usize,
    event: Event,
    calendar: &KeynoteCalendar,
    source: &dyn PriceSource,
    config: &StudyConfig,
) -> Result<EventStudy, AppError> {
    let window = StudyWindow::around(event.date, config.offsets)?;
    let bars = source.fetch_closes(&config.ticker, &window)?;

    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let returns = simple_returns(&closes);
    let lpm = lpm_trend(config.alpha, config.target, &returns);

    Ok(EventStudy {
        index,
        event,
        invitation: calendar.invitation_for(event.date),
        window,
        bars,
        returns,
        lpm,
    })
}

fn validate_config(config: &StudyConfig) -> Result<(), AppError> {
    if config.ticker.trim().is_empty() {
        return Err(AppError::usage("Ticker must not be empty."));
    }
    if !(config.alpha.is_finite() && config.alpha > 0.0) {
        return Err(AppError::usage(format!("Moment order must be > 0 (got {}).", config.alpha)));
    }
    if !config.target.is_finite() {
        return Err(AppError::usage("Target return must be finite."));
    }
    if config.offsets.days_before < 0 || config.offsets.days_after < 0 {
        return Err(AppError::usage("Window offsets must be non-negative."));
    }
    Ok(())
}
