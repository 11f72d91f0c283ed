//! Shared domain types.
//!
//! These are kept small and serializable so a run can be exported to JSON
//! as-is.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::calendar::Event;
use crate::domain::window::{StudyWindow, WindowOffsets};

/// One daily bar from the market-data source. Only the close is used.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub close: f64,
}

/// Everything computed for a single keynote.
#[derive(Debug, Clone, Serialize)]
pub struct EventStudy {
    /// Position of the event in the keynote table (used for the series name).
    pub index: usize,
    pub event: Event,
    pub invitation: Option<NaiveDate>,
    pub window: StudyWindow,
    pub bars: Vec<PriceBar>,
    pub returns: Vec<f64>,
    /// `lpm[i]` is the lower partial moment of `returns[..=i]`.
    pub lpm: Vec<f64>,
}

impl EventStudy {
    pub fn invitation_lead_days(&self) -> Option<i64> {
        self.invitation.map(|inv| (self.event.date - inv).num_days())
    }

    pub fn final_lpm(&self) -> Option<f64> {
        self.lpm.last().copied()
    }

    pub fn peak_lpm(&self) -> Option<f64> {
        self.lpm.iter().copied().reduce(f64::max)
    }
}

/// Run configuration (resolved from CLI flags and environment).
#[derive(Debug, Clone)]
pub struct StudyConfig {
    pub ticker: String,
    /// Order of the moment.
    pub alpha: f64,
    /// Minimum acceptable daily return.
    pub target: f64,
    pub offsets: WindowOffsets,

    pub chart_path: PathBuf,
    pub chart_title: String,
    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export_csv: Option<PathBuf>,
    pub export_json: Option<PathBuf>,
    pub quiet: bool,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            ticker: "AAPL".to_string(),
            alpha: 2.0,
            target: 0.0005,
            offsets: WindowOffsets::default(),
            chart_path: PathBuf::from("lpm.svg"),
            chart_title: "Lower-Partial Moments".to_string(),
            plot: true,
            plot_width: 100,
            plot_height: 25,
            export_csv: None,
            export_json: None,
            quiet: false,
        }
    }
}
