//! Command-line parsing.
//!
//! Every flag has a default, so a bare `lpm` runs the full study.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "lpm",
    version,
    about = "Lower partial moments of daily returns around keynote events"
)]
pub struct Cli {
    /// Ticker to study.
    #[arg(short = 't', long, default_value = "AAPL")]
    pub ticker: String,

    /// Order of the moment (alpha).
    #[arg(short = 'a', long, default_value_t = 2.0)]
    pub alpha: f64,

    /// Minimum acceptable daily return (tau).
    #[arg(long, default_value_t = 0.0005, allow_negative_numbers = true)]
    pub target: f64,

    /// Calendar days before the keynote (weekday keynotes).
    #[arg(long, default_value_t = 182)]
    pub days_before: i64,

    /// Calendar days after the keynote (weekday keynotes).
    #[arg(long, default_value_t = 42)]
    pub days_after: i64,

    /// SVG chart output path.
    #[arg(long, default_value = "lpm.svg")]
    pub chart: PathBuf,

    /// Chart title.
    #[arg(long, default_value = "Lower-Partial Moments")]
    pub title: String,

    /// Skip the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Terminal plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Terminal plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Export per-day LPM values to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export all studies to JSON.
    #[arg(long = "export-json")]
    pub export_json: Option<PathBuf>,

    /// Suppress per-event progress on stderr.
    #[arg(short = 'q', long)]
    pub quiet: bool,
}
