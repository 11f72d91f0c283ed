//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the per-keynote study pipeline
//! - prints the summary and terminal plot
//! - writes the SVG chart and optional exports

use clap::Parser;

use crate::cli::Cli;
use crate::domain::{StudyConfig, WindowOffsets};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `lpm` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = study_config_from_args(&cli);
    let run = pipeline::run_study(&config)?;

    println!("{}", crate::report::format_summary(&run.studies, &config));

    let series = crate::plot::build_series(&run.studies);
    if config.plot {
        println!(
            "{}",
            crate::plot::render_ascii(&series, config.plot_width, config.plot_height)
        );
    }

    crate::plot::render_svg(&series, &config.chart_title, &config.chart_path)?;
    println!("Chart written to {}", config.chart_path.display());

    if let Some(path) = &config.export_csv {
        crate::io::write_lpm_csv(path, &run.studies)?;
    }
    if let Some(path) = &config.export_json {
        crate::io::write_studies_json(path, &run.studies, &config)?;
    }

    Ok(())
}

pub fn study_config_from_args(cli: &Cli) -> StudyConfig {
    StudyConfig {
        ticker: cli.ticker.trim().to_uppercase(),
        alpha: cli.alpha,
        target: cli.target,
        offsets: WindowOffsets {
            days_before: cli.days_before,
            days_after: cli.days_after,
        },
        chart_path: cli.chart.clone(),
        chart_title: cli.title.clone(),
        plot: !cli.no_plot,
        plot_width: cli.width,
        plot_height: cli.height,
        export_csv: cli.export.clone(),
        export_json: cli.export_json.clone(),
        quiet: cli.quiet,
    }
}
