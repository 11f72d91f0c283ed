//! Export per-day LPM values to CSV and whole studies to JSON.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::domain::{EventStudy, StudyConfig};
use crate::error::AppError;

/// Write one row per (event, day) to a CSV file.
pub fn write_lpm_csv(path: &Path, studies: &[EventStudy]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::usage(format!("Failed to create export CSV '{}': {e}", path.display())))?;
    write_lpm_rows(BufWriter::new(file), studies)
        .map_err(|e| AppError::usage(format!("Failed to write export CSV '{}': {e}", path.display())))
}

fn write_lpm_rows<W: Write>(mut out: W, studies: &[EventStudy]) -> std::io::Result<()> {
    writeln!(out, "event,event_date,clustered,day,date,return,lpm")?;
    for s in studies {
        for (day, lpm) in s.lpm.iter().enumerate() {
            // lpm[day] is as of the close of bars[day + 1].
            let date = s
                .bars
                .get(day + 1)
                .map(|b| b.date.to_string())
                .unwrap_or_default();
            let ret = s.returns.get(day).copied().unwrap_or(f64::NAN);
            writeln!(
                out,
                "{},{},{},{},{},{:.10},{:.12}",
                s.index, s.event.date, s.event.clustered, day, date, ret, lpm
            )?;
        }
    }
    out.flush()
}

#[derive(Serialize)]
struct StudyExport<'a> {
    ticker: &'a str,
    alpha: f64,
    target: f64,
    studies: &'a [EventStudy],
}

/// Write the run parameters and every study as pretty JSON.
pub fn write_studies_json(path: &Path, studies: &[EventStudy], config: &StudyConfig) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::usage(format!("Failed to create export JSON '{}': {e}", path.display())))?;
    let export = StudyExport {
        ticker: &config.ticker,
        alpha: config.alpha,
        target: config.target,
        studies,
    };
    serde_json::to_writer_pretty(BufWriter::new(file), &export)
        .map_err(|e| AppError::usage(format!("Failed to write export JSON: {e}")))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::{Event, PriceBar, StudyWindow};

    fn study() -> EventStudy {
        let d = |day| NaiveDate::from_ymd_opt(2014, 9, day).unwrap();
        EventStudy {
            index: 4,
            event: Event { date: d(9), clustered: true },
            invitation: None,
            window: StudyWindow { start: d(1), end: d(20) },
            bars: vec![
                PriceBar { date: d(2), close: 100.0 },
                PriceBar { date: d(3), close: 101.0 },
                PriceBar { date: d(4), close: 98.98 },
            ],
            returns: vec![0.01, -0.02],
            lpm: vec![0.0, 2.10125e-4],
        }
    }

    #[test]
    fn csv_rows_line_up_with_bar_dates() {
        let mut buf = Vec::new();
        write_lpm_rows(&mut buf, &[study()]).unwrap();
        let txt = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = txt.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "event,event_date,clustered,day,date,return,lpm");
        assert!(lines[1].starts_with("4,2014-09-09,true,0,2014-09-03,0.0100000000,"));
        assert!(lines[2].starts_with("4,2014-09-09,true,1,2014-09-04,-0.0200000000,0.000210125"));
    }

    #[test]
    fn json_export_carries_parameters_and_series() {
        let studies = [study()];
        let export = StudyExport {
            ticker: "AAPL",
            alpha: 2.0,
            target: 0.0005,
            studies: &studies,
        };
        let value = serde_json::to_value(&export).unwrap();
        assert_eq!(value["ticker"], "AAPL");
        assert_eq!(value["studies"][0]["event"]["date"], "2014-09-09");
        assert_eq!(value["studies"][0]["event"]["clustered"], true);
        assert_eq!(value["studies"][0]["lpm"].as_array().unwrap().len(), 2);
    }
}
