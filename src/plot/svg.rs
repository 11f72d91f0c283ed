//! SVG scatter chart of the LPM trends, drawn with Plotters.

use std::path::Path;

use plotters::prelude::*;

use crate::error::AppError;
use crate::plot::series::{ChartSeries, MARKER_OUTLINE_WIDTH, MARKER_SIZE};

const CHART_SIZE: (u32, u32) = (1200, 720);

/// Write all series into a single chart at `path`.
pub fn render_svg(series: &[ChartSeries], title: &str, path: &Path) -> Result<(), AppError> {
    let (x_max, y_max) = chart_bounds(series);
    let radius = (MARKER_SIZE / 2) as i32;

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(16)
        .set_label_area_size(LabelAreaPosition::Left, 80)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(-1.0..x_max, 0.0..y_max)
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .x_desc("Trading day in study window")
        .y_desc("Lower partial moment")
        .y_label_formatter(&|v| format!("{v:.1e}"))
        .draw()
        .map_err(draw_err)?;

    for s in series {
        let fill = RGBColor(s.color.r, s.color.g, s.color.b).mix(s.color.a);
        chart
            .draw_series(s.points.iter().map(|&(x, y)| {
                EmptyElement::at((x, y))
                    + Circle::new((0, 0), radius, fill.filled())
                    + Circle::new((0, 0), radius, BLACK.stroke_width(MARKER_OUTLINE_WIDTH))
            }))
            .map_err(draw_err)?
            .label(s.name.clone())
            .legend(move |(x, y)| Circle::new((x, y), 4, fill.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .draw()
        .map_err(draw_err)?;

    root.present().map_err(draw_err)?;
    Ok(())
}

/// Upper x/y bounds with a little headroom; LPM values are never negative.
fn chart_bounds(series: &[ChartSeries]) -> (f64, f64) {
    let mut x_max = 0.0_f64;
    let mut y_max = 0.0_f64;
    for &(x, y) in series.iter().flat_map(|s| s.points.iter()) {
        if x.is_finite() {
            x_max = x_max.max(x);
        }
        if y.is_finite() {
            y_max = y_max.max(y);
        }
    }
    let y_max = if y_max > 0.0 { y_max * 1.05 } else { 1e-4 };
    (x_max + 1.0, y_max)
}

fn draw_err<E: std::fmt::Display>(e: E) -> AppError {
    AppError::usage(format!("Failed to draw chart: {e}"))
}
