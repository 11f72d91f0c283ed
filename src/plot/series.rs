//! Chart series assembly: one marker series per keynote.

use crate::domain::EventStudy;

/// Marker diameter in pixels.
pub const MARKER_SIZE: u32 = 10;
/// Width of the black marker outline in pixels.
pub const MARKER_OUTLINE_WIDTH: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Light pink for keynotes close to another announcement.
pub const CLUSTERED_COLOR: Rgba = Rgba::new(255, 182, 193, 0.9);
/// Dark red for stand-alone keynotes.
pub const ISOLATED_COLOR: Rgba = Rgba::new(152, 0, 0, 0.8);

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub clustered: bool,
    pub color: Rgba,
    /// `(day index, lpm)`.
    pub points: Vec<(f64, f64)>,
}

pub fn series_color(clustered: bool) -> Rgba {
    if clustered { CLUSTERED_COLOR } else { ISOLATED_COLOR }
}

pub fn build_series(studies: &[EventStudy]) -> Vec<ChartSeries> {
    studies
        .iter()
        .map(|s| ChartSeries {
            name: format!("Event {}", s.index),
            clustered: s.event.clustered,
            color: series_color(s.event.clustered),
            points: s
                .lpm
                .iter()
                .enumerate()
                .map(|(i, &y)| (i as f64, y))
                .collect(),
        })
        .collect()
}
