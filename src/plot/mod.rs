//! Rendering: series assembly, the SVG chart, and a terminal preview.

pub mod ascii;
pub mod series;
pub mod svg;

pub use ascii::render_ascii;
pub use series::*;
pub use svg::render_svg;
