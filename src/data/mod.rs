//! Market-data access.
//!
//! The pipeline only needs "daily closes for a ticker over a date range", so
//! that is the whole [`PriceSource`] surface. `YahooClient` is the production
//! source; tests plug in an in-memory one.

use crate::domain::{PriceBar, StudyWindow};
use crate::error::AppError;

pub mod yahoo;

pub use yahoo::YahooClient;

pub trait PriceSource {
    /// Daily bars for `ticker` within `window` (inclusive), oldest first.
    fn fetch_closes(&self, ticker: &str, window: &StudyWindow) -> Result<Vec<PriceBar>, AppError>;
}
