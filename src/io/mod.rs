//! Output helpers: CSV and JSON exports of a study run.

pub mod export;

pub use export::*;
