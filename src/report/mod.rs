//! Reporting: run summary table and group statistics.

pub mod format;

pub use format::*;
