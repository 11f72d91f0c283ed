//! `keynote-lpm` library crate.
//!
//! The binary (`lpm`) is a thin wrapper around this library so that:
//!
//! - the statistics and window rules are testable without network access
//! - the market-data source can be swapped behind [`data::PriceSource`]

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod plot;
pub mod report;
