//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the compiled-in keynote calendar (`calendar`)
//! - study windows around an event date (`window`)
//! - price bars, per-event study results and run configuration (`types`)

pub mod calendar;
pub mod types;
pub mod window;

pub use calendar::*;
pub use types::*;
pub use window::*;
