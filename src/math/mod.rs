//! Return-series statistics: simple returns and lower partial moments.

pub mod lpm;
pub mod returns;

pub use lpm::*;
pub use returns::*;
