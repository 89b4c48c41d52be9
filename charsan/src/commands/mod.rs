//! Command implementations for the charsan CLI.

pub mod options;
pub mod sanitize;
