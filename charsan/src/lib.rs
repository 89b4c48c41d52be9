// charsan/src/lib.rs
//! # charsan CLI Application
//!
//! This crate provides the command-line interface over `charsan-core`.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
