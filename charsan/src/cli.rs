// charsan/src/cli.rs
//! This file defines the command-line interface (CLI) for the charsan
//! application and its arguments.
//! License: MIT OR Apache-2.0

use charsan_core::TrimMode;
use clap::Parser;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "charsan",
    author = "Relay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Restrict text to a character set",
    long_about = "charsan reads values from its arguments (or stdin, one per line) and rewrites each so it only contains characters from a charset. Invalid runs at the ends can be trimmed and the remaining invalid characters are replaced by a single replacement character. Presets bundle a charset, replacement and trim mode under a name."
)]
pub struct Cli {
    /// Values to sanitize. Reads stdin line by line when omitted.
    #[arg(value_name = "VALUE")]
    pub values: Vec<String>,

    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all log output.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', help = "Enable debug logging.", conflicts_with = "quiet")]
    pub debug: bool,

    /// Preset supplying the base options.
    #[arg(long, short = 'p', value_name = "NAME", default_value = "default", help = "Preset to start from.")]
    pub preset: String,

    /// Path to a preset file (YAML) merged over the built-in presets.
    #[arg(long = "config", value_name = "FILE", env = "CHARSAN_CONFIG", help = "Path to a custom preset file (YAML).")]
    pub config: Option<PathBuf>,

    /// Charset spec overriding the preset's.
    #[arg(long, short = 'c', value_name = "SPEC", help = "Allowed characters, e.g. 'a-z0-9_'.")]
    pub charset: Option<String>,

    /// Replacement character overriding the preset's.
    #[arg(long, short = 'r', value_name = "CHAR", help = "Character substituted for invalid characters.")]
    pub replacement: Option<String>,

    /// Trim mode overriding the preset's.
    #[arg(long, short = 't', value_name = "MODE", help = "Trim mode: none, left, right or both.")]
    pub trim: Option<TrimMode>,

    /// Treat each input as a JSON value and print JSON.
    #[arg(long, help = "Parse each input as JSON (so `null` passes through) and print JSON.")]
    pub json: bool,

    /// Continue past inputs that fail to sanitize.
    #[arg(long = "keep-going", short = 'k', help = "Report failed inputs on stderr and continue.")]
    pub keep_going: bool,

    /// Print the available presets and exit.
    #[arg(long = "list-presets", help = "List all available presets.")]
    pub list_presets: bool,
}
