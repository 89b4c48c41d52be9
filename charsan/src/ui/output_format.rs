//! Colored message helpers and the preset table.
//! License: MIT OR Apache-2.0

use charsan_core::Preset;
use comfy_table::{presets::UTF8_FULL, Table};
use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Writes an error line, colored red when `supports_color` is set.
pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "error:".red().bold(), msg)
    } else {
        writeln!(writer, "error: {}", msg)
    }
}

/// Writes a warning line, colored yellow when `supports_color` is set.
pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "warning:".yellow().bold(), msg)
    } else {
        writeln!(writer, "warning: {}", msg)
    }
}

/// Renders presets as a table.
pub fn presets_table(presets: &[Preset]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Name", "Charset", "Replacement", "Trim", "Description"]);
    for preset in presets {
        table.add_row(vec![
            preset.name.clone(),
            preset.options.charset.clone(),
            preset.options.replacement.clone(),
            preset.options.trim_mode.to_string(),
            preset.description.clone().unwrap_or_default(),
        ]);
    }
    table
}
