//! Sanitize command implementation: runs every input through a `Sanitizer`.

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;

use charsan_core::{Sanitizer, Value};

use crate::ui::output_format;

/// Options for `run_sanitize`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SanitizeRunOptions {
    /// Inputs are JSON values and outputs are JSON.
    pub json: bool,
    /// Keep processing after a failed input.
    pub keep_going: bool,
    /// Color error messages.
    pub color: bool,
}

/// Counts reported after a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: usize,
    pub failed: usize,
}

/// Sanitizes each input, writing results to `out` and failures to `err`.
///
/// Without `keep_going` the first failure is returned as an error.
pub fn run_sanitize<I, O, E>(
    sanitizer: &Sanitizer,
    inputs: I,
    opts: SanitizeRunOptions,
    out: &mut O,
    err: &mut E,
) -> Result<RunSummary>
where
    I: IntoIterator<Item = Result<String>>,
    O: Write,
    E: Write,
{
    info!("Starting sanitize run.");
    let mut summary = RunSummary::default();

    for (index, input) in inputs.into_iter().enumerate() {
        let input = input.context("Failed to read input")?;
        summary.processed += 1;

        match sanitize_one(sanitizer, &input, opts.json) {
            Ok(line) => writeln!(out, "{}", line)?,
            Err(e) if opts.keep_going => {
                summary.failed += 1;
                let msg = format!("input {}: {:#}", index + 1, e);
                output_format::print_error_message(err, &msg, opts.color)?;
            }
            Err(e) => return Err(e.context(format!("Failed to sanitize input {}", index + 1))),
        }
    }

    debug!("Sanitize run finished: {:?}", summary);
    Ok(summary)
}

fn sanitize_one(sanitizer: &Sanitizer, input: &str, json: bool) -> Result<String> {
    if json {
        let value: Value = serde_json::from_str(input)
            .with_context(|| format!("Invalid JSON value: {}", input))?;
        let sanitized = sanitizer.sanitize(value)?;
        Ok(serde_json::to_string(&sanitized)?)
    } else {
        Ok(sanitizer.sanitize_str(input)?.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use charsan_core::TrimMode;

    fn inputs(lines: &[&str]) -> Vec<Result<String>> {
        lines.iter().map(|s| Ok(s.to_string())).collect()
    }

    #[test]
    fn test_plain_run() -> Result<()> {
        let sanitizer = Sanitizer::new("a-z0-9", "-", TrimMode::Both)?;
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let summary = run_sanitize(
            &sanitizer,
            inputs(&["Hello World", "ok"]),
            SanitizeRunOptions::default(),
            &mut out,
            &mut err,
        )?;
        assert_eq!(summary, RunSummary { processed: 2, failed: 0 });
        assert_eq!(String::from_utf8(out)?, "hello-world\nok\n");
        assert!(err.is_empty());
        Ok(())
    }

    #[test]
    fn test_json_run_passes_null_through() -> Result<()> {
        let sanitizer = Sanitizer::new("a-z0-9", "-", TrimMode::Left)?;
        let (mut out, mut err) = (Vec::new(), Vec::new());
        run_sanitize(
            &sanitizer,
            inputs(&["null", "\"Foo Bar\"", "42"]),
            SanitizeRunOptions { json: true, ..Default::default() },
            &mut out,
            &mut err,
        )?;
        assert_eq!(String::from_utf8(out)?, "null\n\"foo-bar\"\n\"42\"\n");
        Ok(())
    }

    #[test]
    fn test_keep_going_counts_failures() -> Result<()> {
        let sanitizer = Sanitizer::new("a-z", "-", TrimMode::Left)?;
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let summary = run_sanitize(
            &sanitizer,
            inputs(&["!!!", "abc"]),
            SanitizeRunOptions { keep_going: true, ..Default::default() },
            &mut out,
            &mut err,
        )?;
        assert_eq!(summary, RunSummary { processed: 2, failed: 1 });
        assert_eq!(String::from_utf8(out)?, "abc\n");
        assert!(String::from_utf8(err)?.starts_with("error: input 1:"));
        Ok(())
    }

    #[test]
    fn test_first_failure_stops_run() {
        let sanitizer = Sanitizer::new("a-z", "-", TrimMode::Left).unwrap();
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let result = run_sanitize(
            &sanitizer,
            inputs(&["abc", "!!!", "def"]),
            SanitizeRunOptions::default(),
            &mut out,
            &mut err,
        );
        let e = result.unwrap_err();
        assert!(format!("{:#}", e).contains("Failed to sanitize input 2"));
        assert_eq!(String::from_utf8(out).unwrap(), "abc\n");
    }
}
