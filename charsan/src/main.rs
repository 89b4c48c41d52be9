// charsan/src/main.rs
//! charsan entry point.
//!
//! Resolves the preset and overrides into a `Sanitizer` and runs every input
//! through it.

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use charsan::cli::Cli;
use charsan::commands::options::{load_presets, resolve_options, OptionOverrides};
use charsan::commands::sanitize::{run_sanitize, SanitizeRunOptions};
use charsan::logger;
use charsan::ui::output_format;

fn main() -> ExitCode {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            let color = io::stderr().is_terminal();
            let _ = output_format::print_error_message(&mut io::stderr(), &format!("{:#}", e), color);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Cli) -> Result<ExitCode> {
    let presets = load_presets(args.config.as_deref())?;

    if args.list_presets {
        println!("{}", output_format::presets_table(&presets.presets));
        return Ok(ExitCode::SUCCESS);
    }

    let overrides = OptionOverrides {
        charset: args.charset,
        replacement: args.replacement,
        trim_mode: args.trim,
    };
    let options = resolve_options(&presets, &args.preset, overrides)?;
    let sanitizer = options
        .build()
        .with_context(|| format!("Invalid sanitize options (preset '{}')", args.preset))?;

    let inputs: Box<dyn Iterator<Item = Result<String>>> = if args.values.is_empty() {
        Box::new(io::stdin().lock().lines().map(|line| line.map_err(anyhow::Error::from)))
    } else {
        Box::new(args.values.into_iter().map(Ok))
    };

    let run_opts = SanitizeRunOptions {
        json: args.json,
        keep_going: args.keep_going,
        color: io::stderr().is_terminal(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = run_sanitize(&sanitizer, inputs, run_opts, &mut out, &mut io::stderr())?;
    out.flush()?;

    if summary.failed > 0 {
        let msg = format!("{} of {} inputs failed to sanitize", summary.failed, summary.processed);
        let _ = output_format::print_warn_message(&mut io::stderr(), &msg, run_opts.color);
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
