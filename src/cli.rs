//! Command-line interface for tfws-validate.

use clap::{ArgAction, Parser, ValueEnum};
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use tracing::{info, Level};

use crate::detect::{Kind, Runner};
use crate::document::{resolve_input, Document};
use crate::report::{self, JsonReport};

/// Exit codes. `EXIT_ERROR` covers both a missing argument and internal failures.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Usage line printed when no file is given.
pub const USAGE: &str = "Usage: tfws-validate <file.json>";

/// Validate TFWS trust manifests.
///
/// Reads one JSON file, infers whether it is an ai-trust-hub descriptor, a
/// key-history record or a tfws-adoption manifest, and runs permissive
/// structural checks for that kind.
#[derive(Parser, Debug)]
#[command(name = "tfws-validate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the JSON manifest
    pub file: Option<PathBuf>,

    /// Validate as this kind instead of detecting it
    #[arg(short, long)]
    pub kind: Option<Kind>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// When to color the severity prefix
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Log pipeline steps to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    fn enabled(self) -> bool {
        match self {
            ColorChoice::Auto => std::io::stdout().is_terminal(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

/// Install the stderr log subscriber. Safe to call more than once.
pub fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the validator, writing all diagnostics to stdout.
pub fn run(cli: &Cli) -> anyhow::Result<i32> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with_output(cli, &mut out)
}

/// Run the validator against an arbitrary writer.
pub fn run_with_output<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<i32> {
    let Some(file) = &cli.file else {
        writeln!(out, "{}", USAGE)?;
        return Ok(EXIT_ERROR);
    };

    let color = cli.format == OutputFormat::Text && cli.color.enabled();
    if color {
        colored::control::set_override(true);
    }

    let path = resolve_input(file);
    let path_str = path.to_string_lossy().to_string();
    info!(path = %path_str, "validating manifest");

    let doc = match Document::load(&path) {
        Ok(doc) => doc,
        Err(err) => {
            info!(error = %err, "manifest could not be loaded");
            match cli.format {
                OutputFormat::Json => {
                    report::write_json(out, &JsonReport::from_load_error(&path_str, &err))?
                }
                OutputFormat::Text => {
                    report::write_text(out, &[report::load_error_diagnostic(&err)], color)?
                }
            }
            out.flush()?;
            return Ok(EXIT_FAILED);
        }
    };

    let runner = Runner::new().force_kind(cli.kind);
    let result = runner.run(&doc, doc.file_name());
    info!(kind = %result.kind, passed = result.passed(), "validation finished");

    match cli.format {
        OutputFormat::Json => report::write_json(out, &JsonReport::from_result(&path_str, &result))?,
        OutputFormat::Text => report::write_text(out, &result.diagnostics, color)?,
    }
    out.flush()?;

    if result.passed() {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_FAILED)
    }
}
