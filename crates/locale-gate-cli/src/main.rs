// locale-gate-cli/src/main.rs
// ============================================================================
// Module: Locale Gate CLI Entry Point
// Description: Single-command driver for the translation-consistency gate.
// Purpose: Load config, run one validation pass, render, and map exit codes.
// Dependencies: clap, locale-gate-config, locale-gate-core, thiserror.
// ============================================================================

//! ## Overview
//! The Locale Gate CLI runs one batch validation pass over a locale
//! directory tree and exits `0` when no blocking issue was found, `1` when
//! at least one was, and `2` when the source locale itself could not be
//! loaded. A CI environment switches output to plain text with
//! workflow-command annotations; it never changes validation outcome. All
//! user-facing strings are routed through the i18n catalog.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Parser;
use locale_gate_cli::report::RenderOptions;
use locale_gate_cli::report::annotation_lines;
use locale_gate_cli::report::detect_ci;
use locale_gate_cli::report::render_report;
use locale_gate_cli::t;
use locale_gate_config::LocaleGateConfig;
use locale_gate_core::GrammarParser;
use locale_gate_core::LocaleId;
use locale_gate_core::ValidationEngine;
use thiserror::Error;

// ============================================================================
// SECTION: Exit Codes
// ============================================================================

/// Exit status when at least one blocking issue was found.
const EXIT_BLOCKED: u8 = 1;
/// Exit status when the source locale could not be loaded at all.
const EXIT_SOURCE_UNREADABLE: u8 = 2;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "locale-gate", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue)]
    show_version: bool,
    /// Path to the config file (defaults to `locale-gate.toml` if present).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Locale root directory (overrides the config).
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,
    /// Source locale identifier (overrides the config).
    #[arg(long = "source-locale", value_name = "LOCALE")]
    source_locale: Option<String>,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for localized error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a localized message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes one validation run end to end.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let config = LocaleGateConfig::load(cli.config.as_deref())
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?;

    let mut engine_config = config.engine_config();
    if let Some(root) = cli.root {
        engine_config.root = root;
    }
    if let Some(source_locale) = cli.source_locale {
        engine_config.source_locale = LocaleId::new(source_locale);
    }

    let ci = detect_ci(
        std::env::var("CI").ok().as_deref(),
        std::env::var("GITHUB_ACTIONS").ok().as_deref(),
    );

    let parser = GrammarParser::new();
    let engine = ValidationEngine::new(engine_config.clone(), &parser);
    let report = match engine.run() {
        Ok(report) => report,
        Err(err) => {
            let _ = write_stderr_line(&t!("run.fatal", error = err));
            return Ok(ExitCode::from(EXIT_SOURCE_UNREADABLE));
        }
    };

    let options = RenderOptions {
        color: !ci,
        missing_display_cap: config.report.missing_display_cap,
        bar_width: config.report.bar_width,
    };
    let rendered = render_report(&report, &options);
    write_stdout(&rendered).map_err(|err| CliError::new(output_error("stdout", &err)))?;

    if ci {
        for line in annotation_lines(&report, &engine_config.root) {
            write_stdout_line(&line)
                .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        }
    }

    if report.has_errors() {
        Ok(ExitCode::from(EXIT_BLOCKED))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a string to stdout without a trailing newline.
fn write_stdout(text: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    stdout.write_all(text.as_bytes())
}

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats a localized output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
