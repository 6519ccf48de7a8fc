//! Driver for the kprg command-line tool
//!
//! Reads a report, runs the parser over it and writes the records as JSON.
//! Diagnostics go to stderr, one per line.

use anyhow::Context;
use kprg_ast::{ParseOutput, TestCaseRecord};
use kprg_parser::Parser;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Report read when no file is named
pub const DEFAULT_INPUT: &str = "keccak-prg-output.txt";

/// Exit status when `--strict` is set and diagnostics were produced
pub const EXIT_DIAGNOSTICS: i32 = 2;

#[derive(Debug, Clone)]
pub struct Options {
    pub input: PathBuf,
    /// Write records here instead of stdout
    pub output: Option<PathBuf>,
    pub pretty: bool,
    pub strict: bool,
    pub quiet: bool,
    /// Also write diagnostics as a JSON array here
    pub diagnostics_json: Option<PathBuf>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: None,
            pretty: false,
            strict: false,
            quiet: false,
            diagnostics_json: None,
        }
    }
}

/// Serialize records as a JSON array
///
/// # Errors
///
/// Returns an error if serialization fails
pub fn render_records(records: &[TestCaseRecord], pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(records)
    } else {
        serde_json::to_string(records)
    }
}

/// Read and parse a report file
///
/// # Errors
///
/// Returns an error if the file cannot be read
pub fn convert_file(path: &Path) -> anyhow::Result<ParseOutput> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let parser = Parser::new_with_filename(&content, &path.display().to_string());
    Ok(parser.parse())
}

/// Run the tool, writing records and diagnostics to the given streams
///
/// Returns the process exit status.
///
/// # Errors
///
/// Returns an error on I/O or serialization failures
pub fn run_with<O: Write, E: Write>(
    options: &Options,
    stdout: &mut O,
    stderr: &mut E,
) -> anyhow::Result<i32> {
    let output = convert_file(&options.input)?;

    if !options.quiet {
        for diagnostic in &output.diagnostics {
            writeln!(stderr, "{diagnostic}")?;
        }
    }

    let json = render_records(&output.records, options.pretty)?;
    match &options.output {
        Some(path) => fs::write(path, format!("{json}\n"))
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => writeln!(stdout, "{json}")?,
    }

    if let Some(path) = &options.diagnostics_json {
        let diagnostics = serde_json::to_string_pretty(&output.diagnostics)?;
        fs::write(path, format!("{diagnostics}\n"))
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    if options.strict && !output.is_clean() {
        return Ok(EXIT_DIAGNOSTICS);
    }
    Ok(0)
}

/// Run the tool against the process's stdout and stderr
///
/// # Errors
///
/// Returns an error on I/O or serialization failures
pub fn run(options: &Options) -> anyhow::Result<i32> {
    run_with(options, &mut io::stdout().lock(), &mut io::stderr().lock())
}
