//! Diff command
//!
//! Usage: apidiff diff --old <FILE> --new <FILE> [--config <TOML>] [--output <FILE>]

use apidiff_core::errors::{ApiDiffError, ExError};
use apidiff_core::logging_facility::{init, Profile};
use apidiff_core::{
    compute_diff, log_op_end, log_op_error, log_op_start, render_document, render_report,
    render_summary, ReportOptions,
};
use clap::{Args, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::Instant;

const OP_DIFF_COMMAND: &str = "cli_diff";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Markdown,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogProfile {
    Dev,
    Prod,
}

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Snapshot of the older version
    #[arg(long)]
    pub old: PathBuf,

    /// Snapshot of the newer version
    #[arg(long)]
    pub new: PathBuf,

    /// TOML file with report options
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Show private members and count them in totals
    #[arg(long)]
    pub include_private: bool,

    /// Show deprecated members and count them in totals
    #[arg(long)]
    pub include_deprecated: bool,

    /// Show class-level attribute changes
    #[arg(long)]
    pub class_details: bool,

    /// Per-action breakdown in the summary
    #[arg(long)]
    pub verbose_summary: bool,

    /// Title line of the Markdown document
    #[arg(long, default_value = "API Changes")]
    pub title: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
    pub format: OutputFormat,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit structured logs on stderr
    #[arg(long, value_enum)]
    pub log: Option<LogProfile>,
}

impl DiffArgs {
    fn flag_options(&self) -> ReportOptions {
        ReportOptions {
            include_private: self.include_private,
            include_deprecated: self.include_deprecated,
            include_class_details: self.class_details,
            verbose_summary: self.verbose_summary,
        }
    }
}

/// Execute diff command
pub fn execute(args: DiffArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.log {
        Some(LogProfile::Dev) => init(Profile::Development),
        Some(LogProfile::Prod) => init(Profile::Production),
        None => {}
    }

    let start = Instant::now();
    log_op_start!(OP_DIFF_COMMAND);

    match run(&args) {
        Ok(()) => {
            log_op_end!(
                OP_DIFF_COMMAND,
                duration_ms = start.elapsed().as_millis() as u64
            );
            Ok(())
        }
        Err(e) => {
            log_op_error!(
                OP_DIFF_COMMAND,
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            Err(e.into())
        }
    }
}

fn run(args: &DiffArgs) -> Result<(), ExError> {
    let options = match &args.config {
        Some(path) => ReportOptions::from_toml_str(&read_text(path)?)?,
        None => ReportOptions::default(),
    }
    .merge_flags(args.flag_options());

    let new_bytes = read_bytes(&args.new)?;
    let old_bytes = read_bytes(&args.old)?;
    let diff = compute_diff(&new_bytes, &old_bytes)?;

    let rendered = match args.format {
        OutputFormat::Markdown => {
            let section = format!(
                "{}\n{}",
                render_report(&diff, &options),
                render_summary(&diff.counts, &options)
            );
            render_document(&args.title, &[section])
        }
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&diff)?;
            json.push('\n');
            json
        }
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered).map_err(|e| io_error(path, e))?;
            println!("✓ Report written to {}", path.display());
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

fn read_bytes(path: &Path) -> Result<Vec<u8>, ExError> {
    std::fs::read(path).map_err(|e| io_error(path, e))
}

fn read_text(path: &Path) -> Result<String, ExError> {
    std::fs::read_to_string(path).map_err(|e| io_error(path, e))
}

fn io_error(path: &Path, err: std::io::Error) -> ExError {
    ApiDiffError::Io {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
    .into()
}
