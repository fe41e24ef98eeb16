use crate::finding::Severity;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl OutputFormat {
    /// Parse a config-file value ("terminal" or "json", case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "terminal" => Some(OutputFormat::Terminal),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "scan-gate",
    version,
    about = "Exit-code gate for baseline security scan output",
    long_about = "scan-gate classifies raw baseline-scan alerts into PASS/WARN/FAIL findings, \
aggregates per-severity counts, prints a deterministic report, and exits with a code CI \
pipelines can gate on (0 pass, 1 fail, 2 warn, 3 no findings, 4 unparseable input)."
)]
pub struct Cli {
    /// Scanner output to evaluate (file path, or "-" for stdin)
    pub input: PathBuf,

    /// Target identifier being scanned (URL or resource name)
    #[arg(short, long)]
    pub target: Option<String>,

    /// Do not fail the gate on WARN findings
    #[arg(short = 'I', long)]
    pub ignore_warnings: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Short report: hide PASS findings and evidence URLs
    #[arg(short, long)]
    pub short: bool,

    /// Minimum severity to include in the report
    #[arg(short, long, value_enum)]
    pub level: Option<Severity>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file path (default: ./.scan-gate.yaml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
