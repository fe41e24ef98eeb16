//! Gate execution and orchestration.
//!
//! Wires the pipeline together for one invocation: load config, read the raw
//! scanner output, classify, aggregate, decide, render. The exit code is
//! returned as a value; only `main` turns it into process termination.

use crate::aggregator::aggregate;
use crate::classifier::Classifier;
use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::error::{GateError, Result};
use crate::finding::{ScanReport, Severity};
use crate::policy::{ExitDecision, decide};
use crate::reporter::{Reporter, json::JsonReporter, terminal::TerminalReporter};
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// CLI flags merged over config-file values merged over builtin defaults.
#[derive(Debug, Clone)]
pub struct EffectiveOptions {
    pub target: String,
    pub ignore_warnings: bool,
    pub format: OutputFormat,
    pub short: bool,
    pub level: Severity,
}

pub fn effective_options(cli: &Cli, config: &Config) -> Result<EffectiveOptions> {
    let format = match (cli.format, config.format.as_deref()) {
        (Some(format), _) => format,
        (None, Some(value)) => {
            OutputFormat::parse(value).ok_or_else(|| GateError::ConfigValueError {
                key: "format".to_string(),
                value: value.to_string(),
            })?
        }
        (None, None) => OutputFormat::default(),
    };

    let level = match (cli.level, config.level.as_deref()) {
        (Some(level), _) => level,
        (None, Some(value)) => {
            Severity::parse(value).ok_or_else(|| GateError::ConfigValueError {
                key: "level".to_string(),
                value: value.to_string(),
            })?
        }
        (None, None) => Severity::Pass,
    };

    let target = match cli.target.clone() {
        Some(target) => target,
        None if cli.input.as_os_str() == "-" => "<stdin>".to_string(),
        None => cli.input.display().to_string(),
    };

    Ok(EffectiveOptions {
        target,
        ignore_warnings: cli.ignore_warnings || config.ignore_warnings,
        format,
        short: cli.short || config.short,
        level,
    })
}

/// Evaluate one target's raw alerts. Pure with respect to the process: no
/// I/O, no exit; callers get the report and the decision back.
pub fn evaluate(target: &str, raw: &str, ignore_warnings: bool) -> Result<(ScanReport, ExitDecision)> {
    let findings = Classifier::new().classify(raw)?;
    let report = aggregate(target, findings);
    let decision = decide(&report.counts, ignore_warnings);
    Ok((report, decision))
}

fn read_input(input: &Path) -> Result<String> {
    if input.as_os_str() == "-" {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .map_err(|source| GateError::ReadError {
                path: "<stdin>".to_string(),
                source,
            })?;
        Ok(raw)
    } else {
        fs::read_to_string(input).map_err(|source| GateError::ReadError {
            path: input.display().to_string(),
            source,
        })
    }
}

/// Run one gate invocation and return the exit code to terminate with.
pub fn run(cli: &Cli) -> Result<u8> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::discover(Path::new("."))?.unwrap_or_default(),
    };
    let options = effective_options(cli, &config)?;

    let raw = read_input(&cli.input)?;
    let (report, decision) = evaluate(&options.target, &raw, options.ignore_warnings)?;

    debug!(
        target = %report.target,
        pass = report.counts.pass,
        warn = report.counts.warn,
        fail = report.counts.fail,
        code = decision.code,
        "gate evaluated"
    );

    let reporter: Box<dyn Reporter> = match options.format {
        OutputFormat::Terminal => Box::new(
            TerminalReporter::new()
                .with_short(options.short)
                .with_min_level(options.level),
        ),
        OutputFormat::Json => Box::new(JsonReporter::new()),
    };
    let output = reporter.report(&report, &decision);

    match &cli.output {
        Some(path) => fs::write(path, &output).map_err(|source| GateError::WriteError {
            path: path.display().to_string(),
            source,
        })?,
        None => print!("{}", output),
    }

    Ok(decision.code)
}
