use crate::finding::{Finding, ScanReport, Severity};
use crate::policy::ExitDecision;
use crate::reporter::Reporter;
use colored::Colorize;

/// Renders the report the way the scanner itself prints it: finding lines in
/// discovery order, evidence indented beneath WARN/FAIL findings, then the
/// summary counts and the gate verdict. `short` and `min_level` filter the
/// rendering only; counts and the verdict always reflect the full finding set.
pub struct TerminalReporter {
    short: bool,
    min_level: Severity,
}

impl TerminalReporter {
    pub fn new() -> Self {
        Self {
            short: false,
            min_level: Severity::Pass,
        }
    }

    /// Hide PASS findings and evidence URLs.
    pub fn with_short(mut self, short: bool) -> Self {
        self.short = short;
        self
    }

    pub fn with_min_level(mut self, level: Severity) -> Self {
        self.min_level = level;
        self
    }

    fn severity_label(&self, severity: Severity) -> colored::ColoredString {
        let label = severity.to_string();
        match severity {
            Severity::Fail => label.red().bold(),
            Severity::Warn => label.yellow().bold(),
            Severity::Pass => label.green(),
        }
    }

    fn format_finding(&self, finding: &Finding) -> String {
        let mut line = format!("{}: {}", self.severity_label(finding.severity), finding.message);
        if let Some(ref id) = finding.rule_id {
            line.push_str(&format!(" [{}]", id));
        }
        if finding.occurrence_count > 1 {
            line.push_str(&format!(" x {}", finding.occurrence_count));
        }
        line.push('\n');

        // Evidence only matters where something went wrong.
        if finding.severity > Severity::Pass && !self.short {
            for evidence in &finding.evidence {
                line.push_str(&format!("\t{}\n", evidence));
            }
        }

        line
    }

    fn verdict_label(&self, decision: &ExitDecision) -> colored::ColoredString {
        let label = format!("Exit: {} ({})", decision.code, decision.reason.describe());
        match decision.code {
            0 => label.green().bold(),
            1 => label.red().bold(),
            2 => label.yellow().bold(),
            _ => label.cyan(),
        }
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for TerminalReporter {
    fn report(&self, report: &ScanReport, decision: &ExitDecision) -> String {
        let mut output = String::new();
        output.push_str(&format!("Target: {}\n\n", report.target));

        for finding in &report.findings {
            if finding.severity < self.min_level {
                continue;
            }
            if self.short && finding.severity == Severity::Pass {
                continue;
            }
            output.push_str(&self.format_finding(finding));
        }

        output.push_str(&format!(
            "\nPASS: {}\tWARN: {}\tFAIL: {}\n",
            report.counts.pass, report.counts.warn, report.counts.fail
        ));
        output.push_str(&format!("{}\n", self.verdict_label(decision)));

        output
    }
}
