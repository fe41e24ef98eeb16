use crate::finding::{Counts, Finding, ScanReport};
use crate::policy::ExitDecision;
use crate::reporter::Reporter;
use serde::Serialize;

pub struct JsonReporter;

impl JsonReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    target: &'a str,
    counts: &'a Counts,
    findings: &'a [Finding],
    exit_code: u8,
    exit_reason: &'static str,
}

impl Reporter for JsonReporter {
    fn report(&self, report: &ScanReport, decision: &ExitDecision) -> String {
        let output = JsonOutput {
            target: &report.target,
            counts: &report.counts,
            findings: &report.findings,
            exit_code: decision.code,
            exit_reason: decision.reason.as_str(),
        };
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|e| format!(r#"{{"error": "Failed to serialize report: {}"}}"#, e))
    }
}
