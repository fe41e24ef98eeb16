//! Raw alert classification.
//!
//! Turns the scanner's textual output into structured [`Finding`]s. An alert
//! line has the shape `<SEVERITY>: <message> [<rule-id>] x <N>` where the
//! bracketed rule id and the repetition suffix are both optional. Indented
//! lines are evidence (`<url> (<status> <reason>)`) belonging to the most
//! recently classified finding.

use crate::error::{GateError, Result};
use crate::finding::{Evidence, Finding, Severity};
use regex::Regex;
use tracing::warn;

pub struct Classifier {
    alert: Regex,
    evidence: Regex,
    rule_id: Regex,
    occurrence: Regex,
}

impl Classifier {
    pub fn new() -> Self {
        Self {
            alert: Regex::new(r"^(?P<label>[A-Z][A-Z-]*):\s+(?P<rest>.+?)\s*$")
                .expect("alert: invalid regex"),
            evidence: Regex::new(r"^(?P<url>\S+)\s+\((?P<status>\d{3})\s+(?P<reason>[^)]*)\)$")
                .expect("evidence: invalid regex"),
            rule_id: Regex::new(r"\s*\[(?P<id>[^\[\]]+)\]$").expect("rule_id: invalid regex"),
            occurrence: Regex::new(r"\s+x\s+(?P<count>\S+)$").expect("occurrence: invalid regex"),
        }
    }

    /// Classify a whole scanner output into findings, in discovery order.
    ///
    /// Unknown severity labels and structurally unparseable lines abort the
    /// report: malformed scanner output must never be mistaken for scan
    /// results. A repetition suffix that is not a positive integer is the one
    /// soft spot; it downgrades to a single occurrence with a logged warning.
    pub fn classify(&self, raw: &str) -> Result<Vec<Finding>> {
        let mut findings: Vec<Finding> = Vec::new();

        for (index, line) in raw.lines().enumerate() {
            let line_no = index + 1;
            if line.trim().is_empty() {
                continue;
            }

            if line.starts_with(' ') || line.starts_with('\t') {
                let evidence = self.parse_evidence(line.trim(), line_no)?;
                match findings.last_mut() {
                    Some(finding) => finding.evidence.push(evidence),
                    None => {
                        return Err(GateError::DanglingEvidence {
                            line: line_no,
                            content: line.trim().to_string(),
                        });
                    }
                }
                continue;
            }

            findings.push(self.parse_alert(line, line_no)?);
        }

        Ok(findings)
    }

    fn parse_alert(&self, line: &str, line_no: usize) -> Result<Finding> {
        let caps = self
            .alert
            .captures(line)
            .ok_or_else(|| GateError::MalformedAlert {
                line: line_no,
                content: line.to_string(),
            })?;

        let label = &caps["label"];
        let severity =
            Severity::from_label(label).ok_or_else(|| GateError::UnknownSeverity {
                label: label.to_string(),
                line: line_no,
            })?;

        let (rest, occurrence_count) = self.split_occurrence(&caps["rest"], line_no);
        let (message, rule_id) = self.split_rule_id(rest);

        Ok(Finding {
            severity,
            rule_id,
            message,
            occurrence_count,
            evidence: Vec::new(),
        })
    }

    /// Split a trailing `x N` repetition suffix off the alert body. A suffix
    /// that is present but not a positive integer counts as one occurrence.
    fn split_occurrence<'a>(&self, rest: &'a str, line_no: usize) -> (&'a str, u32) {
        let Some(caps) = self.occurrence.captures(rest) else {
            return (rest, 1);
        };
        let (Some(whole), Some(count)) = (caps.get(0), caps.name("count")) else {
            return (rest, 1);
        };

        let head = &rest[..whole.start()];
        match count.as_str().parse::<u32>() {
            Ok(n) if n >= 1 => (head, n),
            _ => {
                warn!(
                    line = line_no,
                    suffix = count.as_str(),
                    "malformed repetition suffix, counting one occurrence"
                );
                (head, 1)
            }
        }
    }

    /// Split a trailing `[rule-id]` bracket off the alert message.
    fn split_rule_id(&self, rest: &str) -> (String, Option<String>) {
        match self.rule_id.captures(rest) {
            Some(caps) => {
                let id = caps["id"].to_string();
                let end = caps
                    .get(0)
                    .map(|m| m.start())
                    .unwrap_or(rest.len());
                (rest[..end].trim_end().to_string(), Some(id))
            }
            None => (rest.to_string(), None),
        }
    }

    fn parse_evidence(&self, content: &str, line_no: usize) -> Result<Evidence> {
        let caps = self
            .evidence
            .captures(content)
            .ok_or_else(|| GateError::MalformedEvidence {
                line: line_no,
                content: content.to_string(),
            })?;

        let status = caps["status"]
            .parse::<u16>()
            .map_err(|_| GateError::MalformedEvidence {
                line: line_no,
                content: content.to_string(),
            })?;

        Ok(Evidence {
            url: caps["url"].to_string(),
            status,
            reason: caps["reason"].trim().to_string(),
        })
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}
