use serde::{Deserialize, Serialize};

/// Severity of a single scan alert. Ordered by precedence: a FAIL always
/// outranks a WARN, which outranks a PASS.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Pass,
    Warn,
    Fail,
}

impl Severity {
    /// Map a raw scanner label onto a severity. The scanner emits
    /// `WARN-NEW` for warnings; it is normalized to `Warn` here.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "PASS" => Some(Severity::Pass),
            "WARN-NEW" => Some(Severity::Warn),
            "FAIL" => Some(Severity::Fail),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Pass => "pass",
            Severity::Warn => "warn",
            Severity::Fail => "fail",
        }
    }

    /// Parse a config-file value ("pass", "warn", "fail", case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "pass" => Some(Severity::Pass),
            "warn" => Some(Severity::Warn),
            "fail" => Some(Severity::Fail),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

/// A URL observed while checking a rule, with the HTTP status seen there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    pub url: String,
    pub status: u16,
    pub reason: String,
}

impl std::fmt::Display for Evidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} {})", self.url, self.status, self.reason)
    }
}

/// One classified scan alert. Immutable once built; `occurrence_count` is
/// at least 1 and counts how many times the rule fired for the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Severity,
    /// Opaque rule identifier. Not unique: a rule may fire more than once.
    /// The textual alert form carries it as a trailing `[id]` and may omit it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,
    pub message: String,
    pub occurrence_count: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub evidence: Vec<Evidence>,
}

impl Finding {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            rule_id: None,
            message: message.into(),
            occurrence_count: 1,
            evidence: Vec::new(),
        }
    }
}

/// Per-severity occurrence totals. A finding with `occurrence_count = 12`
/// contributes 12 to its severity's total, not 1. All three keys are always
/// present; a severity with no findings counts 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    pub pass: u64,
    pub warn: u64,
    pub fail: u64,
}

impl Counts {
    pub fn from_findings(findings: &[Finding]) -> Self {
        findings.iter().fold(Counts::default(), |mut counts, f| {
            let occurrences = u64::from(f.occurrence_count);
            match f.severity {
                Severity::Pass => counts.pass += occurrences,
                Severity::Warn => counts.warn += occurrences,
                Severity::Fail => counts.fail += occurrences,
            }
            counts
        })
    }

    pub fn get(&self, severity: Severity) -> u64 {
        match severity {
            Severity::Pass => self.pass,
            Severity::Warn => self.warn,
            Severity::Fail => self.fail,
        }
    }

    pub fn total(&self) -> u64 {
        self.pass + self.warn + self.fail
    }
}

/// The result of evaluating one target: findings in discovery order plus the
/// derived counts. Built once by the aggregator, then read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub target: String,
    pub findings: Vec<Finding>,
    pub counts: Counts,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::create_finding;

    #[test]
    fn test_severity_from_label() {
        assert_eq!(Severity::from_label("PASS"), Some(Severity::Pass));
        assert_eq!(Severity::from_label("WARN-NEW"), Some(Severity::Warn));
        assert_eq!(Severity::from_label("FAIL"), Some(Severity::Fail));
    }

    #[test]
    fn test_severity_from_label_rejects_unknown() {
        assert_eq!(Severity::from_label("INFO"), None);
        assert_eq!(Severity::from_label("IGNORE"), None);
        assert_eq!(Severity::from_label("WARN"), None);
        assert_eq!(Severity::from_label("pass"), None);
    }

    #[test]
    fn test_severity_precedence_ordering() {
        assert!(Severity::Pass < Severity::Warn);
        assert!(Severity::Warn < Severity::Fail);
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(format!("{}", Severity::Pass), "PASS");
        assert_eq!(format!("{}", Severity::Warn), "WARN");
        assert_eq!(format!("{}", Severity::Fail), "FAIL");
    }

    #[test]
    fn test_severity_parse() {
        assert_eq!(Severity::parse("warn"), Some(Severity::Warn));
        assert_eq!(Severity::parse("FAIL"), Some(Severity::Fail));
        assert_eq!(Severity::parse("severe"), None);
    }

    #[test]
    fn test_evidence_display() {
        let evidence = Evidence {
            url: "https://example.com/robots.txt".to_string(),
            status: 404,
            reason: "Not Found".to_string(),
        };
        assert_eq!(
            evidence.to_string(),
            "https://example.com/robots.txt (404 Not Found)"
        );
    }

    #[test]
    fn test_counts_sum_occurrences_not_findings() {
        let findings = vec![
            create_finding(Severity::Pass, "10003", "Vulnerable JS Library", 1),
            create_finding(Severity::Warn, "10015", "Re-examine Cache-control Directives", 12),
        ];
        let counts = Counts::from_findings(&findings);
        assert_eq!(counts.pass, 1);
        assert_eq!(counts.warn, 12);
        assert_eq!(counts.fail, 0);
        assert_eq!(counts.total(), 13);
    }

    #[test]
    fn test_counts_empty() {
        let counts = Counts::from_findings(&[]);
        assert_eq!(counts, Counts::default());
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn test_counts_get() {
        let counts = Counts {
            pass: 2,
            warn: 3,
            fail: 1,
        };
        assert_eq!(counts.get(Severity::Pass), 2);
        assert_eq!(counts.get(Severity::Warn), 3);
        assert_eq!(counts.get(Severity::Fail), 1);
    }

    #[test]
    fn test_finding_serialization_skips_empty_fields() {
        let finding = Finding::new(Severity::Pass, "Vulnerable JS Library");
        let json = serde_json::to_string(&finding).unwrap();
        assert!(!json.contains("rule_id"));
        assert!(!json.contains("evidence"));
        assert!(json.contains("\"severity\":\"pass\""));
    }
}
