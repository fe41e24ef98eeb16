//! Shared test fixtures.

pub mod fixtures {
    use crate::aggregator::aggregate;
    use crate::finding::{Evidence, Finding, ScanReport, Severity};

    pub fn create_finding(
        severity: Severity,
        rule_id: &str,
        message: &str,
        occurrence_count: u32,
    ) -> Finding {
        Finding {
            severity,
            rule_id: Some(rule_id.to_string()),
            message: message.to_string(),
            occurrence_count,
            evidence: Vec::new(),
        }
    }

    pub fn create_evidence(url: &str, status: u16, reason: &str) -> Evidence {
        Evidence {
            url: url.to_string(),
            status,
            reason: reason.to_string(),
        }
    }

    pub fn create_report(target: &str, findings: Vec<Finding>) -> ScanReport {
        aggregate(target, findings)
    }
}
