//! Per-target aggregation.
//!
//! Consumes the classified findings for one target and produces the
//! [`ScanReport`] the reporters and the exit policy work from. Counts are
//! occurrence totals per severity and do not depend on finding order; the
//! finding list itself keeps discovery order for rendering.

use crate::finding::{Counts, Finding, ScanReport};

/// Build the report for one scan invocation. Zero findings is a valid,
/// distinct state (all counts zero), not an error.
pub fn aggregate(target: &str, findings: Vec<Finding>) -> ScanReport {
    let counts = Counts::from_findings(&findings);
    ScanReport {
        target: target.to_string(),
        findings,
        counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finding::Severity;
    use crate::test_utils::fixtures::create_finding;

    fn sample_findings() -> Vec<Finding> {
        vec![
            create_finding(Severity::Pass, "10003", "Vulnerable JS Library", 1),
            create_finding(Severity::Warn, "10015", "Re-examine Cache-control Directives", 12),
            create_finding(Severity::Fail, "10038", "Content Security Policy Header Not Set", 1),
            create_finding(Severity::Pass, "10010", "Cookie No HttpOnly Flag", 3),
        ]
    }

    #[test]
    fn test_aggregate_counts_occurrence_totals() {
        let report = aggregate("https://example.com", sample_findings());
        assert_eq!(report.target, "https://example.com");
        assert_eq!(report.counts.pass, 4);
        assert_eq!(report.counts.warn, 12);
        assert_eq!(report.counts.fail, 1);
    }

    #[test]
    fn test_aggregate_preserves_discovery_order() {
        let report = aggregate("https://example.com", sample_findings());
        let ids: Vec<&str> = report
            .findings
            .iter()
            .filter_map(|f| f.rule_id.as_deref())
            .collect();
        assert_eq!(ids, vec!["10003", "10015", "10038", "10010"]);
    }

    #[test]
    fn test_aggregate_counts_are_order_independent() {
        let forward = aggregate("t", sample_findings());

        let mut reversed_findings = sample_findings();
        reversed_findings.reverse();
        let reversed = aggregate("t", reversed_findings);

        assert_eq!(forward.counts, reversed.counts);
    }

    #[test]
    fn test_aggregate_no_findings_is_valid() {
        let report = aggregate("https://example.com", Vec::new());
        assert!(report.findings.is_empty());
        assert_eq!(report.counts, Counts::default());
    }

    #[test]
    fn test_aggregate_same_rule_fires_twice() {
        let findings = vec![
            create_finding(Severity::Warn, "10015", "Re-examine Cache-control Directives", 2),
            create_finding(Severity::Warn, "10015", "Re-examine Cache-control Directives", 5),
        ];
        let report = aggregate("t", findings);
        assert_eq!(report.counts.warn, 7);
        assert_eq!(report.findings.len(), 2);
    }
}
