//! Exit-code policy.
//!
//! Maps aggregated counts plus the `ignore_warnings` flag to a process exit
//! code. The evaluation order is a fixed decision list; the first matching
//! rule wins.

use crate::finding::Counts;
use serde::{Deserialize, Serialize};

/// Exit code reserved for unparseable scanner output. Distinct from the four
/// policy codes so automation never confuses "the scan found failures" with
/// "the scanner output was garbage".
pub const EXIT_INPUT_ERROR: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitReason {
    FailPresent,
    WarnPresentNotIgnored,
    NoFailOrWarnWithPass,
    NoFindings,
}

impl ExitReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExitReason::FailPresent => "fail_present",
            ExitReason::WarnPresentNotIgnored => "warn_present_not_ignored",
            ExitReason::NoFailOrWarnWithPass => "no_fail_or_warn_with_pass",
            ExitReason::NoFindings => "no_findings",
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            ExitReason::FailPresent => "failure findings present",
            ExitReason::WarnPresentNotIgnored => "warning findings present and not ignored",
            ExitReason::NoFailOrWarnWithPass => "pass findings present, no failures or warnings",
            ExitReason::NoFindings => "no actionable findings",
        }
    }
}

/// The outcome of one policy evaluation. Computed fresh per scan, never
/// persisted; only `main` turns it into actual process termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitDecision {
    pub code: u8,
    pub reason: ExitReason,
}

/// Decide the exit code for one target.
///
/// 1. Any FAIL occurrence dominates everything, including `ignore_warnings`.
/// 2. Unignored WARN occurrences fail the gate with their own code.
/// 3. PASS occurrences alone mean success.
/// 4. Anything else is a zero-result scan.
///
/// When `ignore_warnings` is set and only WARN findings exist, rule 2 is
/// skipped and rule 3 finds no PASS, so the result is code 3 rather than 0.
/// A warning-only scan with warnings suppressed confirmed nothing good; it
/// must not read as a passing scan.
pub fn decide(counts: &Counts, ignore_warnings: bool) -> ExitDecision {
    if counts.fail > 0 {
        ExitDecision {
            code: 1,
            reason: ExitReason::FailPresent,
        }
    } else if !ignore_warnings && counts.warn > 0 {
        ExitDecision {
            code: 2,
            reason: ExitReason::WarnPresentNotIgnored,
        }
    } else if counts.pass > 0 {
        ExitDecision {
            code: 0,
            reason: ExitReason::NoFailOrWarnWithPass,
        }
    } else {
        ExitDecision {
            code: 3,
            reason: ExitReason::NoFindings,
        }
    }
}
