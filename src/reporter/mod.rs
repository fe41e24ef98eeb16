pub mod json;
pub mod terminal;

use crate::finding::ScanReport;
use crate::policy::ExitDecision;

pub trait Reporter {
    fn report(&self, report: &ScanReport, decision: &ExitDecision) -> String;
}
