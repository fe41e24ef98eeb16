pub mod aggregator;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod finding;
pub mod policy;
pub mod reporter;
pub mod run;

#[cfg(test)]
pub mod test_utils;

pub use cli::{Cli, OutputFormat};
pub use config::Config;
pub use error::{GateError, Result};
pub use finding::{Counts, Evidence, Finding, ScanReport, Severity};
pub use policy::{EXIT_INPUT_ERROR, ExitDecision, ExitReason, decide};
pub use reporter::{Reporter, json::JsonReporter, terminal::TerminalReporter};
