use thiserror::Error;

#[derive(Error, Debug)]
pub enum GateError {
    #[error("Unknown severity label \"{label}\" on line {line}")]
    UnknownSeverity { label: String, line: usize },

    #[error("Malformed alert on line {line}: {content}")]
    MalformedAlert { line: usize, content: String },

    #[error("Evidence on line {line} has no preceding alert: {content}")]
    DanglingEvidence { line: usize, content: String },

    #[error("Malformed evidence on line {line}: {content}")]
    MalformedEvidence { line: usize, content: String },

    #[error("Failed to read scanner output: {path}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report: {path}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read config file: {path}")]
    ConfigReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {path}")]
    ConfigParseError {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid config value for {key}: {value}")]
    ConfigValueError { key: String, value: String },
}

pub type Result<T> = std::result::Result<T, GateError>;
