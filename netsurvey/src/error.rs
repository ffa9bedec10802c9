//! Error types for netsurvey.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Main error type for netsurvey operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Inventory loading errors
    #[error("Inventory error: {0}")]
    Inventory(#[from] InventoryError),

    /// Command execution or parse errors
    #[error("Command error: {0}")]
    Command(#[from] CommandError),

    /// Record extraction errors
    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),

    /// Report rendering errors
    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    /// Invalid poller configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// Inventory errors. These are fatal: they happen before any collection.
#[derive(Error, Debug)]
pub enum InventoryError {
    /// Failed to read the testbed file
    #[error("Failed to read testbed {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Testbed YAML did not match the expected layout
    #[error("Invalid testbed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A device has no management address
    #[error("Device '{device}' has no cli connection ip")]
    MissingAddress { device: String },
}

/// Errors from the command/parse collaborator.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Device session could not be established or was lost
    #[error("Session failed for '{device}': {message}")]
    Session { device: String, message: String },

    /// The command did not complete in time
    #[error("Command timed out after {0:?}")]
    Timeout(Duration),

    /// No parsed output is available for the command
    #[error("No capture at {path}")]
    CaptureMissing { path: PathBuf },

    /// Output could not be parsed into a result tree
    #[error("Parse failed for '{command}': {message}")]
    Parse { command: String, message: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed JSON result tree
    #[error("Invalid result tree: {0}")]
    Json(#[from] serde_json::Error),
}

/// Schema extraction errors raised by the normalizers.
///
/// Any of these discards the whole command result for that device.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// A required field is absent
    #[error("Missing required field '{field}' in '{entry}'")]
    MissingField { entry: String, field: String },

    /// A field has an unexpected type
    #[error("Field '{field}' in '{entry}' is not a {expected}")]
    WrongType {
        entry: String,
        field: String,
        expected: &'static str,
    },

    /// A mapping was expected
    #[error("Expected a mapping at '{path}'")]
    NotAMapping { path: String },
}

/// Report sink errors.
#[derive(Error, Debug)]
pub enum ReportError {
    /// I/O error while writing
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serialization error
    #[error("Serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using netsurvey's Error.
pub type Result<T> = std::result::Result<T, Error>;
