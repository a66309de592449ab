//! Error types for portsweep.
//!
//! Uses `thiserror` for ergonomic error definitions. Network failures of an
//! individual probe are not errors: they are recorded as closed ports.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a range scan before any probe is issued.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("last port: {top} must be greater than start port: {bottom}")]
    InvalidInterval { bottom: u32, top: u32 },

    #[error("interval end {0} is beyond the last port (65535)")]
    IntervalOutOfRange(u32),

    #[error("invalid port interval: {0}")]
    InvalidIntervalFormat(String),

    #[error("unsupported protocol: {0}")]
    UnsupportedProtocol(String),
}

/// Result type alias for scan operations.
pub type ScanResult<T> = Result<T, ScanError>;

/// Errors from loading or saving application settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine the configuration directory")]
    DirectoryNotFound,

    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("failed to write {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    #[error("invalid settings format: {0}")]
    InvalidFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors from writing result files.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to create results directory {path}: {reason}")]
    DirectoryError { path: PathBuf, reason: String },

    #[error("failed to create {path}: {reason}")]
    CreateFailed { path: PathBuf, reason: String },

    #[error("failed to write {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },
}

pub type StorageResult<T> = Result<T, StorageError>;
