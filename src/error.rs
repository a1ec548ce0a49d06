//! Error types shared by the scanner, parser and binary.

use std::path::PathBuf;
use thiserror::Error;

/// Why a launcher file could not be turned into records.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("line {line}: unclosed section header")]
    UnclosedSection { line: usize },

    #[error("line {line}: key-value delimiter not found")]
    MissingDelimiter { line: usize },

    #[error("line {line}: empty key name")]
    EmptyKey { line: usize },

    #[error("content is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("unreadable: {0}")]
    Unreadable(#[from] std::io::Error),
}

#[derive(Error, Debug)]
#[error("failed to parse {path}: {reason}")]
pub struct ParseFailure {
    pub path: PathBuf,
    #[source]
    pub reason: DocumentError,
}

/// Non-fatal problems collected while scanning launcher directories.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("directory unavailable {path}: {reason}")]
    DirectoryUnavailable { path: PathBuf, reason: String },

    #[error("walk error at {path}: {reason}")]
    WalkFailure { path: PathBuf, reason: String },

    #[error(transparent)]
    ParseFailure(#[from] ParseFailure),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Exec line of {0} is empty")]
    EmptyCommand(PathBuf),

    #[error("Exec line of {0} has unbalanced quotes or a trailing escape")]
    Unparsable(PathBuf),

    #[error("Failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}
