//! Error types for ligmake
//!
//! Uses `thiserror` for library errors; the binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for ligmake operations
pub type LigmakeResult<T> = Result<T, LigmakeError>;

/// Main error type for ligmake operations
#[derive(Error, Debug)]
pub enum LigmakeError {
    /// External toolchain exited with a failure status
    ///
    /// The child inherits stdout/stderr, so the compiler's own diagnostics
    /// have already been shown when this is constructed.
    #[error("`{command}` failed{}", exit_suffix(.code))]
    Toolchain {
        command: String,
        code: Option<i32>,
    },

    /// External toolchain could not be spawned at all
    #[error("failed to invoke `{command}`: {source}")]
    ToolchainSpawn {
        command: String,
        source: std::io::Error,
    },

    /// Release artifact required but not present
    #[error("release artifact not found: {path} - run `ligmake build` first")]
    MissingArtifact { path: PathBuf },

    /// Source directory missing from the project
    #[error("source directory not found: {path}")]
    SourceDirNotFound { path: PathBuf },

    /// Manifest file missing from the project
    #[error("manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// Invalid ligmake.toml
    #[error("invalid config in {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn exit_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit code {code}"),
        None => " (terminated by signal)".to_string(),
    }
}

impl LigmakeError {
    /// Exit code to report for this error.
    ///
    /// Toolchain failures forward the underlying tool's status so CI sees
    /// the same code it would from invoking the tool directly.
    pub fn exit_code(&self) -> i32 {
        match self {
            LigmakeError::Toolchain { code, .. } => code.unwrap_or(1),
            _ => 1,
        }
    }
}
