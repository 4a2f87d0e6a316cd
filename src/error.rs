//! Error types for chef-wrapper operations.
//!
//! This module defines [`WrapperError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! Only conditions that make the version report meaningless are errors:
//! an unresolvable executable path, an unresolvable install root, or a
//! manifest that cannot be read or parsed once the install is known to be
//! packaged. These are fatal and map to [`FATAL_EXIT_CODE`].
//!
//! Everything else (not a packaged install, a missing ruby environment
//! file, an unknown component, no `ruby` on `PATH`) is a normal value and
//! never surfaces as a `WrapperError`.

use std::path::PathBuf;
use thiserror::Error;

/// Exit status for fatal install-resolution and manifest failures.
pub const FATAL_EXIT_CODE: u8 = 4;

/// Core error type for chef-wrapper operations.
#[derive(Debug, Error)]
pub enum WrapperError {
    /// The running executable's real path could not be determined.
    #[error("Cannot resolve executable path: {source}")]
    ExecutablePath {
        #[source]
        source: std::io::Error,
    },

    /// The install root could not be derived from the executable path.
    #[error("Cannot determine install root from {path}")]
    InstallRoot { path: PathBuf },

    /// A manifest file could not be opened or read.
    #[error("Failed to read manifest {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A manifest file is not valid JSON or has a non-object root.
    #[error("Failed to parse manifest {path}: {message}")]
    ManifestParse { path: PathBuf, message: String },

    /// The cached ruby environment file could not be read.
    #[error("Failed to read ruby environment {path}: {source}")]
    EnvironmentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The cached ruby environment file is not valid JSON.
    #[error("Failed to parse ruby environment {path}: {message}")]
    EnvironmentParse { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WrapperError {
    /// Whether this error aborts the reporting flow.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::ExecutablePath { .. }
                | Self::InstallRoot { .. }
                | Self::ManifestRead { .. }
                | Self::ManifestParse { .. }
        )
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        if self.is_fatal() {
            FATAL_EXIT_CODE
        } else {
            1
        }
    }
}

/// Result type alias for chef-wrapper operations.
pub type Result<T> = std::result::Result<T, WrapperError>;
