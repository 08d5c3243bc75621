//! Error taxonomy for compatibility verification.
//!
//! Every failure is fatal to the run. Compatibility checks fail loudly and
//! immediately; continuing past a failure would hide exactly the regression
//! the harness exists to catch.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the fixture store and the verification harness.
#[derive(Debug, Error)]
pub enum CompatError {
    /// No fixture artifact exists for the requested version.
    #[error("no fixture for version '{version}' at {path}")]
    ResourceMissing {
        /// Version whose fixture was requested.
        version: String,
        /// Path that was probed.
        path: PathBuf,
    },

    /// The fixture bytes could not be decoded into the target type.
    #[error("failed to decode fixture for version '{version}': {source}")]
    Deserialization {
        /// Version whose fixture failed to decode.
        version: String,
        /// Underlying codec error.
        #[source]
        source: anyhow::Error,
    },

    /// The reconstructed object did not match the canonical target.
    #[error("verification mismatch for version '{version}': {detail}")]
    VerificationMismatch {
        /// Version whose reconstruction mismatched.
        version: String,
        /// Mismatch description reported by the case.
        detail: String,
    },

    /// The case hook failed to build the canonical target object.
    #[error("failed to construct target object: {0}")]
    TargetConstruction(#[source] anyhow::Error),

    /// Offline fixture generation could not encode or write the artifact.
    #[error("failed to write fixture for version '{version}': {source}")]
    Write {
        /// Version being generated.
        version: String,
        /// Underlying encode or filesystem error.
        #[source]
        source: anyhow::Error,
    },

    /// Filesystem failure other than a missing fixture.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path on which the operation failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl CompatError {
    /// Version this error is attributed to, when one applies.
    pub fn version(&self) -> Option<&str> {
        match self {
            Self::ResourceMissing { version, .. }
            | Self::Deserialization { version, .. }
            | Self::VerificationMismatch { version, .. }
            | Self::Write { version, .. } => Some(version),
            Self::TargetConstruction(_) | Self::Io { .. } => None,
        }
    }
}
