//! Fixture storage.
//!
//! Reads and writes fixture artifacts in a single explicit directory. The
//! read path serves automated verification runs; the write path exists only
//! for offline generation when a new version is cut and must never be called
//! from an automated run.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::codec::{FixtureCodec, JsonCodec};
use crate::error::CompatError;
use crate::naming;

/// Access to the fixture artifacts of one directory.
///
/// Artifacts are keyed by (simple type name, version) through the naming
/// convention in [`crate::naming`]; both paths resolve names through the
/// same function, so a saved fixture is always found again under the same
/// type and version.
#[derive(Debug, Clone)]
pub struct FixtureStore<C = JsonCodec> {
    dir: PathBuf,
    codec: C,
}

impl FixtureStore<JsonCodec> {
    /// Open a store over `dir` with the default JSON codec.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_codec(dir, JsonCodec)
    }
}

impl<C: FixtureCodec> FixtureStore<C> {
    /// Open a store over `dir` using an explicit codec.
    pub fn with_codec(dir: impl Into<PathBuf>, codec: C) -> Self {
        Self {
            dir: dir.into(),
            codec,
        }
    }

    /// Directory holding the fixture artifacts.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the fixture artifact for `T` at `version`.
    pub fn fixture_path<T>(&self, version: &str) -> PathBuf {
        self.dir.join(naming::fixture_file_name_for::<T>(version))
    }

    /// Load and decode the fixture for `T` written by `version`.
    ///
    /// Fails with [`CompatError::ResourceMissing`] if no artifact exists and
    /// [`CompatError::Deserialization`] if the bytes cannot be decoded. Never
    /// returns a default object, never retries.
    pub fn load<T: DeserializeOwned>(&self, version: &str) -> Result<T, CompatError> {
        let path = self.fixture_path::<T>(version);
        let bytes = std::fs::read(&path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                CompatError::ResourceMissing {
                    version: version.to_string(),
                    path: path.clone(),
                }
            } else {
                CompatError::Io {
                    path: path.clone(),
                    source: e,
                }
            }
        })?;

        self.codec
            .decode(&bytes)
            .map_err(|e| CompatError::Deserialization {
                version: version.to_string(),
                source: e,
            })
    }

    /// Encode `object` and write it as the fixture for `version`.
    ///
    /// Unconditionally replaces any existing artifact of the same name.
    /// Regenerating a historical fixture invalidates the guarantee the
    /// harness provides, so treat every call as a manual, reviewed action.
    pub fn save<T: Serialize>(&self, version: &str, object: &T) -> Result<PathBuf, CompatError> {
        let path = self.fixture_path::<T>(version);
        let bytes = self
            .codec
            .encode(object)
            .map_err(|e| CompatError::Write {
                version: version.to_string(),
                source: e,
            })?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| CompatError::Write {
                version: version.to_string(),
                source: e.into(),
            })?;
        }
        std::fs::write(&path, &bytes).map_err(|e| CompatError::Write {
            version: version.to_string(),
            source: e.into(),
        })?;

        log::debug!(
            "Wrote {} {} bytes to {}",
            bytes.len(),
            self.codec.name(),
            path.display()
        );
        Ok(path)
    }
}
