//! Pluggable fixture codecs.
//!
//! The harness defines no wire format of its own; a fixture holds whatever
//! bytes the configured codec produced when the version was cut, and the
//! store treats them as an opaque blob. Historical fixtures must all have
//! been generated under the codec the store is configured with.

use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Byte-level encoding used by the fixture store.
///
/// Encode and decode must be symmetric for every supported type; the store
/// uses a single codec instance for both paths.
pub trait FixtureCodec {
    /// Codec name used in log output.
    fn name(&self) -> &'static str;

    /// Encode an object into fixture bytes.
    fn encode<T: Serialize>(&self, object: &T) -> Result<Vec<u8>>;

    /// Decode fixture bytes into an object.
    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T>;
}

/// Self-describing JSON codec, the default.
///
/// Field names travel with the data, so a decode failure against a changed
/// schema produces an error naming the offending field.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl FixtureCodec for JsonCodec {
    fn name(&self) -> &'static str {
        "json"
    }

    fn encode<T: Serialize>(&self, object: &T) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(object)?)
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// Compact binary codec for large object graphs.
#[derive(Debug, Clone, Copy, Default)]
pub struct BincodeCodec;

impl FixtureCodec for BincodeCodec {
    fn name(&self) -> &'static str {
        "bincode"
    }

    fn encode<T: Serialize>(&self, object: &T) -> Result<Vec<u8>> {
        Ok(bincode::serialize(object)?)
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T> {
        Ok(bincode::deserialize(bytes)?)
    }
}
