//! The publishable server descriptor (`server.json`).

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A server descriptor as read from disk and sent to the registry.
///
/// Only the identifying fields are typed. Everything else (packages, remotes,
/// repository metadata, `_meta`, ...) is carried through untouched in `extra`
/// so re-encoding never drops data the registry needs. Fields default when
/// missing: deciding validity is the registry's job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerDescriptor {
    /// Format-version identifier (`$schema` on the wire).
    #[serde(
        rename = "$schema",
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub schema: String,
    /// Reverse-DNS style unique name, e.g. `io.github.user/server`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    /// Concrete version; ranges and `latest` are rejected remotely.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub version: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `null` decodes like a missing key.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl ServerDescriptor {
    /// Parse a descriptor from raw `server.json` bytes.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when the bytes are not a JSON object of
    /// the expected shape.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Canonical JSON encoding sent to both registry endpoints.
    ///
    /// Passthrough keys are emitted in sorted order, so encoding the same
    /// descriptor twice yields identical bytes.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if a passthrough value cannot be encoded.
    pub fn to_canonical_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

/// Registry response body for an accepted publish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishResponse {
    /// Echo of the stored descriptor.
    pub server: ServerDescriptor,
    /// Registry-side metadata (publish time, status, ...), opaque here.
    #[serde(rename = "_meta", default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}
