//! Generic deep clone via an in-memory serialization round trip.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{CloneError, CloneResult};

/// Produce a fully independent copy of `value`.
///
/// The value is encoded into a transient in-memory buffer and decoded back
/// into a fresh `T`. The decoder only ever sees the byte buffer, so the result
/// cannot share storage with the source — every handle and owned substructure
/// comes out as a new allocation. The buffer is dropped when the call returns,
/// on success and on error alike.
///
/// This trades clone speed for generality: every field passes through the
/// interchange encoding, so for a small aggregate a hand-written nested copy
/// is faster by an order of magnitude or more.
///
/// Errors:
/// - [`CloneError::UnsupportedType`] if `T` (or a reachable substructure)
///   cannot be represented in the interchange format.
/// - [`CloneError::Corruption`] if decoding the just-encoded buffer fails;
///   unreachable in normal use since encode and decode are paired.
pub fn deep_clone<T>(value: &T) -> CloneResult<T>
where
    T: Serialize + DeserializeOwned,
{
    let buf = encode(value)?;
    decode(&buf)
}

fn encode<T: Serialize>(value: &T) -> CloneResult<Vec<u8>> {
    serde_json::to_vec(value).map_err(|e| CloneError::unsupported(e.to_string()))
}

fn decode<T: DeserializeOwned>(buf: &[u8]) -> CloneResult<T> {
    serde_json::from_slice(buf).map_err(|e| CloneError::corruption(e.to_string()))
}
