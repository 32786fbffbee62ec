//! Canonical value codec for the keeper's store

use icm_core_types::error::StoreError;
use icm_primitives::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub(crate) fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, StoreError> {
    serde_json::to_vec(value).map_err(|e| StoreError::FailedToEncode {
        description: e.to_string(),
    })
}

pub(crate) fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, StoreError> {
    serde_json::from_slice(bytes).map_err(|e| StoreError::FailedToDecode {
        description: e.to_string(),
    })
}

/// Fixed-width cells (queue lengths, sequence counters, heights) are stored
/// as big-endian bytes.
pub(crate) fn encode_u64(value: u64) -> Vec<u8> {
    value.to_be_bytes().to_vec()
}

pub(crate) fn decode_u64(bytes: &[u8]) -> Result<u64, StoreError> {
    let array: [u8; 8] = bytes.try_into().map_err(|_| StoreError::FailedToDecode {
        description: format!("expected 8 byte big-endian integer, got {} bytes", bytes.len()),
    })?;
    Ok(u64::from_be_bytes(array))
}
