// SPDX-License-Identifier: MIT OR Apache-2.0

//! CBOR serialization helpers for game snapshots
//!
//! The hosting environment persists engine state across suspend/resume
//! as opaque bytes; these helpers define that byte format using the
//! Concise Binary Object Representation (CBOR).

use crate::GameSnapshot;

/// Serialize a snapshot to CBOR
pub fn serialize_snapshot(snapshot: &GameSnapshot) -> Vec<u8> {
    match serde_cbor::to_vec(snapshot) {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::error!("Failed to serialize snapshot: {}", err);
            Vec::new() // Return empty vector on error
        }
    }
}

/// Deserialize a snapshot from CBOR
pub fn deserialize_snapshot(data: &[u8]) -> Option<GameSnapshot> {
    if data.is_empty() {
        return None;
    }

    match serde_cbor::from_slice(data) {
        Ok(snapshot) => Some(snapshot),
        Err(err) => {
            tracing::error!("Failed to deserialize snapshot: {}", err);
            None
        }
    }
}
