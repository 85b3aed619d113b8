//! Binary snapshots of build selections.
//!
//! A snapshot is a 32-byte fixed header followed by a bincode-encoded
//! payload. The same payload bytes feed [`BuildSelection::fingerprint`], so
//! two selections with equal parts always share a fingerprint.
//!
//! ## Wire Format
//!
//! ```text
//! Offset  Size  Field
//! 0       4     Magic bytes: b"RIGS"
//! 4       2     Format version (u16, little-endian)
//! 6       2     Writer version (u16, little-endian)
//! 8       4     Flags (u32, reserved)
//! 12      4     Payload length in bytes (u32, little-endian)
//! 16      16    BLAKE3 hash of the payload (truncated to 16 bytes)
//! 32..    var   Bincode-encoded payload
//! ```
//!
//! The format version must match exactly; the writer version is informational.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{BuildSelection, Component, Slot};

const MAGIC: &[u8; 4] = b"RIGS";
const FORMAT_VERSION: u16 = 1;
const WRITER_VERSION: u16 = 1;
const HEADER_SIZE: usize = 32;

/// Errors that can occur when writing a snapshot.
#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("failed to encode selection: {0}")]
    Encode(#[from] bincode::error::EncodeError),
}

/// Errors that can occur when reading a snapshot.
#[derive(Debug, Error)]
pub enum DeserializeError {
    #[error("not a rigcheck snapshot: invalid magic bytes")]
    BadMagic,

    #[error("incompatible format version: snapshot is v{found}, reader supports v{supported}")]
    IncompatibleVersion { found: u16, supported: u16 },

    #[error("integrity check failed: BLAKE3 checksum mismatch")]
    ChecksumMismatch,

    #[error("payload length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: u32, actual: usize },

    #[error("failed to decode payload: {0}")]
    Decode(#[from] bincode::error::DecodeError),

    #[error("validation failed: {0}")]
    Validation(String),
}

/// BLAKE3 digest of a selection's encoded parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializedSelection {
    part_count: usize,
    parts: Vec<SerializedPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializedPart {
    slot: Slot,
    component: Component,
}

fn selection_to_serialized(selection: &BuildSelection) -> SerializedSelection {
    let parts: Vec<SerializedPart> = selection
        .iter()
        .map(|(slot, component)| SerializedPart {
            slot,
            component: component.clone(),
        })
        .collect();
    SerializedSelection {
        part_count: parts.len(),
        parts,
    }
}

fn serialized_to_selection(ser: SerializedSelection) -> Result<BuildSelection, DeserializeError> {
    validate(&ser)?;
    Ok(ser.parts.into_iter().map(|part| part.component).collect())
}

fn validate(ser: &SerializedSelection) -> Result<(), DeserializeError> {
    if ser.part_count != ser.parts.len() {
        return Err(DeserializeError::Validation(format!(
            "metadata says {} parts but payload has {}",
            ser.part_count,
            ser.parts.len()
        )));
    }

    for part in &ser.parts {
        let actual = part.component.slot();
        if actual != part.slot {
            return Err(DeserializeError::Validation(format!(
                "slot {} holds a {actual} component",
                part.slot
            )));
        }
    }

    // Strictly ascending slots rule out duplicates.
    for window in ser.parts.windows(2) {
        if window[0].slot >= window[1].slot {
            return Err(DeserializeError::Validation(format!(
                "slot {} is duplicated or out of order",
                window[1].slot
            )));
        }
    }

    Ok(())
}

fn encode_payload(selection: &BuildSelection) -> Result<Vec<u8>, SerializeError> {
    let serialized = selection_to_serialized(selection);
    Ok(bincode::serde::encode_to_vec(
        &serialized,
        bincode::config::standard(),
    )?)
}

fn write_header(buf: &mut Vec<u8>, payload: &[u8]) {
    let hash = blake3::hash(payload);

    buf.extend_from_slice(MAGIC);
    buf.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
    buf.extend_from_slice(&WRITER_VERSION.to_le_bytes());
    buf.extend_from_slice(&0u32.to_le_bytes()); // flags (reserved)
    #[allow(clippy::cast_possible_truncation)] // a selection holds at most ten parts
    let payload_len = payload.len() as u32;
    buf.extend_from_slice(&payload_len.to_le_bytes());
    buf.extend_from_slice(&hash.as_bytes()[..16]);
}

#[allow(clippy::cast_possible_truncation)] // HEADER_SIZE is 32, always fits in u32
fn read_header(bytes: &[u8]) -> Result<(u16, u32, [u8; 16]), DeserializeError> {
    if bytes.len() < HEADER_SIZE {
        return Err(DeserializeError::LengthMismatch {
            expected: HEADER_SIZE as u32,
            actual: bytes.len(),
        });
    }

    if &bytes[0..4] != MAGIC {
        return Err(DeserializeError::BadMagic);
    }

    let format_version = u16::from_le_bytes([bytes[4], bytes[5]]);
    let payload_len = u32::from_le_bytes([bytes[12], bytes[13], bytes[14], bytes[15]]);

    let mut hash = [0u8; 16];
    hash.copy_from_slice(&bytes[16..32]);

    Ok((format_version, payload_len, hash))
}

pub(crate) fn encode(selection: &BuildSelection) -> Result<Vec<u8>, SerializeError> {
    let payload = encode_payload(selection)?;
    let mut buf = Vec::with_capacity(HEADER_SIZE + payload.len());
    write_header(&mut buf, &payload);
    buf.extend_from_slice(&payload);
    Ok(buf)
}

pub(crate) fn decode(bytes: &[u8]) -> Result<BuildSelection, DeserializeError> {
    let (format_version, payload_len, stored_hash) = read_header(bytes)?;

    if format_version != FORMAT_VERSION {
        return Err(DeserializeError::IncompatibleVersion {
            found: format_version,
            supported: FORMAT_VERSION,
        });
    }

    let payload_end = HEADER_SIZE + payload_len as usize;
    if bytes.len() < payload_end {
        return Err(DeserializeError::LengthMismatch {
            expected: payload_len,
            actual: bytes.len() - HEADER_SIZE,
        });
    }
    let payload = &bytes[HEADER_SIZE..payload_end];

    if blake3::hash(payload).as_bytes()[..16] != stored_hash {
        return Err(DeserializeError::ChecksumMismatch);
    }

    let (serialized, _): (SerializedSelection, usize) =
        bincode::serde::decode_from_slice(payload, bincode::config::standard())?;

    serialized_to_selection(serialized)
}

impl BuildSelection {
    /// Encode this selection as a snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SerializeError`] if encoding fails.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SerializeError> {
        encode(self)
    }

    /// Decode a snapshot produced by [`to_bytes`](Self::to_bytes).
    ///
    /// # Errors
    ///
    /// Returns [`DeserializeError`] on format, integrity, or validation failure.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DeserializeError> {
        decode(bytes)
    }

    /// Stable digest of the selected parts, suitable as a result-cache key.
    ///
    /// # Errors
    ///
    /// Returns [`SerializeError`] if encoding fails.
    pub fn fingerprint(&self) -> Result<Fingerprint, SerializeError> {
        let payload = encode_payload(self)?;
        Ok(Fingerprint(*blake3::hash(&payload).as_bytes()))
    }
}
