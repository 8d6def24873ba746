//! Object identity for Jot
//!
//! Every storable object is addressed by the SHA-1 digest of its canonical
//! serialized form. Two objects with identical serialized bytes always share
//! one id, which is what makes the database deduplicate structurally.

use sha1::{Digest, Sha1};
use std::fmt;

/// 20-byte SHA-1 object identifier
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId([u8; 20]);

impl ObjectId {
    /// Create an ObjectId from a 20-byte array
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        ObjectId(bytes)
    }

    /// Get the underlying raw bytes
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Create an ObjectId from a 40-character hex string
    pub fn from_hex(hex: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(hex)?;
        if bytes.len() != 20 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut array = [0u8; 20];
        array.copy_from_slice(&bytes);
        Ok(ObjectId(array))
    }

    /// Convert to a 40-character hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({})", &hex::encode(self.0)[..8])
    }
}

impl From<[u8; 20]> for ObjectId {
    fn from(bytes: [u8; 20]) -> Self {
        ObjectId(bytes)
    }
}

/// Compute the SHA-1 digest of a byte sequence
pub fn sha1(data: &[u8]) -> ObjectId {
    let mut hasher = Sha1::new();
    hasher.update(data);
    ObjectId::from_bytes(hasher.finalize().into())
}
