//! Caller-owned byte buffers that cross the API boundary: blobs,
//! commitments, proofs, and the raw 32/48-byte wire types they're built
//! from.
//!
//! Array trait impls (`Debug`, `PartialEq`, ...) aren't derived here even
//! where the compiler would accept it: this crate supports two very
//! differently sized array constants (`BYTES_PER_BLOB` is either 128 or
//! 131072 bytes) behind the same macro, so every wrapper gets the same
//! hand-written impls regardless of size.

use crate::consts::{
    BYTES_PER_BLOB, BYTES_PER_COMMITMENT, BYTES_PER_FIELD_ELEMENT, BYTES_PER_PROOF,
};
use crate::error::{bad_args, Error};

macro_rules! byte_wrapper {
    ($name:ident, $len:expr) => {
        #[derive(Clone, Copy)]
        pub struct $name(pub [u8; $len]);

        impl $name {
            pub const LEN: usize = $len;

            pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
                if bytes.len() != $len {
                    return Err(bad_args(format!(
                        concat!(stringify!($name), ": expected {} bytes, got {}"),
                        $len,
                        bytes.len()
                    )));
                }
                let mut out = [0u8; $len];
                out.copy_from_slice(bytes);
                Ok($name(out))
            }

            pub fn from_hex(s: &str) -> Result<Self, Error> {
                let s = s.strip_prefix("0x").unwrap_or(s);
                let bytes = hex::decode(s).map_err(|e| bad_args(format!("invalid hex: {e}")))?;
                Self::from_bytes(&bytes)
            }

            pub fn to_hex(&self) -> String {
                format!("0x{}", hex::encode(self.0))
            }

            pub fn as_slice(&self) -> &[u8] {
                &self.0
            }

            pub fn into_inner(self) -> [u8; $len] {
                self.0
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                $name(bytes)
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.0[..] == other.0[..]
            }
        }
        impl Eq for $name {}

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({})", stringify!($name), self.to_hex())
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_hex())
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                $name::from_hex(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}

byte_wrapper!(Bytes32, BYTES_PER_FIELD_ELEMENT);
// Distinct nominal types for commitments and proofs: both are 48-byte
// compressed G1 points on the wire, but a proof is never a valid argument
// where a commitment is expected and vice versa.
byte_wrapper!(KzgCommitment, BYTES_PER_COMMITMENT);
byte_wrapper!(KzgProof, BYTES_PER_PROOF);

/// A blob: `FIELD_ELEMENTS_PER_BLOB` field elements, each a canonical
/// 32-byte little-endian scalar, concatenated.
#[derive(Clone, Copy)]
pub struct Blob(pub [u8; BYTES_PER_BLOB]);

impl Blob {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != BYTES_PER_BLOB {
            return Err(bad_args(format!(
                "blob: expected {BYTES_PER_BLOB} bytes, got {}",
                bytes.len()
            )));
        }
        let mut out = [0u8; BYTES_PER_BLOB];
        out.copy_from_slice(bytes);
        Ok(Blob(out))
    }

    pub fn from_hex(s: &str) -> Result<Self, Error> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s).map_err(|e| bad_args(format!("invalid hex: {e}")))?;
        Self::from_bytes(&bytes)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// The blob's `i`-th 32-byte field element chunk.
    pub fn field_element(&self, i: usize) -> [u8; BYTES_PER_FIELD_ELEMENT] {
        let mut out = [0u8; BYTES_PER_FIELD_ELEMENT];
        let start = i * BYTES_PER_FIELD_ELEMENT;
        out.copy_from_slice(&self.0[start..start + BYTES_PER_FIELD_ELEMENT]);
        out
    }
}

impl Default for Blob {
    fn default() -> Self {
        Blob([0u8; BYTES_PER_BLOB])
    }
}

impl PartialEq for Blob {
    fn eq(&self, other: &Self) -> bool {
        self.0[..] == other.0[..]
    }
}
impl Eq for Blob {}

impl std::fmt::Debug for Blob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Blob(0x{}..)", hex::encode(&self.0[..8.min(self.0.len())]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_wrong_length() {
        assert!(KzgCommitment::from_bytes(&[0u8; 47]).is_err());
        assert!(Blob::from_bytes(&[0u8; 4]).is_err());
    }

    #[test]
    fn hex_roundtrip() {
        let bytes = [7u8; 48];
        let wrapped = KzgCommitment::from(bytes);
        let hex = wrapped.to_hex();
        let back = KzgCommitment::from_hex(&hex).unwrap();
        assert_eq!(wrapped, back);
    }

    #[test]
    fn commitment_and_proof_are_distinct_types() {
        let bytes = [1u8; 48];
        let commitment = KzgCommitment::from(bytes);
        let proof = KzgProof::from(bytes);
        // Same bytes, but the type system keeps them from being interchanged
        // at a call site expecting the other.
        assert_eq!(commitment.into_inner(), proof.into_inner());
    }
}
