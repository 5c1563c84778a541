use lattice::prelude::*;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::{FormatError, Result};

/// Explicit encode/decode pair for a fixed-size record.
pub trait VectorCodec: Serialize + DeserializeOwned {
    /// Size of one encoded record in bytes.
    const ENCODED_SIZE: usize;

    fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decodes the leading `ENCODED_SIZE` bytes of `bytes`, anything after
    /// that is ignored.
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < Self::ENCODED_SIZE {
            return Err(FormatError::BufferTooShort {
                expected: Self::ENCODED_SIZE,
                actual: bytes.len(),
            });
        }

        Ok(bincode::deserialize(&bytes[..Self::ENCODED_SIZE])?)
    }
}

macro_rules! impl_vector_codec {
    ( $( $ty:ty )+ ) => {
        $(
            impl VectorCodec for $ty {
                const ENCODED_SIZE: usize = std::mem::size_of::<$ty>();
            }
        )+
    };
}

impl_vector_codec! { f32 i32 Float2 Float3 Float4 Int2 Int3 }
