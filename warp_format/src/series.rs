use std::path::Path;

use log::debug;

use crate::{
    codec::VectorCodec,
    error::{FormatError, Result},
};

/// Packs `values` back to back.
pub fn encode_series<V: VectorCodec>(values: &[V]) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(values.len() * V::ENCODED_SIZE);
    for value in values {
        bincode::serialize_into(&mut bytes, value)?;
    }
    Ok(bytes)
}

/// Unpacks a series written by [`encode_series`]. The buffer length has to be
/// a multiple of the record size.
pub fn decode_series<V: VectorCodec>(bytes: &[u8]) -> Result<Vec<V>> {
    if bytes.len() % V::ENCODED_SIZE != 0 {
        return Err(FormatError::TrailingBytes {
            record_size: V::ENCODED_SIZE,
            actual: bytes.len(),
        });
    }

    bytes
        .chunks_exact(V::ENCODED_SIZE)
        .map(V::from_bytes)
        .collect()
}

pub fn read_series<V: VectorCodec>(path: &Path) -> Result<Vec<V>> {
    let data = std::fs::read(path)?;
    debug!("Read {} bytes from `{}`", data.len(), path.display());
    decode_series(&data)
}

pub fn write_series<V: VectorCodec>(path: &Path, values: &[V]) -> Result<()> {
    let data = encode_series(values)?;
    std::fs::write(path, &data)?;
    debug!(
        "Wrote {} records ({} bytes) to `{}`",
        values.len(),
        data.len(),
        path.display()
    );
    Ok(())
}
