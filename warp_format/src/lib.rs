//! Binary layout of the `lattice` vector types.
//!
//! A record is the concatenation of its fields in declaration order, each
//! field 4 bytes little-endian (IEEE-754 single precision or two's
//! complement), without padding or trailing metadata. A series is records
//! back to back with no header.

pub mod codec;
pub mod error;
pub mod series;

pub use codec::VectorCodec;
pub use error::{FormatError, Result};
pub use series::{decode_series, encode_series, read_series, write_series};
