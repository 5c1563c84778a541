//! Numeric building blocks for image and volume processing: fixed-size
//! vectors (re-exported from `lattice`), their binary layout (re-exported from
//! `warp_format`), and statistics over scalar and vector sequences.

mod error;

pub mod grid;
pub mod interleave;
pub mod stats;

pub use error::{Result, StatsError};

pub mod prelude {
    pub use crate::error::StatsError;
    pub use crate::grid::equal_grid_spacing;
    pub use crate::interleave::{from_interleaved, to_interleaved, unzip2, unzip3, zip2, zip3};
    pub use crate::stats::{self, UnNan};
    pub use lattice::prelude::*;
    pub use warp_format::{decode_series, encode_series, FormatError, VectorCodec};
}
