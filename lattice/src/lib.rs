//! Fixed-size vector value types used for coordinates, colors and volume
//! dimensions.
//!
//! All types are `#[repr(C)]` aggregates of 32-bit fields in declaration
//! order. Equality is exact per field, there is no epsilon comparison.

#[macro_use]
mod ops;

mod float;
mod index;
mod int;
mod scalar;

#[cfg(test)]
mod test_util;

pub use float::{Float2, Float3, Float4};
pub use index::FlatIndex;
pub use int::{Int2, Int3};
pub use scalar::Components;

pub mod prelude {
    pub use crate::float::{Float2, Float3, Float4};
    pub use crate::index::FlatIndex;
    pub use crate::int::{Int2, Int3};
    pub use crate::scalar::Components;
}
