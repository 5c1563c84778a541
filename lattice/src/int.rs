#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// A 2D integer coordinate or a width/height shape.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Int2 {
    pub x: i32,
    pub y: i32,
}

/// A 3D integer coordinate or a volume shape (`x` = width, `y` = height,
/// `z` = depth).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Int3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl_vec_common!(Int2, i32, 2, [x, y]);
impl_vec_common!(Int3, i32, 3, [x, y, z]);

// Division by zero panics like plain `i32` division.
impl_vec_ops!(Int2, i32, [x, y]);
impl_vec_ops!(Int3, i32, [x, y, z]);

macro_rules! impl_int_extras {
    ( $vec:ident, [ $( $field:ident ),+ ] ) => {
        impl $vec {
            /// `true` if every component of `self` is strictly smaller.
            pub fn all_lt(&self, other: &Self) -> bool {
                true $( && self.$field < other.$field )+
            }

            /// `true` if every component of `self` is strictly greater.
            pub fn all_gt(&self, other: &Self) -> bool {
                true $( && self.$field > other.$field )+
            }

            /// Multiplies every component by `factor`, truncating toward zero.
            pub fn scale_truncated(self, factor: f32) -> Self {
                Self { $( $field: (self.$field as f32 * factor) as i32 ),+ }
            }

            /// Divides every component by `divisor`, truncating toward zero.
            pub fn unscale_truncated(self, divisor: f32) -> Self {
                Self { $( $field: (self.$field as f32 / divisor) as i32 ),+ }
            }

            /// Componentwise division by a scalar, `None` on division by zero
            /// or overflow.
            pub fn checked_div(self, divisor: i32) -> Option<Self> {
                Some(Self { $( $field: self.$field.checked_div(divisor)? ),+ })
            }
        }
    };
}

impl_int_extras!(Int2, [x, y]);
impl_int_extras!(Int3, [x, y, z]);

impl Int2 {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Int3 {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The shape of a single XY plane of this volume.
    pub const fn slice(&self) -> Self {
        Self::new(self.x, self.y, 1)
    }
}

/// Drops `z`.
impl From<Int3> for Int2 {
    fn from(value: Int3) -> Self {
        Self::new(value.x, value.y)
    }
}

/// A 2D shape becomes a single-slice volume.
impl From<Int2> for Int3 {
    fn from(value: Int2) -> Self {
        Self::new(value.x, value.y, 1)
    }
}
