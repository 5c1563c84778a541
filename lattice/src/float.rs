#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Float2 {
    pub x: f32,
    pub y: f32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Float3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Four float components, typically a homogeneous coordinate or a color.
///
/// `==` only looks at `x`, `y` and `z`; two values that differ in `w` alone
/// compare equal. Existing callers rely on this, use [`Float4::eq_xyzw`] to
/// include `w`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Float4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl_vec_common!(Float2, f32, 2, [x, y]);
impl_vec_common!(Float3, f32, 3, [x, y, z]);
impl_vec_common!(Float4, f32, 4, [x, y, z, w]);

impl_vec_ops!(Float2, f32, [x, y]);
impl_vec_ops!(Float3, f32, [x, y, z]);
impl_vec_ops!(Float4, f32, [x, y, z, w]);

impl Float2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Float3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Per-component floor.
    pub fn floor(self) -> Self {
        Self::new(self.x.floor(), self.y.floor(), self.z.floor())
    }

    /// Per-component ceiling.
    pub fn ceil(self) -> Self {
        Self::new(self.x.ceil(), self.y.ceil(), self.z.ceil())
    }
}

impl Float4 {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    pub fn eq_xyzw(&self, other: &Self) -> bool {
        self == other && self.w == other.w
    }
}

impl PartialEq for Float4 {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z
    }
}
