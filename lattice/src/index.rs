//! Row-major index flattening, `x` varies fastest in memory.
//!
//! A shape `S` and a position `P` of the same arity map to
//! `(P.z * S.y + P.y) * S.x + P.x` (3D) or `P.y * S.x + P.x` (2D).
//! Positions are not checked in release builds; an out-of-range position
//! yields an out-of-range index.

use crate::int::{Int2, Int3};

pub trait FlatIndex: Copy {
    /// Total number of elements of the shape.
    fn elements(&self) -> i64;

    /// Number of elements in one XY plane, independent of depth.
    fn elements_slice(&self) -> i64;

    /// Linear index of `position`, computed in wrapping 32-bit unsigned
    /// arithmetic. Only valid while [`FlatIndex::elements`] fits in `u32`.
    fn element_from_position(&self, position: Self) -> u32;

    /// Linear index of `position` in 64-bit arithmetic.
    fn element_from_position_long(&self, position: Self) -> i64;

    /// `true` if `position` lies within `[0, self)` on every axis.
    fn contains(&self, position: Self) -> bool;
}

impl FlatIndex for Int2 {
    fn elements(&self) -> i64 {
        self.x as i64 * self.y as i64
    }

    fn elements_slice(&self) -> i64 {
        self.elements()
    }

    fn element_from_position(&self, position: Self) -> u32 {
        debug_assert!(
            self.contains(position),
            "position {} outside of shape {}",
            position,
            self
        );

        (position.y as u32)
            .wrapping_mul(self.x as u32)
            .wrapping_add(position.x as u32)
    }

    fn element_from_position_long(&self, position: Self) -> i64 {
        debug_assert!(
            self.contains(position),
            "position {} outside of shape {}",
            position,
            self
        );

        position.y as i64 * self.x as i64 + position.x as i64
    }

    fn contains(&self, position: Self) -> bool {
        position.x >= 0 && position.y >= 0 && position.all_lt(self)
    }
}

impl FlatIndex for Int3 {
    fn elements(&self) -> i64 {
        self.x as i64 * self.y as i64 * self.z as i64
    }

    fn elements_slice(&self) -> i64 {
        self.x as i64 * self.y as i64
    }

    fn element_from_position(&self, position: Self) -> u32 {
        self.element_from_xyz(position.x, position.y, position.z)
    }

    fn element_from_position_long(&self, position: Self) -> i64 {
        debug_assert!(
            self.contains(position),
            "position {} outside of shape {}",
            position,
            self
        );

        (position.z as i64 * self.y as i64 + position.y as i64) * self.x as i64 + position.x as i64
    }

    fn contains(&self, position: Self) -> bool {
        position.x >= 0 && position.y >= 0 && position.z >= 0 && position.all_lt(self)
    }
}

impl Int3 {
    /// [`FlatIndex::element_from_position`] with loose coordinates.
    pub fn element_from_xyz(&self, x: i32, y: i32, z: i32) -> u32 {
        debug_assert!(
            self.contains(Int3::new(x, y, z)),
            "position {}, {}, {} outside of shape {}",
            x,
            y,
            z,
            self
        );

        (z as u32)
            .wrapping_mul(self.y as u32)
            .wrapping_add(y as u32)
            .wrapping_mul(self.x as u32)
            .wrapping_add(x as u32)
    }
}
