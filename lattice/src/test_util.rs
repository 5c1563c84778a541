use std::fmt;

use crate::scalar::Components;

/// Approximate comparison for results of float arithmetic, where the exact
/// `PartialEq` of the vector types is too strict.
#[derive(Debug, Clone)]
pub struct VecCmp {
    error_margin: f32,
}

impl VecCmp {
    pub const DEFAULT: Self = Self { error_margin: 1e-6 };

    pub fn eq_margin<V>(&self, is: &V, should: &V, error_margin: f32)
    where
        V: Components<Scalar = f32> + fmt::Debug,
    {
        let mut is_components = Vec::with_capacity(V::COUNT);
        let mut should_components = Vec::with_capacity(V::COUNT);
        is.extend_into(&mut is_components);
        should.extend_into(&mut should_components);

        for (idx, (v1, v2)) in is_components
            .iter()
            .zip(should_components.iter())
            .enumerate()
        {
            let diff_abs = (v1 - v2).abs();

            assert!(
                diff_abs <= error_margin,
                "is: {:?} should: {:?} (+- {:?}) @ component {}",
                is,
                should,
                error_margin,
                idx
            );
        }
    }

    pub fn eq<V>(&self, is: &V, should: &V)
    where
        V: Components<Scalar = f32> + fmt::Debug,
    {
        self.eq_margin(is, should, self.error_margin)
    }
}

impl Default for VecCmp {
    fn default() -> Self {
        Self::DEFAULT
    }
}
