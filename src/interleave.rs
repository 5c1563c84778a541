//! Conversions between vector sequences and flat scalar sequences.

use lattice::prelude::*;

use crate::error::{check_lengths, Result};

/// Flattens `vectors` into their components, `x0, y0, x1, y1, ...`.
pub fn to_interleaved<V: Components>(vectors: &[V]) -> Vec<V::Scalar> {
    let mut interleaved = Vec::with_capacity(vectors.len() * V::COUNT);
    for vector in vectors {
        vector.extend_into(&mut interleaved);
    }
    interleaved
}

/// Inverse of [`to_interleaved`]. Trailing values that do not fill a whole
/// vector are dropped.
pub fn from_interleaved<V: Components>(values: &[V::Scalar]) -> Vec<V> {
    values
        .chunks_exact(V::COUNT)
        .map(V::from_components)
        .collect()
}

pub fn zip2(xs: &[f32], ys: &[f32]) -> Result<Vec<Float2>> {
    check_lengths(xs.len(), ys.len())?;
    Ok(xs
        .iter()
        .zip(ys.iter())
        .map(|(&x, &y)| Float2::new(x, y))
        .collect())
}

pub fn zip3(xs: &[f32], ys: &[f32], zs: &[f32]) -> Result<Vec<Float3>> {
    check_lengths(xs.len(), ys.len())?;
    check_lengths(xs.len(), zs.len())?;
    Ok(xs
        .iter()
        .zip(ys.iter())
        .zip(zs.iter())
        .map(|((&x, &y), &z)| Float3::new(x, y, z))
        .collect())
}

pub fn unzip2(vectors: &[Float2]) -> (Vec<f32>, Vec<f32>) {
    vectors.iter().map(|v| (v.x, v.y)).unzip()
}

pub fn unzip3(vectors: &[Float3]) -> (Vec<f32>, Vec<f32>, Vec<f32>) {
    let mut xs = Vec::with_capacity(vectors.len());
    let mut ys = Vec::with_capacity(vectors.len());
    let mut zs = Vec::with_capacity(vectors.len());
    for v in vectors {
        xs.push(v.x);
        ys.push(v.y);
        zs.push(v.z);
    }
    (xs, ys, zs)
}
