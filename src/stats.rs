//! Statistics and reductions over materialized sequences.
//!
//! Sums of `f32` data are accumulated in `f64` and narrowed before the final
//! division. The standard deviation is the population one, computed through
//! the sum of squares: `sqrt(n·Σx² − (Σx)²) / n`. Downstream results depend on
//! this exact formula, it is not the two-pass form.
//!
//! `mean`, `std_dev` and the normalizations expect a non-empty input. Debug
//! builds assert this, release builds return NaN.

use std::ops::Sub;

use lattice::prelude::*;

use crate::error::{check_lengths, Result};

/// Returns `(Σx, Σx²)`. Squares are taken in single precision before they are
/// accumulated.
fn sums(data: &[f32]) -> (f64, f64) {
    data.iter().fold((0.0, 0.0), |(sum, sum2), &value| {
        (sum + value as f64, sum2 + (value * value) as f64)
    })
}

fn mean_from_sum(n: usize, sum: f64) -> f32 {
    sum as f32 / n as f32
}

fn std_from_sums(n: usize, sum: f64, sum2: f64) -> f32 {
    (n as f64 * sum2 - sum * sum).sqrt() as f32 / n as f32
}

pub fn mean(data: &[f32]) -> f32 {
    debug_assert!(!data.is_empty(), "mean of an empty sequence");
    let sum: f64 = data.iter().map(|&value| value as f64).sum();
    mean_from_sum(data.len(), sum)
}

/// Componentwise mean, summed in single precision.
pub fn mean_float2(data: &[Float2]) -> Float2 {
    debug_assert!(!data.is_empty(), "mean of an empty sequence");
    let sum = data.iter().fold(Float2::ZERO, |sum, &value| sum + value);
    sum / data.len() as f32
}

/// Population standard deviation.
pub fn std_dev(data: &[f32]) -> f32 {
    debug_assert!(!data.is_empty(), "standard deviation of an empty sequence");
    let (sum, sum2) = sums(data);
    std_from_sums(data.len(), sum, sum2)
}

/// Mean in `x` and population standard deviation in `y`, from a single pass.
pub fn mean_and_std(data: &[f32]) -> Float2 {
    debug_assert!(!data.is_empty(), "statistics of an empty sequence");
    let (sum, sum2) = sums(data);
    Float2::new(
        mean_from_sum(data.len(), sum),
        std_from_sums(data.len(), sum, sum2),
    )
}

/// Subtracts the mean and divides by the standard deviation.
///
/// A constant input has a standard deviation of zero, the result is then NaN
/// (or infinite) and is returned as such.
pub fn normalize(data: &[f32]) -> Vec<f32> {
    let mut result = data.to_vec();
    normalize_in_place(&mut result);
    result
}

pub fn normalize_in_place(data: &mut [f32]) {
    let Float2 { x: avg, y: std } = mean_and_std(data);
    for value in data.iter_mut() {
        *value = (*value - avg) / std;
    }
}

/// Mean of the elementwise product.
pub fn cross_correlate(a: &[f32], b: &[f32]) -> Result<f32> {
    let product = mult(a, b)?;
    let sum: f64 = product.iter().map(|&value| value as f64).sum();
    Ok(sum as f32 / a.len() as f32)
}

/// Cross-correlation of the independently normalized inputs, i.e. the
/// Pearson correlation coefficient.
pub fn cross_correlate_normalized(a: &[f32], b: &[f32]) -> Result<f32> {
    check_lengths(a.len(), b.len())?;
    cross_correlate(&normalize(a), &normalize(b))
}

/// Smallest element. An empty input returns `f32::MAX`; NaN propagates.
pub fn min(data: &[f32]) -> f32 {
    data.iter().fold(f32::MAX, |min, &value| {
        if value < min || value.is_nan() {
            value
        } else {
            min
        }
    })
}

/// Largest element. An empty input returns `-f32::MAX`; NaN propagates.
pub fn max(data: &[f32]) -> f32 {
    data.iter().fold(-f32::MAX, |max, &value| {
        if value > max || value.is_nan() {
            value
        } else {
            max
        }
    })
}

fn elementwise(a: &[f32], b: &[f32], op: impl Fn(f32, f32) -> f32) -> Result<Vec<f32>> {
    check_lengths(a.len(), b.len())?;
    Ok(a.iter().zip(b.iter()).map(|(&a, &b)| op(a, b)).collect())
}

pub fn plus(a: &[f32], b: &[f32]) -> Result<Vec<f32>> {
    elementwise(a, b, |a, b| a + b)
}

pub fn minus(a: &[f32], b: &[f32]) -> Result<Vec<f32>> {
    elementwise(a, b, |a, b| a - b)
}

pub fn mult(a: &[f32], b: &[f32]) -> Result<Vec<f32>> {
    elementwise(a, b, |a, b| a * b)
}

pub fn div(a: &[f32], b: &[f32]) -> Result<Vec<f32>> {
    elementwise(a, b, |a, b| a / b)
}

/// First-order finite difference, `out[i] = data[i + 1] - data[i]`.
/// Inputs shorter than two elements give an empty result.
pub fn diff<T>(data: &[T]) -> Vec<T>
where
    T: Copy + Sub<T, Output = T>,
{
    data.windows(2).map(|pair| pair[1] - pair[0]).collect()
}

/// `Σ data[i] · weights[i]`, accumulated in single precision.
///
/// This is a weighted sum, it is not divided by the sum of the weights.
pub fn reduce_weighted(data: &[f32], weights: &[f32]) -> Result<f32> {
    check_lengths(data.len(), weights.len())?;
    Ok(data
        .iter()
        .zip(weights.iter())
        .fold(0.0f32, |sum, (&value, &weight)| sum + value * weight))
}

/// Values whose NaN components can be replaced by zero.
pub trait UnNan {
    fn un_nan(&mut self);
}

macro_rules! impl_float_un_nan {
    ( $( $float:ty )+ ) => {
        $(
            impl UnNan for $float {
                fn un_nan(&mut self) {
                    if self.is_nan() {
                        *self = 0.0;
                    }
                }
            }
        )+
    };
}

macro_rules! impl_vec_un_nan {
    ( $( $vec:ty => [ $( $field:ident ),+ ] ),+ ) => {
        $(
            impl UnNan for $vec {
                fn un_nan(&mut self) {
                    $( self.$field.un_nan(); )+
                }
            }
        )+
    };
}

impl_float_un_nan! { f32 f64 }

impl_vec_un_nan! {
    Float2 => [x, y],
    Float3 => [x, y, z],
    Float4 => [x, y, z, w]
}

/// Replaces every NaN (per component for vectors) with zero, in place.
pub fn un_nan<T: UnNan>(data: &mut [T]) {
    data.iter_mut().for_each(T::un_nan);
}

/// `value - trunc(value)`: the fractional part, negative for negative input.
pub fn residual_fraction(value: f32) -> f32 {
    value - value.trunc()
}

/// Smallest multiple of `factor` that is not less than `value`.
///
/// # Panics
///
/// Panics if `factor` is zero. `factor` must be positive.
pub fn next_multiple_of(value: i32, factor: i32) -> i32 {
    debug_assert!(factor > 0, "factor must be positive, got {}", factor);
    let quotient = value / factor;
    if value % factor > 0 {
        (quotient + 1) * factor
    } else {
        quotient * factor
    }
}

/// Element at index `n / 2` of the sorted input (upper median for even `n`).
///
/// # Panics
///
/// Panics on an empty input.
pub fn median(data: &[f32]) -> f32 {
    let mut sorted = data.to_vec();
    sorted.sort_by(f32::total_cmp);
    sorted[sorted.len() / 2]
}

fn within(data: &[f32], center: f32, nstd: f32) -> impl Iterator<Item = (usize, f32)> + '_ {
    let limit = std_dev(data) * nstd;
    data.iter()
        .copied()
        .enumerate()
        .filter(move |&(_, value)| (value - center).abs() <= limit)
}

/// Elements within `nstd` standard deviations of the mean.
pub fn within_n_std(data: &[f32], nstd: f32) -> Vec<f32> {
    within(data, mean(data), nstd).map(|(_, value)| value).collect()
}

/// Elements within `nstd` standard deviations of the median.
pub fn within_n_std_from_median(data: &[f32], nstd: f32) -> Vec<f32> {
    within(data, median(data), nstd)
        .map(|(_, value)| value)
        .collect()
}

/// Indices of the elements within `nstd` standard deviations of the median.
pub fn within_n_std_from_median_indices(data: &[f32], nstd: f32) -> Vec<usize> {
    within(data, median(data), nstd)
        .map(|(idx, _)| idx)
        .collect()
}
