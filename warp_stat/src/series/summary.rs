use std::fmt;

use lattice::prelude::*;
use warp_tools::stats;

/// Descriptive statistics of one component of a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Summary {
    pub(crate) count: usize,
    pub(crate) mean: f32,
    pub(crate) std_dev: f32,
    pub(crate) min: f32,
    pub(crate) max: f32,
    pub(crate) median: f32,
}

impl Summary {
    /// `values` must not be empty.
    pub(crate) fn of(values: &[f32]) -> Self {
        let Float2 { x: mean, y: std_dev } = stats::mean_and_std(values);
        Self {
            count: values.len(),
            mean,
            std_dev,
            min: stats::min(values),
            max: stats::max(values),
            median: stats::median(values),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n = {}, mean = {}, std = {}, min = {}, max = {}, median = {}",
            self.count, self.mean, self.std_dev, self.min, self.max, self.median
        )
    }
}

/// Splits a series into one sequence per component.
pub(crate) fn columns<V: Components>(series: &[V]) -> Vec<Vec<V::Scalar>> {
    let flat = warp_tools::interleave::to_interleaved(series);
    (0..V::COUNT)
        .map(|c| flat.iter().skip(c).step_by(V::COUNT).copied().collect())
        .collect()
}

/// Inverse of [`columns`]. All columns have the same length.
pub(crate) fn join_columns<V: Components>(columns: &[Vec<V::Scalar>]) -> Vec<V> {
    let len = columns.first().map_or(0, Vec::len);
    let mut flat = Vec::with_capacity(len * V::COUNT);
    for i in 0..len {
        flat.extend(columns.iter().map(|column| column[i]));
    }
    warp_tools::interleave::from_interleaved(&flat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn textbook_summary() {
        let summary = Summary::of(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);

        assert_eq!(
            summary,
            Summary {
                count: 8,
                mean: 5.0,
                std_dev: 2.0,
                min: 2.0,
                max: 9.0,
                median: 5.0,
            }
        );
        assert_eq!(
            summary.to_string(),
            "n = 8, mean = 5, std = 2, min = 2, max = 9, median = 5"
        );
    }

    #[test]
    fn split_and_join() {
        let series = [Int3::new(1, 2, 3), Int3::new(4, 5, 6)];
        let split = columns(&series);

        assert_eq!(split, vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
        assert_eq!(join_columns::<Int3>(&split), series);
    }

    #[test]
    fn scalar_series_is_one_column() {
        let split = columns(&[1.0f32, 2.0, 3.0]);

        assert_eq!(split, vec![vec![1.0, 2.0, 3.0]]);
    }
}
