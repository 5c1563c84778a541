use lattice::prelude::*;
use log::debug;

use crate::stats::next_multiple_of;

/// Places equally spaced regions of `dims_region` over an image of
/// `dims_image`, neighbouring regions overlapping by `overlap_fraction`.
///
/// Returns the region origins in row-major order (`z` is always 0) together
/// with the grid extent.
pub fn equal_grid_spacing(
    dims_image: Int2,
    dims_region: Int2,
    overlap_fraction: f32,
) -> (Vec<Int3>, Int2) {
    let step = dims_region.scale_truncated(1.0 - overlap_fraction);
    // a region larger than the image yields an empty grid
    let dims_grid = Int2::new(
        (next_multiple_of(dims_image.x - (dims_region.x - step.x), step.x) / step.x).max(0),
        (next_multiple_of(dims_image.y - (dims_region.y - step.y), step.y) / step.y).max(0),
    );

    let spare = dims_image - dims_region;
    let shift_along = |extra: i32, cells: i32| {
        if cells > 1 {
            (extra as f32 / (cells - 1) as f32) as i32
        } else {
            extra / 2
        }
    };
    let shift = Int2::new(
        shift_along(spare.x, dims_grid.x),
        shift_along(spare.y, dims_grid.y),
    );
    let offset = (dims_image - shift * (dims_grid - 1) - dims_region) / 2;

    debug!(
        "Grid of {} regions ({}) with shift {} and offset {}",
        dims_grid.elements(),
        dims_grid,
        shift,
        offset
    );

    let mut origins = Vec::with_capacity(dims_grid.elements() as usize);
    for y in 0..dims_grid.y {
        for x in 0..dims_grid.x {
            origins.push(Int3::new(
                x * shift.x + offset.x,
                y * shift.y + offset.y,
                0,
            ));
        }
    }

    (origins, dims_grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_overlap() {
        let (origins, dims_grid) = equal_grid_spacing(Int2::new(100, 100), Int2::new(50, 50), 0.5);

        assert_eq!(dims_grid, Int2::new(3, 3));
        assert_eq!(origins.len() as i64, dims_grid.elements());
        assert_eq!(origins[0], Int3::new(0, 0, 0));
        assert_eq!(origins[1], Int3::new(25, 0, 0));
        assert_eq!(origins[2], Int3::new(50, 0, 0));
        assert_eq!(origins[3], Int3::new(0, 25, 0));
        assert_eq!(origins[8], Int3::new(50, 50, 0));
    }

    #[test]
    fn origins_follow_row_major_index() {
        let (origins, dims_grid) = equal_grid_spacing(Int2::new(300, 200), Int2::new(64, 64), 0.25);

        for y in 0..dims_grid.y {
            for x in 0..dims_grid.x {
                let idx = dims_grid.element_from_position(Int2::new(x, y)) as usize;
                assert_eq!(origins[idx].z, 0);
                if x > 0 {
                    assert!(origins[idx].x > origins[idx - 1].x);
                }
            }
        }
    }

    #[test]
    fn regions_reach_image_border() {
        let (origins, dims_grid) = equal_grid_spacing(Int2::new(60, 60), Int2::new(50, 50), 0.0);

        assert_eq!(dims_grid, Int2::new(2, 2));
        assert_eq!(
            origins,
            vec![
                Int3::new(0, 0, 0),
                Int3::new(10, 0, 0),
                Int3::new(0, 10, 0),
                Int3::new(10, 10, 0),
            ]
        );
    }

    #[test]
    fn single_region() {
        let (origins, dims_grid) = equal_grid_spacing(Int2::new(50, 40), Int2::new(50, 40), 0.5);

        assert_eq!(dims_grid, Int2::new(1, 1));
        assert_eq!(origins, vec![Int3::new(0, 0, 0)]);
    }

    #[test]
    fn region_larger_than_image() {
        let (origins, dims_grid) =
            equal_grid_spacing(Int2::new(10, 10), Int2::new(200, 200), 0.9);

        assert_eq!(dims_grid, Int2::new(0, 0));
        assert!(origins.is_empty());
    }
}
