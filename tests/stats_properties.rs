use proptest::prelude::*;
use warp_tools::prelude::*;

// Property 1: a normalized non-constant sequence has mean ~0 and std ~1
proptest! {
    #[test]
    fn prop_normalize_unit_moments(values in prop::collection::vec(-10.0f32..10.0f32, 2..200)) {
        let spread = stats::max(&values) - stats::min(&values);
        prop_assume!(spread > 1.0);

        let normalized = stats::normalize(&values);
        let Float2 { x: mean, y: std } = stats::mean_and_std(&normalized);

        prop_assert!(mean.abs() < 1e-3, "mean {} not ~0", mean);
        prop_assert!((std - 1.0).abs() < 5e-3, "std {} not ~1", std);
    }
}

// Property 2: normalized cross-correlation is a correlation coefficient
proptest! {
    #[test]
    fn prop_correlation_bounded(
        pairs in prop::collection::vec((-10.0f32..10.0f32, -10.0f32..10.0f32), 2..200)
    ) {
        let (a, b): (Vec<f32>, Vec<f32>) = pairs.into_iter().unzip();
        prop_assume!(stats::max(&a) - stats::min(&a) > 1.0);
        prop_assume!(stats::max(&b) - stats::min(&b) > 1.0);

        let r = stats::cross_correlate_normalized(&a, &b).unwrap();
        let self_r = stats::cross_correlate_normalized(&a, &a).unwrap();

        prop_assert!(r.abs() <= 1.0 + 5e-3, "r = {}", r);
        prop_assert!((self_r - 1.0).abs() < 5e-3, "self correlation {}", self_r);
    }
}

// Property 3: zeroing NaNs leaves no NaN behind and is idempotent
proptest! {
    #[test]
    fn prop_un_nan_idempotent(
        values in prop::collection::vec(prop_oneof![Just(f32::NAN), -10.0f32..10.0f32], 0..100)
    ) {
        let mut once = values.clone();
        stats::un_nan(&mut once);
        let mut twice = once.clone();
        stats::un_nan(&mut twice);

        prop_assert!(once.iter().all(|v| !v.is_nan()));
        prop_assert_eq!(&once, &twice);
        for (before, after) in values.iter().zip(once.iter()) {
            if !before.is_nan() {
                prop_assert_eq!(before, after);
            }
        }
    }
}

// Property 4: the finite difference telescopes back to last - first
proptest! {
    #[test]
    fn prop_diff_telescopes(values in prop::collection::vec(-1000i32..1000, 1..100)) {
        let values: Vec<f64> = values.into_iter().map(f64::from).collect();
        let d = stats::diff(&values);

        prop_assert_eq!(d.len(), values.len() - 1);
        prop_assert_eq!(d.iter().sum::<f64>(), values[values.len() - 1] - values[0]);
    }
}

// Property 5: adding and subtracting the same vector is exact for values
// without rounding (integers scaled by powers of two)
proptest! {
    #[test]
    fn prop_add_sub_inverse(a in any::<[i16; 3]>(), b in any::<[i16; 3]>()) {
        let a = Float3::new(a[0] as f32 / 4.0, a[1] as f32 / 4.0, a[2] as f32 / 4.0);
        let b = Float3::new(b[0] as f32 * 2.0, b[1] as f32 * 2.0, b[2] as f32 * 2.0);

        prop_assert_eq!((a + b) - b, a);
    }
}

// Property 6: flattening maps every position of a shape to a distinct index
// below the element count
proptest! {
    #[test]
    fn prop_flatten_bijective(x in 1i32..8, y in 1i32..8, z in 1i32..8) {
        let shape = Int3::new(x, y, z);
        let mut seen = vec![false; shape.elements() as usize];

        for pz in 0..z {
            for py in 0..y {
                for px in 0..x {
                    let position = Int3::new(px, py, pz);
                    let idx = shape.element_from_position_long(position);
                    prop_assert_eq!(idx, shape.element_from_position(position) as i64);
                    prop_assert!(!seen[idx as usize]);
                    seen[idx as usize] = true;
                }
            }
        }

        prop_assert!(seen.into_iter().all(|v| v));
    }
}

// Property 7: interleaving round-trips through the flat representation
proptest! {
    #[test]
    fn prop_interleave_roundtrip(values in prop::collection::vec(any::<[i32; 3]>(), 0..100)) {
        let vectors: Vec<Int3> = values.into_iter().map(Int3::from).collect();
        let flat = to_interleaved(&vectors);

        prop_assert_eq!(flat.len(), vectors.len() * 3);
        prop_assert_eq!(from_interleaved::<Int3>(&flat), vectors);
    }
}

#[test]
fn weighted_reduction_is_a_sum() {
    assert_eq!(stats::reduce_weighted(&[1.0, 2.0, 3.0], &[1.0, 1.0, 1.0]), Ok(6.0));
}

#[test]
fn series_feeds_statistics() -> Result<(), Box<dyn std::error::Error>> {
    let samples = [2.0f32, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    let bytes = encode_series(&samples)?;
    let decoded: Vec<f32> = decode_series(&bytes)?;

    assert_eq!(stats::mean_and_std(&decoded), Float2::new(5.0, 2.0));

    Ok(())
}
