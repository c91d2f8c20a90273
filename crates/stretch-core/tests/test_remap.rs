mod common;

use stretch_core::error::StretchError;
use stretch_core::filters::bounds::{find_min_max, BoundPair};
use stretch_core::filters::histogram::Histogram;
use stretch_core::filters::remap::{build_lut, remap, remap_value, remapped, stretch_factor};

use common::{full_range_raster, level_run_raster, noise_raster};

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn test_stretch_uniform_mid_range_to_full() {
    let mut raster = level_run_raster(50, 200);
    let input = find_min_max(&Histogram::from_raster(&raster));
    assert_eq!(input, BoundPair::new(50, 200));

    remap(&mut raster, input, BoundPair::full_range()).unwrap();

    // Pixel at column v - 50 started with intensity v.
    assert_eq!(raster.get(0, 0), Some(0));
    assert_eq!(raster.get(150, 0), Some(255));
    // 75 * 255 / 150 = 127.5, truncated.
    assert_eq!(raster.get(75, 0), Some(127));
}

#[test]
fn test_stretch_full_range_onto_explicit_bounds() {
    let mut raster = full_range_raster();
    let input = find_min_max(&Histogram::from_raster(&raster));
    assert_eq!(input, BoundPair::full_range());

    let factor = remap(&mut raster, input, BoundPair::new(10, 245)).unwrap();
    assert!((factor - 235.0 / 255.0).abs() < 1e-12);

    // Level v sits at (v % 16, v / 16).
    assert_eq!(raster.get(0, 0), Some(10));
    assert_eq!(raster.get(15, 15), Some(245));
    // 10 + 128 * 235 / 255 = 127.96, truncated.
    assert_eq!(raster.get(0, 8), Some(127));
}

#[test]
fn test_truncates_instead_of_rounding() {
    let input = BoundPair::new(0, 2);
    let output = BoundPair::full_range();
    assert_eq!(remap_value(1, input, output), 127);
    assert_eq!(remap_value(2, input, output), 255);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn test_identity_stretch_leaves_pixels_unchanged() {
    let original = noise_raster(40, 30, 3);
    for bounds in [
        BoundPair::new(30, 200),
        BoundPair::full_range(),
        BoundPair::new(0, 1),
    ] {
        let mut raster = original.clone();
        let factor = remap(&mut raster, bounds, bounds).unwrap();
        assert_eq!(factor, 1.0);
        assert_eq!(raster, original, "identity stretch changed pixels for {bounds}");
    }
}

#[test]
fn test_extrapolated_pixels_are_clamped() {
    let mut raster = full_range_raster();
    remap(&mut raster, BoundPair::new(100, 150), BoundPair::full_range()).unwrap();

    for v in 0..=255u8 {
        let out = raster.get(v as usize % 16, v as usize / 16).unwrap();
        if v < 100 {
            assert_eq!(out, 0, "level {v} should clamp to black");
        } else if v > 150 {
            assert_eq!(out, 255, "level {v} should clamp to white");
        }
    }
}

#[test]
fn test_matches_float_factor_truncation() {
    for lo in 0..255u8 {
        for hi in lo + 1..=255u8 {
            let input = BoundPair::new(lo, hi);
            for output in [BoundPair::full_range(), BoundPair::new(10, 245)] {
                let factor = stretch_factor(input, output).unwrap();
                let lut = build_lut(input, output).unwrap();
                for v in 0..=255u8 {
                    let expected = (output.lo as f64 + (v as f64 - lo as f64) * factor) as i64;
                    let expected = expected.clamp(0, 255) as u8;
                    assert_eq!(remap_value(v, input, output), expected, "{v} in {input}");
                    assert_eq!(lut[v as usize], expected, "{v} in {input}");
                }
            }
        }
    }
}

#[test]
fn test_float_product_can_fall_short_of_upper_bound() {
    // 25 * (255 / 25.0) evaluates just below 255 and truncates to 254.
    let input = BoundPair::new(0, 25);
    let output = BoundPair::full_range();
    assert_eq!(remap_value(0, input, output), 0);
    assert_eq!(remap_value(25, input, output), 254);
    assert_eq!(build_lut(input, output).unwrap()[25], 254);
}

#[test]
fn test_stretch_is_monotonic() {
    let lut = build_lut(BoundPair::new(37, 181), BoundPair::new(5, 250)).unwrap();
    for pair in lut.windows(2) {
        assert!(pair[0] <= pair[1]);
    }
}

#[test]
fn test_inverted_output_bounds_flip_intensities() {
    let lut = build_lut(BoundPair::full_range(), BoundPair::new(255, 0)).unwrap();
    assert_eq!(lut[0], 255);
    assert_eq!(lut[255], 0);
}

// ---------------------------------------------------------------------------
// Degenerate input
// ---------------------------------------------------------------------------

#[test]
fn test_degenerate_range_leaves_raster_untouched() {
    let original = noise_raster(20, 20, 11);
    for input in [BoundPair::new(77, 77), BoundPair::new(200, 100)] {
        let mut raster = original.clone();
        let result = remap(&mut raster, input, BoundPair::full_range());
        assert!(matches!(result, Err(StretchError::DegenerateRange { .. })));
        assert_eq!(raster, original);
    }
}

#[test]
fn test_stretch_factor_rejects_zero_span() {
    assert!(stretch_factor(BoundPair::new(5, 5), BoundPair::full_range()).is_err());
    assert!(build_lut(BoundPair::new(5, 5), BoundPair::full_range()).is_err());
}

// ---------------------------------------------------------------------------
// In-place vs copying, sequential vs parallel
// ---------------------------------------------------------------------------

#[test]
fn test_remapped_matches_in_place_and_keeps_source() {
    let source = noise_raster(50, 40, 5);
    let input = BoundPair::new(20, 220);
    let output = BoundPair::new(0, 255);

    let copy = remapped(&source, input, output).unwrap();
    let mut in_place = source.clone();
    remap(&mut in_place, input, output).unwrap();

    assert_eq!(copy, in_place);
    assert_eq!(source, noise_raster(50, 40, 5));
}

#[test]
fn test_large_raster_matches_lookup_table() {
    // Above the parallel threshold.
    let source = noise_raster(320, 240, 17);
    let input = BoundPair::new(40, 210);
    let output = BoundPair::new(16, 235);
    let lut = build_lut(input, output).unwrap();

    let mut raster = source.clone();
    remap(&mut raster, input, output).unwrap();

    for (before, after) in source.data.iter().zip(raster.data.iter()) {
        assert_eq!(*after, lut[*before as usize]);
        assert_eq!(*after, remap_value(*before, input, output));
    }
}
