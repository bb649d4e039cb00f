mod common;

use hb_blur::{
    BlurConfig, TileMaxima, aggregate, analyze, classify_tiles, count_structures, detect_blur,
    tile_maxima,
};
use hb_core::{Image, to_f32};
use hb_wavelet::EdgePyramid;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use common::{noise_u8, scaled_u16, smoothed_step_u8};

#[test]
fn tile_count_matches_finest_map_for_random_sizes() {
    let mut rng = StdRng::seed_from_u64(11);
    for case in 0..24u64 {
        let width = 16 * rng.gen_range(1..=12usize);
        let height = 16 * rng.gen_range(1..=12usize);
        let img = noise_u8(width, height, case);

        let maxima = tile_maxima(&img.as_view()).expect("aligned");
        let (w1, h1) = (width / 2, height / 2);
        assert_eq!(w1 % 8, 0);
        assert_eq!(h1 % 8, 0);
        assert_eq!(maxima.len(), (h1 / 8) * (w1 / 8), "{width}x{height}");
        assert_eq!(maxima.emax2.len(), maxima.len());
        assert_eq!(maxima.emax3.len(), maxima.len());
    }
}

#[test]
fn edge_maps_halve_per_level() {
    let mut rng = StdRng::seed_from_u64(5);
    for case in 0..12u64 {
        let width = 16 * rng.gen_range(1..=10usize);
        let height = 16 * rng.gen_range(1..=10usize);
        let plane = to_f32(&noise_u8(width, height, case).as_view());
        let edges = EdgePyramid::build(&plane.as_view(), 3).expect("divisible by 8");

        for level in 0..3 {
            let map = edges.map(level).expect("level exists");
            assert_eq!(map.width(), width >> (level + 1));
            assert_eq!(map.height(), height >> (level + 1));
        }
        let area = |i: usize| {
            let map = edges.map(i).expect("level exists");
            map.width() * map.height()
        };
        assert_eq!(area(2) * 16, area(0));
    }
}

#[test]
fn scores_are_invariant_under_joint_intensity_and_threshold_scaling() {
    let scenes = [
        noise_u8(128, 96, 21),
        smoothed_step_u8(128, 96, 45, 4.0),
    ];
    for scene in &scenes {
        let base = detect_blur(&scene.as_view(), 35.0).expect("has edges");
        let scaled = scaled_u16(scene, 4);
        let rescaled = detect_blur(&scaled.as_view(), 140.0).expect("has edges");
        assert_eq!(base, rescaled);
    }
}

#[test]
fn repeated_runs_are_bit_identical() {
    let img = noise_u8(160, 112, 99);
    let first = tile_maxima(&img.as_view()).expect("aligned");
    let second = tile_maxima(&img.as_view()).expect("aligned");

    let bits = |m: &TileMaxima| -> Vec<u32> {
        m.emax1
            .iter()
            .chain(&m.emax2)
            .chain(&m.emax3)
            .map(|v| v.to_bits())
            .collect()
    };
    assert_eq!(bits(&first), bits(&second));

    let cfg = BlurConfig::default();
    assert_eq!(
        analyze(&img.as_view(), &cfg).expect("has edges"),
        analyze(&img.as_view(), &cfg).expect("has edges")
    );
}

#[test]
fn blur_confidence_can_exceed_one() {
    // Two Roof/Gstep tiles and one Roof-peak tile, all weak at the finest
    // scale: three probable-blur tiles over a single peak.
    let maxima = TileMaxima {
        emax1: vec![10.0, 12.0, 10.0],
        emax2: vec![20.0, 25.0, 50.0],
        emax3: vec![40.0, 45.0, 40.0],
    };
    let counts = count_structures(&classify_tiles(&maxima, 35.0));
    assert_eq!(counts.roof_gstep, 2);
    assert_eq!(counts.roof_peak, 1);
    assert_eq!(counts.probable_blur, 3);

    let scores = aggregate(&counts).expect("has edges");
    assert_eq!(scores.blur_confidence, 3.0);
    assert_eq!(scores.dirac_astep_ratio, 0.0);
}

#[test]
fn cropping_ignores_the_remainder_strip() {
    let base = noise_u8(96, 64, 8);
    let mut padded = Image::new_fill(96 + 13, 64 + 9, 255u8);
    for y in 0..64 {
        let dst = y * padded.width();
        padded.data_mut()[dst..dst + 96].copy_from_slice(base.as_view().row(y));
    }

    assert_eq!(
        tile_maxima(&base.as_view()).expect("aligned"),
        tile_maxima(&padded.as_view()).expect("aligned")
    );
}
