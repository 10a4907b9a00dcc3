//! Region growing regression test
//!
//! Checks the grower on a 10x10 image with a bright 3x3 block, then
//! exercises its structural properties on random images:
//!
//! - repeated runs give identical masks
//! - a larger threshold never selects fewer pixels
//! - every in-bounds seed is selected
//! - 4-way growth is contained in 8-way growth
//! - seeds far outside the image never cause a panic

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use segkit_core::{Pix, PixelDepth};
use segkit_region::{
    ConnectivityType, RegionError, RegionGrowOptions, region_grow, region_grow_detailed,
    region_grow_with_options,
};
use segkit_test::RegParams;

const BOTH: [ConnectivityType; 2] = [ConnectivityType::FourWay, ConnectivityType::EightWay];

/// 10x10 background of 50 with a 3x3 block of 200 at rows/cols 2..=4
fn make_block_image() -> Pix {
    let mut pm = Pix::new(10, 10, PixelDepth::Bit8).unwrap().to_mut();
    pm.set_all_arbitrary(50);
    pm.set_in_rect_arbitrary(2, 2, 3, 3, 200);
    pm.into()
}

fn make_random_8bpp(rng: &mut StdRng, w: u32, h: u32) -> Pix {
    let bytes: Vec<u8> = (0..w * h).map(|_| rng.random::<u8>()).collect();
    Pix::from_gray_bytes(w, h, &bytes).unwrap()
}

/// Smoothly varying image so that regions grow beyond a single pixel
fn make_random_smooth_8bpp(rng: &mut StdRng, w: u32, h: u32) -> Pix {
    let mut pm = Pix::new(w, h, PixelDepth::Bit8).unwrap().to_mut();
    let (fx, fy) = (rng.random_range(1..6u32), rng.random_range(1..6u32));
    for y in 0..h {
        for x in 0..w {
            let base = (x * fx + y * fy) % 256;
            let jitter = rng.random_range(0..8u32);
            pm.set_pixel_unchecked(x, y, (base + jitter).min(255));
        }
    }
    pm.into()
}

fn is_subset(a: &Pix, b: &Pix) -> bool {
    (0..a.height()).all(|y| {
        (0..a.width()).all(|x| a.get_pixel_unchecked(x, y) == 0 || b.get_pixel_unchecked(x, y) != 0)
    })
}

fn masks_equal(a: &Pix, b: &Pix) -> bool {
    a.sizes_equal(b)
        && (0..a.height())
            .all(|y| (0..a.width()).all(|x| a.get_pixel_unchecked(x, y) == b.get_pixel_unchecked(x, y)))
}

#[test]
fn region_grow_reg() {
    let mut rp = RegParams::new("region_grow");
    let pix = make_block_image();

    for connectivity in BOTH {
        // Seed inside the block: exactly the 9 block cells
        let mask = region_grow(&pix, &[(3, 3)], 10, connectivity).unwrap();
        rp.compare_values(9.0, mask.count_pixels_with_value(255) as f64, 0.0);
        for row in 2..=4 {
            for col in 2..=4 {
                assert_eq!(mask.get_pixel(col, row), Some(255), "block cell ({row}, {col})");
            }
        }

        // Seed in the corner: the 91 background cells
        let mask = region_grow(&pix, &[(0, 0)], 10, connectivity).unwrap();
        rp.compare_values(91.0, mask.count_pixels_with_value(255) as f64, 0.0);
        rp.compare_values(0.0, mask.get_pixel(3, 3).unwrap() as f64, 0.0);
        rp.compare_values(9.0, mask.count_pixels_with_value(0) as f64, 0.0);

        if rp.display() {
            rp.write_pix_and_check(&mask, segkit_io::ImageFormat::Png)
                .unwrap();
        }
    }

    // Both regions from one call: the mean (125) is 75 from either value
    let g = region_grow_detailed(&pix, &[(0, 0), (3, 3)], 75, ConnectivityType::EightWay).unwrap();
    rp.compare_values(125.0, g.seed_mean.unwrap(), 0.0);
    rp.compare_values(100.0, g.selected_count as f64, 0.0);

    // One below the deviation: only the two seeds
    let g = region_grow_detailed(&pix, &[(0, 0), (3, 3)], 74, ConnectivityType::EightWay).unwrap();
    rp.compare_values(2.0, g.selected_count as f64, 0.0);

    assert!(rp.cleanup(), "region_grow regression test failed");
}

#[test]
fn test_empty_seeds_rejected() {
    let pix = make_block_image();
    for connectivity in BOTH {
        assert!(matches!(
            region_grow(&pix, &[], 10, connectivity),
            Err(RegionError::NoSeeds)
        ));
    }
}

#[test]
fn test_connectivity_six_rejected() {
    assert!(matches!(
        ConnectivityType::try_from(6),
        Err(RegionError::InvalidConnectivity(6))
    ));
}

#[test]
fn test_only_out_of_bounds_seeds() {
    let pix = make_block_image();
    let seeds = [(-1, 0), (0, -1), (10, 0), (0, 10), (i32::MIN, i32::MAX)];
    let g = region_grow_detailed(&pix, &seeds, 255, ConnectivityType::EightWay).unwrap();
    assert_eq!(g.mask.width(), 10);
    assert_eq!(g.mask.height(), 10);
    assert_eq!(g.mask.count_nonzero(), 0);
    assert!(g.seed_mean.is_none());
}

#[test]
fn test_mixed_seeds_use_in_bounds_mean() {
    // The out-of-bounds seed must not pull the mean toward zero
    let pix = make_block_image();
    let g = region_grow_detailed(&pix, &[(3, 3), (-5, 40)], 0, ConnectivityType::FourWay).unwrap();
    assert_eq!(g.seed_mean, Some(200.0));
    assert_eq!(g.seeds_in_bounds, 1);
    assert_eq!(g.selected_count, 9);
}

#[test]
fn test_options_match_positional() {
    let pix = make_block_image();
    let opts = RegionGrowOptions::new(10).with_connectivity(ConnectivityType::FourWay);
    let a = region_grow_with_options(&pix, &[(0, 0)], &opts).unwrap();
    let b = region_grow(&pix, &[(0, 0)], 10, ConnectivityType::FourWay).unwrap();
    assert!(masks_equal(&a, &b));
}

#[test]
fn test_determinism() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..10 {
        let pix = make_random_smooth_8bpp(&mut rng, 24, 17);
        let seeds = [(rng.random_range(0..17), rng.random_range(0..24))];
        let threshold = rng.random_range(0..40);
        for connectivity in BOTH {
            let a = region_grow(&pix, &seeds, threshold, connectivity).unwrap();
            let b = region_grow(&pix, &seeds, threshold, connectivity).unwrap();
            assert!(masks_equal(&a, &b));
        }
    }
}

#[test]
fn test_threshold_monotonic() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..10 {
        let pix = make_random_smooth_8bpp(&mut rng, 20, 20);
        let seeds = [(rng.random_range(0..20), rng.random_range(0..20))];
        for connectivity in BOTH {
            let mut prev = region_grow(&pix, &seeds, 0, connectivity).unwrap();
            for threshold in [2, 5, 10, 20, 60, 255] {
                let next = region_grow(&pix, &seeds, threshold, connectivity).unwrap();
                assert!(is_subset(&prev, &next), "threshold {threshold} shrank the region");
                prev = next;
            }
            // At 255 every pixel qualifies
            assert_eq!(prev.count_nonzero(), 400);
        }
    }
}

#[test]
fn test_seed_inclusion() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..20 {
        let pix = make_random_8bpp(&mut rng, 15, 11);
        let seeds: Vec<(i32, i32)> = (0..rng.random_range(1..6))
            .map(|_| (rng.random_range(-3..14), rng.random_range(-3..18)))
            .collect();
        let threshold = rng.random_range(0..30);
        for connectivity in BOTH {
            let mask = region_grow(&pix, &seeds, threshold, connectivity).unwrap();
            for &(row, col) in &seeds {
                if (0..11).contains(&row) && (0..15).contains(&col) {
                    assert_eq!(mask.get_pixel(col as u32, row as u32), Some(255));
                }
            }
        }
    }
}

#[test]
fn test_four_way_within_eight_way() {
    let mut rng = StdRng::seed_from_u64(1234);
    for _ in 0..20 {
        let pix = if rng.random_bool(0.5) {
            make_random_8bpp(&mut rng, 16, 16)
        } else {
            make_random_smooth_8bpp(&mut rng, 16, 16)
        };
        let seeds = [
            (rng.random_range(0..16), rng.random_range(0..16)),
            (rng.random_range(0..16), rng.random_range(0..16)),
        ];
        let threshold = rng.random_range(0..80);
        let four = region_grow(&pix, &seeds, threshold, ConnectivityType::FourWay).unwrap();
        let eight = region_grow(&pix, &seeds, threshold, ConnectivityType::EightWay).unwrap();
        assert!(is_subset(&four, &eight));
    }
}

#[test]
fn test_bounds_safety() {
    let mut rng = StdRng::seed_from_u64(5);
    for (w, h) in [(1, 1), (1, 7), (7, 1), (3, 2)] {
        let pix = make_random_8bpp(&mut rng, w, h);
        let seeds = [
            (0, 0),
            (h as i32 - 1, w as i32 - 1),
            (-1, -1),
            (h as i32, w as i32),
            (i32::MAX, i32::MIN),
        ];
        for connectivity in BOTH {
            let mask = region_grow(&pix, &seeds, 255, connectivity).unwrap();
            assert_eq!(mask.width(), w);
            assert_eq!(mask.height(), h);
            assert_eq!(mask.count_nonzero(), (w * h) as u64);
        }
    }
}
