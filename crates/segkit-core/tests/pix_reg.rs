//! Pix regression test
//!
//! Exercises the container end to end: packing of 8 bpp rows whose width
//! is not a multiple of four, gray/RGB conversion, histograms, masks and
//! disc rendering.

use segkit_core::{Color, Pix, PixelDepth, color};
use segkit_test::RegParams;

#[test]
fn pix_reg() {
    let mut rp = RegParams::new("pix");

    // Odd widths pack into partial words
    for w in [1u32, 3, 5, 7, 9] {
        let bytes: Vec<u8> = (0..w * 2).map(|i| (i * 17 % 256) as u8).collect();
        let pix = Pix::from_gray_bytes(w, 2, &bytes).unwrap();
        rp.compare_values(w.div_ceil(4) as f64, pix.wpl() as f64, 0.0);
        for (i, &b) in bytes.iter().enumerate() {
            let (x, y) = (i as u32 % w, i as u32 / w);
            rp.compare_values(b as f64, pix.get_pixel(x, y).unwrap() as f64, 0.0);
        }
    }

    // Gray -> RGB -> gray is lossless
    let gray = Pix::from_gray_bytes(4, 1, &[0, 60, 140, 255]).unwrap();
    let rgb = gray.convert_to_rgb().unwrap();
    rp.compare_values(32.0, rgb.depth().bits() as f64, 0.0);
    let back = rgb.convert_to_gray().unwrap();
    rp.compare_pix(&gray, &back);

    // Histogram of a two-level image
    let mut pm = Pix::new(10, 10, PixelDepth::Bit8).unwrap().to_mut();
    pm.set_all_arbitrary(50);
    pm.set_in_rect_arbitrary(2, 2, 3, 3, 200);
    let block: Pix = pm.into();
    let hist = block.gray_histogram(1).unwrap();
    rp.compare_values(91.0, hist.get(50).unwrap() as f64, 0.0);
    rp.compare_values(9.0, hist.get(200).unwrap() as f64, 0.0);
    rp.compare_values(100.0, hist.sum(), 0.0);

    // Masked paint onto an RGB copy
    let mut mm = Pix::new(10, 10, PixelDepth::Bit8).unwrap().to_mut();
    mm.set_in_rect_arbitrary(2, 2, 3, 3, 255);
    let mask: Pix = mm.into();
    let mut out = block.convert_to_rgb().unwrap().to_mut();
    out.set_masked(&mask, Color::RED.to_pixel32()).unwrap();
    let out: Pix = out.into();
    rp.compare_values(
        color::compose_rgb(255, 0, 0) as f64,
        out.get_pixel(3, 3).unwrap() as f64,
        0.0,
    );
    rp.compare_values(
        color::compose_rgb(50, 50, 50) as f64,
        out.get_pixel(0, 0).unwrap() as f64,
        0.0,
    );

    // A disc of radius 3 covers 37 pixels
    let mut pm = Pix::new(9, 9, PixelDepth::Bit8).unwrap().to_mut();
    pm.render_filled_circle_color(4, 4, 3, Color::WHITE).unwrap();
    let disc: Pix = pm.into();
    rp.compare_values(37.0, disc.count_pixels_with_value(255) as f64, 0.0);

    assert!(rp.cleanup(), "pix regression test failed");
}
