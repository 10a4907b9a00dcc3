//! Shape rendering
//!
//! A shape is first generated as a [`Pta`] of the pixels it covers, then
//! stamped onto a [`PixMut`]. Points that land outside the image are
//! dropped, so shapes may straddle the border.

use super::{PixMut, PixelDepth};
use crate::error::Result;
use crate::pta::Pta;

/// Drawing colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::gray(0);
    pub const WHITE: Color = Color::gray(255);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// All three channels set to `v`.
    pub const fn gray(v: u8) -> Self {
        Self::new(v, v, v)
    }

    /// Unweighted channel average, used when drawing on 8 bpp images.
    pub fn to_gray(&self) -> u8 {
        ((u16::from(self.r) + u16::from(self.g) + u16::from(self.b)) / 3) as u8
    }

    /// Packed `0xRRGGBBAA` value with opaque alpha.
    pub fn to_pixel32(&self) -> u32 {
        crate::color::compose_rgb(self.r, self.g, self.b)
    }
}

/// Pixels of a filled disc of the given radius.
///
/// The disc sits in a `(2r + 1)`-pixel square with its centre at
/// `(r, r)`; a pixel belongs to it when its squared distance from the
/// centre is at most `(r + 0.5)^2`.
pub fn generate_filled_circle_pta(radius: u32) -> Pta {
    let r = radius as i32;
    let limit = (radius as f32 + 0.5).powi(2);
    let side = (2 * radius + 1) as usize;
    let mut pta = Pta::with_capacity(side * side);

    for y in -r..=r {
        for x in -r..=r {
            if ((x * x + y * y) as f32) <= limit {
                pta.push((x + r) as f32, (y + r) as f32);
            }
        }
    }
    pta
}

impl PixMut {
    /// Paint every point of `pta` that falls inside the image.
    ///
    /// On 8 bpp images the colour is reduced with [`Color::to_gray`].
    pub fn render_pta_color(&mut self, pta: &Pta, color: Color) -> Result<()> {
        let (w, h) = (self.width() as i32, self.height() as i32);
        let val = match self.depth() {
            PixelDepth::Bit8 => u32::from(color.to_gray()),
            PixelDepth::Bit32 => color.to_pixel32(),
        };

        for (x, y) in pta.iter() {
            let (xi, yi) = (x as i32, y as i32);
            if (0..w).contains(&xi) && (0..h).contains(&yi) {
                self.set_pixel_unchecked(xi as u32, yi as u32, val);
            }
        }
        Ok(())
    }

    /// Paint a filled disc centred at `(cx, cy)`.
    pub fn render_filled_circle_color(
        &mut self,
        cx: i32,
        cy: i32,
        radius: u32,
        color: Color,
    ) -> Result<()> {
        let r = radius as i32;
        let pta = generate_filled_circle_pta(radius).translate((cx - r) as f32, (cy - r) as f32);
        self.render_pta_color(&pta, color)
    }
}
