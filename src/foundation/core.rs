use crate::foundation::error::{FloorplotError, FloorplotResult};

pub use kurbo::{Point, Rect, Vec2};

/// Largest pixel extent accepted per side; the rasterizer addresses pixels with `u16`.
pub const MAX_CANVAS_PX: u32 = 16_384;

/// Output canvas size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> FloorplotResult<Self> {
        let c = Self { width, height };
        c.validate()?;
        Ok(c)
    }

    pub fn validate(self) -> FloorplotResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(FloorplotError::validation("canvas width/height must be > 0"));
        }
        if self.width > MAX_CANVAS_PX || self.height > MAX_CANVAS_PX {
            return Err(FloorplotError::validation(format!(
                "canvas width/height must be <= {MAX_CANVAS_PX}"
            )));
        }
        Ok(())
    }

    pub fn pixel_count(self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }

    /// Full-canvas rectangle in pixel space.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

/// Straight (non-premultiplied) RGBA8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BLACK: Self = Self::opaque(0, 0, 0);
    pub const WHITE: Self = Self::opaque(255, 255, 255);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// `#rrggbb` form, alpha dropped.
    pub fn to_hex_rgb(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Undo premultiplication of one RGBA8 pixel in place.
pub(crate) fn unpremultiply_px(px: &mut [u8; 4]) {
    let a = u16::from(px[3]);
    if a == 0 || a == 255 {
        return;
    }
    for c in &mut px[..3] {
        *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
