use crate::foundation::core::Rgba8;
use serde::{Deserialize, Serialize};

/// Normalized straight-alpha color, each channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorDef {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl ColorDef {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    pub fn to_rgba8(self) -> Rgba8 {
        fn to_u8(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }

        Rgba8 {
            r: to_u8(self.r),
            g: to_u8(self.g),
            b: to_u8(self.b),
            a: to_u8(self.a),
        }
    }
}

impl<'de> Deserialize<'de> for ColorDef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            RgbaObj {
                r: f64,
                g: f64,
                b: f64,
                #[serde(default = "one")]
                a: f64,
            },
            Arr(Vec<f64>),
        }

        fn one() -> f64 {
            1.0
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::RgbaObj { r, g, b, a } => Ok(Self::rgba(r, g, b, a)),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(Self::rgb(*r, *g, *b)),
                [r, g, b, a] => Ok(Self::rgba(*r, *g, *b, *a)),
                _ => Err(serde::de::Error::custom(
                    "rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

fn parse_hex(s: &str) -> Result<ColorDef, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);
    if !s.is_ascii() {
        return Err(format!("invalid hex color \"{s}\""));
    }

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    let (r, g, b, a) = match s.len() {
        6 => (
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            255,
        ),
        8 => (
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            hex_byte(&s[6..8])?,
        ),
        _ => {
            return Err("hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned());
        }
    };

    Ok(ColorDef::rgba(
        f64::from(r) / 255.0,
        f64::from(g) / 255.0,
        f64::from(b) / 255.0,
        f64::from(a) / 255.0,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
