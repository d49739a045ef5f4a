use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::color::ColorDef;
use crate::foundation::core::{Canvas, MAX_CANVAS_PX};
use crate::foundation::error::{FloorplotError, FloorplotResult};

/// Presentation settings shared by every sink.
///
/// Loaded from JSON; every field is optional:
///
/// ```json
/// { "width": 1024, "height": 768, "background": "#ffffff", "edge_width_px": 2, "seed": 7 }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotSettings {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Padding around the data bounds, as a fraction of the extent per side.
    pub margin: f64,
    pub background: ColorDef,
    /// Outline thickness in pixels; outlines keep this width at any zoom.
    pub edge_width_px: f64,
    /// Fixes the fill colors when set.
    pub seed: Option<u64>,
    /// Window title for interactive display.
    pub title: String,
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            margin: 0.05,
            background: ColorDef::WHITE,
            edge_width_px: 1.0,
            seed: None,
            title: "floorplot".to_owned(),
        }
    }
}

impl PlotSettings {
    pub fn from_reader<R: std::io::Read>(r: R) -> FloorplotResult<Self> {
        let settings: Self = serde_json::from_reader(r)
            .map_err(|e| FloorplotError::serde(format!("parse settings JSON: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_path(path: impl AsRef<Path>) -> FloorplotResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| FloorplotError::io(path, e))?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    pub fn validate(&self) -> FloorplotResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(FloorplotError::validation("width/height must be > 0"));
        }
        if self.width > MAX_CANVAS_PX || self.height > MAX_CANVAS_PX {
            return Err(FloorplotError::validation(format!(
                "width/height must be <= {MAX_CANVAS_PX}"
            )));
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(FloorplotError::validation("margin must be finite and >= 0"));
        }
        if !self.edge_width_px.is_finite() || self.edge_width_px < 0.0 {
            return Err(FloorplotError::validation(
                "edge_width_px must be finite and >= 0",
            ));
        }
        let bg = self.background;
        if [bg.r, bg.g, bg.b, bg.a].iter().any(|v| !v.is_finite()) {
            return Err(FloorplotError::validation(
                "background color channels must be finite",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/settings.rs"]
mod tests;
