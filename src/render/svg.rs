use std::path::{Path, PathBuf};

use crate::foundation::color::ColorDef;
use crate::foundation::error::{FloorplotError, FloorplotResult};
use crate::render::settings::PlotSettings;
use crate::render::sink::{AspectMode, DrawRect, RenderSink, Scene};
use crate::render::view::{ViewTransform, data_bounds};

/// Build a standalone SVG document: background, then one `<rect>` per draw in paint order.
///
/// Coordinates are canvas pixels, so the document matches the raster output.
pub fn to_svg(
    draws: &[DrawRect],
    aspect: AspectMode,
    settings: &PlotSettings,
) -> FloorplotResult<String> {
    let canvas = settings.canvas();
    let view = ViewTransform::fit(data_bounds(draws), canvas, settings.margin, aspect)?;

    let mut out = String::with_capacity(256 + draws.len() * 128);
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = canvas.width,
        h = canvas.height,
    ));
    out.push('\n');
    out.push_str(&format!(
        r#"  <rect x="0" y="0" width="{}" height="{}" {}/>"#,
        canvas.width,
        canvas.height,
        paint_attr("fill", settings.background),
    ));
    out.push('\n');
    for d in draws.iter().filter(|d| d.rect.is_finite()) {
        let px = view.map_rect(d.rect);
        out.push_str(&format!(
            r#"  <rect x="{:.3}" y="{:.3}" width="{:.3}" height="{:.3}" {} {} stroke-width="{}"/>"#,
            px.x0,
            px.y0,
            px.width(),
            px.height(),
            paint_attr("fill", d.fill),
            paint_attr("stroke", d.edge),
            settings.edge_width_px,
        ));
        out.push('\n');
    }
    out.push_str("</svg>\n");
    Ok(out)
}

fn paint_attr(name: &str, c: ColorDef) -> String {
    let rgba = c.to_rgba8();
    if rgba.a == 255 {
        format!(r#"{name}="{}""#, rgba.to_hex_rgb())
    } else {
        format!(
            r#"{name}="{}" {name}-opacity="{:.3}""#,
            rgba.to_hex_rgb(),
            f64::from(rgba.a) / 255.0
        )
    }
}

/// Sink that writes an SVG document on `present`.
#[derive(Debug)]
pub struct SvgSink {
    settings: PlotSettings,
    scene: Scene,
    out: PathBuf,
}

impl SvgSink {
    pub fn new(settings: PlotSettings, out: impl Into<PathBuf>) -> Self {
        Self {
            settings,
            scene: Scene::default(),
            out: out.into(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.out
    }
}

impl RenderSink for SvgSink {
    fn draw_rectangle(&mut self, rect: &DrawRect) -> FloorplotResult<()> {
        self.scene.push(rect);
        Ok(())
    }

    fn set_aspect(&mut self, aspect: AspectMode) -> FloorplotResult<()> {
        self.scene.aspect = aspect;
        Ok(())
    }

    fn present(&mut self) -> FloorplotResult<()> {
        self.settings.validate()?;
        let doc = to_svg(&self.scene.draws, self.scene.aspect, &self.settings)?;
        if let Some(parent) = self.out.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| FloorplotError::io(parent, e))?;
        }
        std::fs::write(&self.out, doc).map_err(|e| FloorplotError::io(&self.out, e))?;
        tracing::info!(path = %self.out.display(), rects = self.scene.draws.len(), "wrote svg");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
