use std::path::{Path, PathBuf};

use crate::foundation::color::ColorDef;
use crate::foundation::core::{Rect, unpremultiply_px};
use crate::foundation::error::{FloorplotError, FloorplotResult};
use crate::render::settings::PlotSettings;
use crate::render::sink::{AspectMode, DrawRect, RenderSink, Scene};
use crate::render::view::{ViewTransform, data_bounds, edge_bands};

/// A rasterized plot as RGBA8 pixels.
///
/// Pixels come out of the rasterizer premultiplied; `premultiplied` makes that explicit at API
/// boundaries.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major, top row first.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Pixel at `(x, y)` as stored, `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Straight-alpha copy of the pixel data.
    pub fn to_straight_rgba(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        if self.premultiplied {
            let (pixels, _) = out.as_chunks_mut::<4>();
            for px in pixels {
                unpremultiply_px(px);
            }
        }
        out
    }

    /// Encode as PNG, creating parent directories as needed.
    pub fn save_png(&self, path: impl AsRef<Path>) -> FloorplotResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| FloorplotError::io(parent, e))?;
        }
        image::save_buffer_with_format(
            path,
            &self.to_straight_rgba(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| FloorplotError::render(format!("write png '{}': {e}", path.display())))?;
        tracing::info!(path = %path.display(), "wrote png");
        Ok(())
    }
}

/// Rasterize `draws` in order onto a canvas cleared to the background color.
///
/// Each rectangle is filled, then outlined, before the next one is painted.
#[tracing::instrument(skip(draws, settings), fields(rects = draws.len()))]
pub fn rasterize(
    draws: &[DrawRect],
    aspect: AspectMode,
    settings: &PlotSettings,
) -> FloorplotResult<FrameRGBA> {
    settings.validate()?;
    let canvas = settings.canvas();
    let width = u16::try_from(canvas.width)
        .map_err(|_| FloorplotError::validation("canvas width does not fit in u16"))?;
    let height = u16::try_from(canvas.height)
        .map_err(|_| FloorplotError::validation("canvas height does not fit in u16"))?;

    let view = ViewTransform::fit(data_bounds(draws), canvas, settings.margin, aspect)?;

    let mut ctx = vello_cpu::RenderContext::new(width, height);
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(color_to_cpu(settings.background));
    ctx.fill_rect(&rect_to_cpu(canvas.rect()));

    let mut painted = 0usize;
    for d in draws {
        if !d.rect.is_finite() {
            continue;
        }
        let px = view.map_rect(d.rect);
        ctx.set_paint(color_to_cpu(d.fill));
        ctx.fill_rect(&rect_to_cpu(px));

        ctx.set_paint(color_to_cpu(d.edge));
        for band in edge_bands(px, settings.edge_width_px) {
            ctx.fill_rect(&rect_to_cpu(band));
        }
        painted += 1;
    }

    ctx.flush();
    let mut pixmap = vello_cpu::Pixmap::new(width, height);
    ctx.render_to_pixmap(&mut pixmap);
    tracing::debug!(painted, width, height, "rasterized plot");

    Ok(FrameRGBA {
        width: canvas.width,
        height: canvas.height,
        data: pixmap.data_as_u8_slice().to_vec(),
        premultiplied: true,
    })
}

/// Sink that rasterizes on `present`, optionally writing the frame as PNG.
#[derive(Debug)]
pub struct RasterSink {
    settings: PlotSettings,
    scene: Scene,
    png_out: Option<PathBuf>,
    frame: Option<FrameRGBA>,
}

impl RasterSink {
    pub fn new(settings: PlotSettings) -> Self {
        Self {
            settings,
            scene: Scene::default(),
            png_out: None,
            frame: None,
        }
    }

    /// Also write the presented frame to `path`.
    pub fn with_png_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.png_out = Some(path.into());
        self
    }

    /// Frame produced by the last `present`.
    pub fn frame(&self) -> Option<&FrameRGBA> {
        self.frame.as_ref()
    }

    pub fn into_frame(self) -> Option<FrameRGBA> {
        self.frame
    }
}

impl RenderSink for RasterSink {
    fn draw_rectangle(&mut self, rect: &DrawRect) -> FloorplotResult<()> {
        self.scene.push(rect);
        Ok(())
    }

    fn set_aspect(&mut self, aspect: AspectMode) -> FloorplotResult<()> {
        self.scene.aspect = aspect;
        Ok(())
    }

    fn present(&mut self) -> FloorplotResult<()> {
        let frame = rasterize(&self.scene.draws, self.scene.aspect, &self.settings)?;
        if let Some(out) = &self.png_out {
            frame.save_png(out)?;
        }
        self.frame = Some(frame);
        Ok(())
    }
}

fn color_to_cpu(c: ColorDef) -> vello_cpu::peniko::Color {
    let c = c.to_rgba8();
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
