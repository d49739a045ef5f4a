use std::path::Path;

use crate::foundation::color::ColorDef;
use crate::foundation::error::FloorplotResult;
use crate::input::records::{RectangleRecord, parse_records, read_records};
use crate::render::palette::ColorSource;
use crate::render::sink::{AspectMode, DrawRect, RenderSink};

/// Outcome of a completed render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderSummary {
    /// Rectangles handed to the sink.
    pub rectangles: usize,
}

/// Read the dump at `path` and render it onto `sink`.
///
/// The whole file is parsed before the first draw call, so a malformed numeric field leaves
/// the sink untouched.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn render(
    path: impl AsRef<Path>,
    sink: &mut dyn RenderSink,
    colors: &mut dyn ColorSource,
) -> FloorplotResult<RenderSummary> {
    let records = read_records(path)?;
    render_records(&records, sink, colors)
}

/// Same as [`render`], over in-memory text.
pub fn render_str(
    text: &str,
    sink: &mut dyn RenderSink,
    colors: &mut dyn ColorSource,
) -> FloorplotResult<RenderSummary> {
    let records = parse_records(text)?;
    render_records(&records, sink, colors)
}

/// Draw `records` in order with a fresh fill each and a black outline, then switch the sink to
/// scaled aspect and present it.
pub fn render_records(
    records: &[RectangleRecord],
    sink: &mut dyn RenderSink,
    colors: &mut dyn ColorSource,
) -> FloorplotResult<RenderSummary> {
    for rec in records {
        let cmd = DrawRect {
            rect: rec.rect(),
            fill: colors.next_fill(),
            edge: ColorDef::BLACK,
        };
        sink.draw_rectangle(&cmd)?;
    }
    sink.set_aspect(AspectMode::Scaled)?;
    sink.present()?;

    tracing::debug!(rectangles = records.len(), "presented plot");
    Ok(RenderSummary {
        rectangles: records.len(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
