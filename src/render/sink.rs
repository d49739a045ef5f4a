use crate::foundation::color::ColorDef;
use crate::foundation::core::Rect;
use crate::foundation::error::FloorplotResult;

/// One filled, outlined rectangle in data space (lower-left at `rect.x0, rect.y0`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawRect {
    pub rect: Rect,
    pub fill: ColorDef,
    pub edge: ColorDef,
}

/// How data units map onto the two pixel axes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectMode {
    /// One data unit spans the same number of pixels on both axes.
    #[default]
    Scaled,
    /// Each axis stretches independently to fill the canvas.
    Auto,
}

/// Drawing surface contract.
///
/// Ordering contract: `draw_rectangle` calls arrive in paint order (later calls cover earlier
/// ones), followed by at most one `set_aspect` and then `present`.
pub trait RenderSink {
    /// Queue or paint one rectangle.
    fn draw_rectangle(&mut self, rect: &DrawRect) -> FloorplotResult<()>;
    /// Choose the axis scaling used when the surface is presented.
    fn set_aspect(&mut self, aspect: AspectMode) -> FloorplotResult<()>;
    /// Show or write the finished surface. Interactive sinks block until dismissed.
    fn present(&mut self) -> FloorplotResult<()>;
}

/// A single observed sink call.
#[derive(Clone, Debug, PartialEq)]
pub enum SinkCall {
    Draw(DrawRect),
    SetAspect(AspectMode),
    Present,
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct RecordingSink {
    calls: Vec<SinkCall>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call, in arrival order.
    pub fn calls(&self) -> &[SinkCall] {
        &self.calls
    }

    /// Only the draw calls, in paint order.
    pub fn draws(&self) -> Vec<DrawRect> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                SinkCall::Draw(d) => Some(*d),
                _ => None,
            })
            .collect()
    }

    pub fn presented(&self) -> bool {
        self.calls.iter().any(|c| matches!(c, SinkCall::Present))
    }
}

impl RenderSink for RecordingSink {
    fn draw_rectangle(&mut self, rect: &DrawRect) -> FloorplotResult<()> {
        self.calls.push(SinkCall::Draw(*rect));
        Ok(())
    }

    fn set_aspect(&mut self, aspect: AspectMode) -> FloorplotResult<()> {
        self.calls.push(SinkCall::SetAspect(aspect));
        Ok(())
    }

    fn present(&mut self) -> FloorplotResult<()> {
        self.calls.push(SinkCall::Present);
        Ok(())
    }
}

/// Draw list shared by the sinks that render everything at `present` time.
#[derive(Clone, Debug, Default)]
pub(crate) struct Scene {
    pub(crate) draws: Vec<DrawRect>,
    pub(crate) aspect: AspectMode,
}

impl Scene {
    pub(crate) fn push(&mut self, rect: &DrawRect) {
        self.draws.push(*rect);
    }
}
