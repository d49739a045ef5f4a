//! floorplot renders the rectangle dumps written by floorplanning runs.
//!
//! Input is a plain text file with one block per line:
//!
//! ```text
//! <name> <width> <height> <x> <y>
//! ```
//!
//! Lines that do not split on single spaces into exactly five tokens are ignored. Every
//! accepted block is drawn as a randomly colored, black-outlined rectangle with its lower-left
//! corner at `(x, y)`, in file order, on a canvas scaled so both axes share one unit length.
//!
//! # Pipeline overview
//!
//! 1. **Parse**: `text -> Vec<RectangleRecord>` ([`parse_records`], [`read_records`])
//! 2. **Draw**: each record becomes a [`DrawRect`] pushed to a [`RenderSink`]
//! 3. **Present**: the sink is switched to [`AspectMode::Scaled`] and presented
//!
//! Sinks: [`RecordingSink`] (headless), [`RasterSink`] (CPU raster via `vello_cpu`, PNG),
//! [`SvgSink`] (vector), and `WindowSink` behind the `window` feature.
//!
//! ```no_run
//! use floorplot::{PlotSettings, RandomPalette, RasterSink};
//!
//! let mut sink = RasterSink::new(PlotSettings::default()).with_png_output("plot.png");
//! let mut colors = RandomPalette::seeded(7);
//! floorplot::render("plot_data.txt", &mut sink, &mut colors)?;
//! # Ok::<(), floorplot::FloorplotError>(())
//! ```
#![forbid(unsafe_code)]

mod foundation;
mod input;
mod render;

pub use foundation::color::ColorDef;
pub use foundation::core::{Canvas, MAX_CANVAS_PX, Point, Rect, Rgba8, Vec2};
pub use foundation::error::{FloorplotError, FloorplotResult};
pub use input::records::{
    DEFAULT_INPUT, RECORD_TOKENS, RectangleRecord, parse_line, parse_records, read_records,
    read_records_from,
};
pub use render::cpu::{FrameRGBA, RasterSink, rasterize};
pub use render::palette::{ColorSource, FixedPalette, RandomPalette};
pub use render::pipeline::{RenderSummary, render, render_records, render_str};
pub use render::settings::PlotSettings;
pub use render::sink::{AspectMode, DrawRect, RecordingSink, RenderSink, SinkCall};
pub use render::svg::{SvgSink, to_svg};
pub use render::view::{ViewTransform, data_bounds};
#[cfg(feature = "window")]
pub use render::window::WindowSink;
