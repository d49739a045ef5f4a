//! Turning parsed records into pictures.
//!
//! Everything funnels through the [`sink::RenderSink`] contract; concrete sinks decide whether
//! a plot ends up in memory, in a PNG/SVG file or in a window.

pub(crate) mod cpu;
pub(crate) mod palette;
pub(crate) mod pipeline;
pub(crate) mod settings;
pub(crate) mod sink;
pub(crate) mod svg;
pub(crate) mod view;
#[cfg(feature = "window")]
pub(crate) mod window;
