//! circle-progress-render: ring geometry, gradients and Cairo rendering.
//!
//! The core (geometry, gradient, dispatcher, label, progress) is pure and
//! produces a [`DrawList`] per frame. `cairo_backend` and `pango_text`
//! execute draw lists on a Cairo context.

pub mod cairo_backend;
pub mod commands;
pub mod dispatcher;
pub mod geometry;
pub mod gradient;
pub mod host;
pub mod label;
pub mod pango_text;
pub mod progress;

pub use cairo_backend::render_draw_list;
pub use commands::{DrawCommand, DrawList, FrameRotation, Paint, TextCommand};
pub use geometry::{DrawingFrame, Layer, Point, Rect};
pub use gradient::{GradientDescriptor, GradientKind, TrackShader, TrackShaders};
pub use host::{draw_on_host, flush_redraw_request, ProgressHost};
pub use label::{DefaultProgressFormatter, ProgressFormatter};
pub use progress::CircleProgress;
