//! Drawing primitives produced by one render
//!
//! A `DrawList` is backend-neutral: the Cairo backend executes it, tests
//! inspect it directly.

use circle_progress_types::{Color, PaintStyle, StrokeCap};

use crate::geometry::{Layer, Point, Rect};
use crate::gradient::TrackShader;

/// How a primitive is filled or stroked
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub shader: TrackShader,
    pub style: PaintStyle,
    pub stroke_width: f64,
    pub cap: StrokeCap,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Line {
        start: Point,
        end: Point,
        layer: Layer,
        paint: Paint,
    },
    /// Arc inscribed in `oval`, angles in degrees, clockwise on screen.
    /// With `use_center` the arc closes through the center as a pie wedge.
    Arc {
        oval: Rect,
        start_degrees: f64,
        sweep_degrees: f64,
        use_center: bool,
        layer: Layer,
        paint: Paint,
    },
}

impl DrawCommand {
    pub fn layer(&self) -> Layer {
        match self {
            DrawCommand::Line { layer, .. } | DrawCommand::Arc { layer, .. } => *layer,
        }
    }

    pub fn paint(&self) -> &Paint {
        match self {
            DrawCommand::Line { paint, .. } | DrawCommand::Arc { paint, .. } => paint,
        }
    }
}

/// Rotation of the ring about its center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRotation {
    pub degrees: f64,
    pub pivot: Point,
}

/// Label drawn centered on `center` in the unrotated frame
#[derive(Debug, Clone, PartialEq)]
pub struct TextCommand {
    pub text: String,
    pub center: Point,
    pub size: f64,
    pub color: Color,
}

/// Everything one render draws, in order: the ring commands inside the
/// rotated frame, then the label outside it
#[derive(Debug, Clone, PartialEq)]
pub struct DrawList {
    pub rotation: FrameRotation,
    pub ring: Vec<DrawCommand>,
    pub label: Option<TextCommand>,
}

impl DrawList {
    pub fn commands_in(&self, layer: Layer) -> impl Iterator<Item = &DrawCommand> {
        self.ring.iter().filter(move |c| c.layer() == layer)
    }
}
