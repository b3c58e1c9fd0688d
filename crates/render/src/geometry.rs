//! Ring geometry: drawing frame, radial line segments and arc sweeps
//!
//! All angles follow the screen convention used by Cairo: 0 is the positive
//! x-axis and positive angles turn clockwise because y grows downward. The
//! start-degree rotation is applied later by the backend, so everything
//! here is computed in the unrotated frame.

use std::f64::consts::PI;

use circle_progress_types::{ConfigError, GeometryConfig, ProgressState};

/// Full turn in degrees
pub const MAX_DEGREE: f64 = 360.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Shrink by `dx` on the left and right and `dy` on the top and bottom
    pub fn inset(&self, dx: f64, dy: f64) -> Rect {
        Rect {
            left: self.left + dx,
            top: self.top + dy,
            right: self.right - dx,
            bottom: self.bottom - dy,
        }
    }
}

/// Geometry derived from the drawing region size
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DrawingFrame {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    /// Square of side `2 * radius` around the center
    pub bounds: Rect,
    /// `bounds` inset by half the stroke width so strokes are not clipped
    pub arc_rect: Rect,
}

impl DrawingFrame {
    pub fn new(width: u32, height: u32, stroke_width: f64) -> Self {
        let center_x = (width / 2) as f64;
        let center_y = (height / 2) as f64;
        let radius = center_x.min(center_y);
        let bounds = Rect {
            left: center_x - radius,
            top: center_y - radius,
            right: center_x + radius,
            bottom: center_y + radius,
        };
        let half_stroke = stroke_width / 2.0;

        Self {
            center_x,
            center_y,
            radius,
            bounds,
            arc_rect: bounds.inset(half_stroke, half_stroke),
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }

    /// Point at `angle` radians and distance `r` from the center, with the
    /// angle measured counter-clockwise as the line routine expects
    fn polar(&self, angle: f64, r: f64) -> Point {
        Point::new(
            self.center_x + angle.cos() * r,
            self.center_y - angle.sin() * r,
        )
    }
}

/// Visual layer a primitive belongs to, in draw order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    Background,
    SecondTrack,
    FirstTrack,
}

/// One radial line to draw with the paint of its layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentDraw {
    pub index: usize,
    pub start: Point,
    pub end: Point,
    pub layer: Layer,
}

/// Number of lines covered by a track, truncated toward zero and not clamped
pub fn track_line_count(progress: i32, max: i32, line_count: i32) -> Result<i64, ConfigError> {
    if max <= 0 {
        return Err(ConfigError::InvalidMax(max));
    }
    if line_count <= 0 {
        return Err(ConfigError::InvalidLineCount(line_count));
    }
    Ok((progress as f64 / max as f64 * line_count as f64) as i64)
}

/// Compute every radial line of the LINE style, ordered by index and then
/// by draw order within an index
///
/// The first track is always emitted last for an index so it covers the
/// second track where both apply.
pub fn compute_line_segments(
    state: &ProgressState,
    geometry: &GeometryConfig,
    frame: &DrawingFrame,
) -> Result<Vec<SegmentDraw>, ConfigError> {
    let line_count = geometry.line_count;
    let first_count = track_line_count(state.first, state.max(), line_count)?;
    let second_count = track_line_count(state.second, state.max(), line_count)?;

    let unit_angle = 2.0 * PI / line_count as f64;
    let outer_radius = frame.radius;
    let inner_radius = frame.radius - geometry.line_width;

    let mut segments = Vec::with_capacity(line_count as usize * 2);
    for i in 0..line_count as usize {
        let angle = -(i as f64) * unit_angle;
        let start = frame.polar(angle, inner_radius);
        let end = frame.polar(angle, outer_radius);
        let index = i as i64;

        let mut push = |layer| {
            segments.push(SegmentDraw {
                index: i,
                start,
                end,
                layer,
            })
        };

        if !(geometry.draw_background_outside_progress && index < first_count) {
            push(Layer::Background);
        }
        if index < second_count {
            push(Layer::SecondTrack);
        }
        if index < first_count {
            push(Layer::FirstTrack);
        }
    }

    Ok(segments)
}

/// Start and sweep of one arc, in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSpan {
    pub start: f64,
    pub sweep: f64,
}

/// Arc angles of the SOLID and SOLID_LINE styles
///
/// Track arcs always start at 0. Sweeps are not clamped: progress above
/// `max` yields more than 360 degrees, which backends draw as a full circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSweep {
    pub background: ArcSpan,
    pub second: f64,
    pub first: f64,
}

pub fn compute_arc_sweep(
    state: &ProgressState,
    draw_background_outside_progress: bool,
) -> Result<ArcSweep, ConfigError> {
    if state.max() <= 0 {
        return Err(ConfigError::InvalidMax(state.max()));
    }

    let first = MAX_DEGREE * state.first_ratio();
    let second = MAX_DEGREE * state.second_ratio();

    let background = if draw_background_outside_progress {
        ArcSpan {
            start: first,
            sweep: MAX_DEGREE - first,
        }
    } else {
        ArcSpan {
            start: 0.0,
            sweep: MAX_DEGREE,
        }
    };

    Ok(ArcSweep {
        background,
        second,
        first,
    })
}
