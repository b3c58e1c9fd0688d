//! Gradient descriptors for the first and second progress tracks

use circle_progress_types::{Color, ColorConfig, ProgressStyle, ShaderMode, StrokeCap};
use log::debug;

use crate::geometry::{DrawingFrame, Point};

/// Rotation applied to a linear gradient so it runs across the ring
pub const LINEAR_START_DEGREE: f64 = 90.0;

/// Gradient geometry, in the unrotated ring frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradientKind {
    /// Axis from `from` to `to`
    Linear { from: Point, to: Point },
    /// Circle around `center`
    Radial { center: Point, radius: f64 },
    /// Full turn around `center`, start color at angle 0
    Sweep { center: Point },
}

/// A two-color gradient with an optional rotation about `pivot`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientDescriptor {
    pub kind: GradientKind,
    pub start: Color,
    pub end: Color,
    /// Clockwise rotation in degrees
    pub rotation_degrees: f64,
    pub pivot: Point,
}

impl GradientDescriptor {
    /// Color at gradient parameter `t` (0.0 at the start, 1.0 at the end)
    pub fn color_at(&self, t: f64) -> Color {
        self.start.lerp(&self.end, t)
    }
}

/// How one track is painted
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackShader {
    Flat(Color),
    Gradient(GradientDescriptor),
}

impl TrackShader {
    pub fn is_flat(&self) -> bool {
        matches!(self, TrackShader::Flat(_))
    }
}

/// Shaders of both tracks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackShaders {
    pub first: TrackShader,
    pub second: TrackShader,
}

/// Inputs that decide the gradients; anything else leaves them untouched
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientParams<'a> {
    pub colors: &'a ColorConfig,
    pub shader_mode: ShaderMode,
    pub frame: &'a DrawingFrame,
    pub stroke_width: f64,
    pub cap: StrokeCap,
    pub style: ProgressStyle,
}

/// Rotation that lines the sweep start up with the visible start of the
/// stroke
///
/// Round and square caps project past the arc start by the stroke's angular
/// width at the ring radius, so the gradient is turned back by that much.
/// Butt caps on stroked arcs need no correction.
pub fn sweep_rotation_degrees(
    stroke_width: f64,
    radius: f64,
    cap: StrokeCap,
    style: ProgressStyle,
) -> f64 {
    if cap == StrokeCap::Butt && style == ProgressStyle::SolidLine {
        return 0.0;
    }
    if radius <= 0.0 {
        return 0.0;
    }
    -(stroke_width / radius).to_degrees()
}

fn build_track(params: &GradientParams, start: Color, end: Color) -> TrackShader {
    if start == end {
        return TrackShader::Flat(start);
    }

    let frame = params.frame;
    let center = frame.center();
    let (kind, rotation_degrees) = match params.shader_mode {
        ShaderMode::Linear => (
            GradientKind::Linear {
                from: Point::new(frame.bounds.left, frame.bounds.top),
                to: Point::new(frame.bounds.left, frame.bounds.bottom),
            },
            LINEAR_START_DEGREE,
        ),
        ShaderMode::Radial => (
            GradientKind::Radial {
                center,
                radius: frame.radius,
            },
            0.0,
        ),
        ShaderMode::Sweep => (
            GradientKind::Sweep { center },
            sweep_rotation_degrees(
                params.stroke_width,
                frame.radius,
                params.cap,
                params.style,
            ),
        ),
    };

    TrackShader::Gradient(GradientDescriptor {
        kind,
        start,
        end,
        rotation_degrees,
        pivot: center,
    })
}

/// Build the shaders of both tracks
///
/// Each track independently degrades to a flat color when its start and
/// end colors are equal.
pub fn build_gradients(params: &GradientParams) -> TrackShaders {
    let colors = params.colors;
    let shaders = TrackShaders {
        first: build_track(params, colors.first_start, colors.first_end),
        second: build_track(params, colors.second_start, colors.second_end),
    };
    debug!(
        "Rebuilt {} gradients (first flat: {}, second flat: {})",
        params.shader_mode,
        shaders.first.is_flat(),
        shaders.second.is_flat()
    );
    shaders
}
