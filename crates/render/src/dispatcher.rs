//! Style dispatch: turn progress state into ring draw commands

use circle_progress_types::{ConfigError, ProgressConfig, ProgressState, ProgressStyle};

use crate::commands::{DrawCommand, Paint};
use crate::geometry::{compute_arc_sweep, compute_line_segments, ArcSpan, DrawingFrame, Layer};
use crate::gradient::{TrackShader, TrackShaders};

/// Paints of the three layers for the current style
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerPaints {
    pub background: Paint,
    pub second: Paint,
    pub first: Paint,
}

impl LayerPaints {
    pub fn new(config: &ProgressConfig, shaders: &TrackShaders) -> Self {
        let paint = |shader| Paint {
            shader,
            style: config.style.style.paint_style(),
            stroke_width: config.geometry.stroke_width,
            cap: config.style.cap,
        };

        Self {
            background: paint(TrackShader::Flat(config.colors.background)),
            second: paint(shaders.second),
            first: paint(shaders.first),
        }
    }

    pub fn for_layer(&self, layer: Layer) -> Paint {
        match layer {
            Layer::Background => self.background,
            Layer::SecondTrack => self.second,
            Layer::FirstTrack => self.first,
        }
    }
}

/// Emit the ring commands of the configured style
pub fn draw_ring(
    state: &ProgressState,
    config: &ProgressConfig,
    frame: &DrawingFrame,
    shaders: &TrackShaders,
) -> Result<Vec<DrawCommand>, ConfigError> {
    let paints = LayerPaints::new(config, shaders);

    match config.style.style {
        ProgressStyle::Line => draw_line_progress(state, config, frame, &paints),
        ProgressStyle::Solid => draw_arc_progress(state, config, frame, &paints, true),
        ProgressStyle::SolidLine => draw_arc_progress(state, config, frame, &paints, false),
    }
}

/// Radial lines around the center, stroked
fn draw_line_progress(
    state: &ProgressState,
    config: &ProgressConfig,
    frame: &DrawingFrame,
    paints: &LayerPaints,
) -> Result<Vec<DrawCommand>, ConfigError> {
    let segments = compute_line_segments(state, &config.geometry, frame)?;

    Ok(segments
        .into_iter()
        .map(|segment| DrawCommand::Line {
            start: segment.start,
            end: segment.end,
            layer: segment.layer,
            paint: paints.for_layer(segment.layer),
        })
        .collect())
}

/// Background, second and first arcs; pie wedges when `use_center`
fn draw_arc_progress(
    state: &ProgressState,
    config: &ProgressConfig,
    frame: &DrawingFrame,
    paints: &LayerPaints,
    use_center: bool,
) -> Result<Vec<DrawCommand>, ConfigError> {
    let sweep = compute_arc_sweep(state, config.geometry.draw_background_outside_progress)?;

    let arc = |span: ArcSpan, layer: Layer| DrawCommand::Arc {
        oval: frame.arc_rect,
        start_degrees: span.start,
        sweep_degrees: span.sweep,
        use_center,
        layer,
        paint: paints.for_layer(layer),
    };

    Ok(vec![
        arc(sweep.background, Layer::Background),
        arc(
            ArcSpan {
                start: 0.0,
                sweep: sweep.second,
            },
            Layer::SecondTrack,
        ),
        arc(
            ArcSpan {
                start: 0.0,
                sweep: sweep.first,
            },
            Layer::FirstTrack,
        ),
    ])
}
