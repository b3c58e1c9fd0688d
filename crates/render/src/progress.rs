//! The circular progress renderer
//!
//! `CircleProgress` owns the progress state, the configuration and the
//! derived caches (drawing frame, track gradients). Every setter performs
//! the minimal recomputation it needs and records a redraw request; hosts
//! drain the request with [`CircleProgress::take_redraw_request`].

use std::fmt;

use circle_progress_types::{
    Color, ConfigError, ProgressConfig, ProgressState, ProgressStyle, SavedState, ShaderMode,
    StrokeCap,
};
use log::debug;

use crate::commands::{DrawList, FrameRotation, TextCommand};
use crate::dispatcher::draw_ring;
use crate::geometry::DrawingFrame;
use crate::gradient::{build_gradients, GradientParams, TrackShaders};
use crate::label::{label_text, DefaultProgressFormatter, ProgressFormatter};

pub struct CircleProgress {
    state: ProgressState,
    config: ProgressConfig,
    formatter: Option<Box<dyn ProgressFormatter>>,
    size: (u32, u32),
    frame: DrawingFrame,
    shaders: TrackShaders,
    redraw_requested: bool,
}

impl CircleProgress {
    pub fn new() -> Self {
        Self::from_parts(ProgressConfig::default())
    }

    /// Create with a validated configuration
    pub fn with_config(config: ProgressConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(config))
    }

    fn from_parts(config: ProgressConfig) -> Self {
        let frame = DrawingFrame::new(0, 0, config.geometry.stroke_width);
        let shaders = build_gradients(&gradient_params(&config, &frame));
        Self {
            state: ProgressState::default(),
            config,
            formatter: Some(Box::new(DefaultProgressFormatter)),
            size: (0, 0),
            frame,
            shaders,
            redraw_requested: true,
        }
    }

    // --- Derived caches ---

    fn update_frame(&mut self) {
        self.frame = DrawingFrame::new(self.size.0, self.size.1, self.config.geometry.stroke_width);
    }

    fn update_shaders(&mut self) {
        self.shaders = build_gradients(&gradient_params(&self.config, &self.frame));
    }

    fn invalidate(&mut self) {
        self.redraw_requested = true;
    }

    /// Drawing region changed size
    pub fn on_resize(&mut self, width: u32, height: u32) {
        debug!("Resize {}x{} -> {}x{}", self.size.0, self.size.1, width, height);
        self.size = (width, height);
        self.update_frame();
        self.update_shaders();
        self.invalidate();
    }

    /// Replace the whole configuration at once
    ///
    /// Nothing changes when the new configuration is invalid.
    pub fn apply_config(&mut self, config: ProgressConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        self.update_frame();
        self.update_shaders();
        self.invalidate();
        Ok(())
    }

    // --- Progress ---

    pub fn set_progress_first(&mut self, progress: i32) {
        self.state.first = progress;
        self.invalidate();
    }

    pub fn set_progress_second(&mut self, progress: i32) {
        self.state.second = progress;
        self.invalidate();
    }

    pub fn set_max(&mut self, max: i32) -> Result<(), ConfigError> {
        self.state.set_max(max)?;
        self.invalidate();
        Ok(())
    }

    pub fn progress(&self) -> i32 {
        self.state.first
    }

    pub fn progress_second(&self) -> i32 {
        self.state.second
    }

    pub fn max(&self) -> i32 {
        self.state.max()
    }

    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    // --- Style ---

    pub fn set_style(&mut self, style: ProgressStyle) {
        self.config.style.style = style;
        // The sweep correction depends on the style
        self.update_shaders();
        self.invalidate();
    }

    pub fn set_shader_mode(&mut self, shader_mode: ShaderMode) {
        self.config.style.shader_mode = shader_mode;
        self.update_shaders();
        self.invalidate();
    }

    pub fn set_cap(&mut self, cap: StrokeCap) {
        self.config.style.cap = cap;
        self.update_shaders();
        self.invalidate();
    }

    // --- Colors ---

    pub fn set_progress_start_color(&mut self, color: Color) {
        self.config.colors.first_start = color;
        self.update_shaders();
        self.invalidate();
    }

    pub fn set_progress_end_color(&mut self, color: Color) {
        self.config.colors.first_end = color;
        self.update_shaders();
        self.invalidate();
    }

    pub fn set_second_progress_start_color(&mut self, color: Color) {
        self.config.colors.second_start = color;
        self.update_shaders();
        self.invalidate();
    }

    pub fn set_second_progress_end_color(&mut self, color: Color) {
        self.config.colors.second_end = color;
        self.update_shaders();
        self.invalidate();
    }

    pub fn set_progress_background_color(&mut self, color: Color) {
        self.config.colors.background = color;
        self.invalidate();
    }

    pub fn set_progress_text_color(&mut self, color: Color) {
        self.config.colors.text = color;
        self.invalidate();
    }

    pub fn set_progress_text_size(&mut self, text_size: f64) {
        self.config.text.text_size = text_size;
        self.invalidate();
    }

    // --- Geometry ---

    pub fn set_line_count(&mut self, line_count: i32) -> Result<(), ConfigError> {
        if line_count <= 0 {
            return Err(ConfigError::InvalidLineCount(line_count));
        }
        self.config.geometry.line_count = line_count;
        self.invalidate();
        Ok(())
    }

    pub fn set_line_width(&mut self, line_width: f64) {
        self.config.geometry.line_width = line_width;
        self.invalidate();
    }

    pub fn set_progress_stroke_width(&mut self, stroke_width: f64) {
        self.config.geometry.stroke_width = stroke_width;
        self.update_frame();
        self.update_shaders();
        self.invalidate();
    }

    pub fn set_start_degree(&mut self, start_degree: i32) {
        self.config.geometry.start_degree = start_degree;
        self.invalidate();
    }

    pub fn start_degree(&self) -> i32 {
        self.config.geometry.start_degree
    }

    pub fn set_draw_background_outside_progress(&mut self, enabled: bool) {
        self.config.geometry.draw_background_outside_progress = enabled;
        self.invalidate();
    }

    pub fn is_draw_background_outside_progress(&self) -> bool {
        self.config.geometry.draw_background_outside_progress
    }

    // --- Label ---

    /// Replace the label strategy; `None` hides the label
    pub fn set_progress_formatter(&mut self, formatter: Option<Box<dyn ProgressFormatter>>) {
        self.formatter = formatter;
        self.invalidate();
    }

    // --- Accessors ---

    pub fn config(&self) -> &ProgressConfig {
        &self.config
    }

    pub fn frame(&self) -> &DrawingFrame {
        &self.frame
    }

    pub fn shaders(&self) -> &TrackShaders {
        &self.shaders
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Whether a redraw was requested since the last call; clears the request
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    // --- Persistence ---

    pub fn save_state(&self) -> SavedState {
        SavedState {
            progress: self.state.first,
        }
    }

    pub fn restore_state(&mut self, saved: SavedState) {
        self.set_progress_first(saved.progress);
    }

    // --- Rendering ---

    /// Produce the primitives of one frame: the ring in a frame rotated by
    /// the start degree, then the label unrotated
    pub fn render(&self) -> Result<DrawList, ConfigError> {
        let ring = draw_ring(&self.state, &self.config, &self.frame, &self.shaders)?;

        let label = label_text(self.formatter.as_deref(), self.state.first, self.state.max())
            .map(|text| TextCommand {
                text,
                center: self.frame.center(),
                size: self.config.text.text_size,
                color: self.config.colors.text,
            });

        Ok(DrawList {
            rotation: FrameRotation {
                degrees: self.config.geometry.start_degree as f64,
                pivot: self.frame.center(),
            },
            ring,
            label,
        })
    }
}

fn gradient_params<'a>(config: &'a ProgressConfig, frame: &'a DrawingFrame) -> GradientParams<'a> {
    GradientParams {
        colors: &config.colors,
        shader_mode: config.style.shader_mode,
        frame,
        stroke_width: config.geometry.stroke_width,
        cap: config.style.cap,
        style: config.style.style,
    }
}

impl Default for CircleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CircleProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircleProgress")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("has_formatter", &self.formatter.is_some())
            .field("size", &self.size)
            .field("frame", &self.frame)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::DrawCommand;
    use crate::geometry::Layer;
    use crate::gradient::TrackShader;

    fn sized() -> CircleProgress {
        let mut progress = CircleProgress::new();
        progress.on_resize(200, 200);
        progress
    }

    fn arc_sweep(list: &DrawList, layer: Layer) -> f64 {
        match list.commands_in(layer).next() {
            Some(DrawCommand::Arc { sweep_degrees, .. }) => *sweep_degrees,
            other => panic!("expected an arc, got {:?}", other),
        }
    }

    #[test]
    fn test_defaults() {
        let progress = CircleProgress::new();
        assert_eq!(progress.progress(), 0);
        assert_eq!(progress.max(), 100);
        assert_eq!(progress.start_degree(), -90);
        assert!(!progress.is_draw_background_outside_progress());
    }

    #[test]
    fn test_default_label_at_zero() {
        let progress = sized();
        let list = progress.render().unwrap();
        let label = list.label.expect("label");
        assert_eq!(label.text, "0%");
        assert_eq!(label.center.x, 100.0);
        assert_eq!(label.center.y, 100.0);
    }

    #[test]
    fn test_no_formatter_no_label() {
        let mut progress = sized();
        progress.set_progress_formatter(None);
        for first in [0, 37, 100, 250] {
            progress.set_progress_first(first);
            assert!(progress.render().unwrap().label.is_none());
        }
    }

    #[test]
    fn test_custom_formatter() {
        let mut progress = sized();
        progress.set_progress_formatter(Some(Box::new(|p: i32, m: i32| format!("{}/{}", p, m))));
        progress.set_progress_first(7);
        assert_eq!(progress.render().unwrap().label.unwrap().text, "7/100");
    }

    #[test]
    fn test_solid_scenario() {
        let mut progress = sized();
        progress.set_style(ProgressStyle::Solid);
        progress.set_progress_first(50);
        progress.set_progress_second(60);

        let list = progress.render().unwrap();
        assert!((arc_sweep(&list, Layer::FirstTrack) - 180.0).abs() < 1e-9);
        assert!((arc_sweep(&list, Layer::SecondTrack) - 216.0).abs() < 1e-9);
        assert_eq!(list.ring.last().map(|c| c.layer()), Some(Layer::FirstTrack));
    }

    #[test]
    fn test_line_boundary_above_max() {
        let mut progress = sized();
        progress.set_progress_first(150);
        let list = progress.render().unwrap();
        assert_eq!(list.commands_in(Layer::FirstTrack).count(), 45);

        progress.set_style(ProgressStyle::SolidLine);
        let list = progress.render().unwrap();
        assert!((arc_sweep(&list, Layer::FirstTrack) - 540.0).abs() < 1e-9);
    }

    #[test]
    fn test_rotation_follows_start_degree() {
        let mut progress = sized();
        progress.set_start_degree(45);
        let list = progress.render().unwrap();
        assert_eq!(list.rotation.degrees, 45.0);
        assert_eq!(list.rotation.pivot.x, 100.0);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut progress = sized();
        assert_eq!(progress.set_max(0), Err(ConfigError::InvalidMax(0)));
        assert_eq!(progress.max(), 100);
        assert_eq!(
            progress.set_line_count(-3),
            Err(ConfigError::InvalidLineCount(-3))
        );
        assert_eq!(progress.config().geometry.line_count, 45);

        let bad = ProgressConfig::default().with_line_count(0);
        assert!(progress.apply_config(bad).is_err());
        assert_eq!(progress.config().geometry.line_count, 45);
        assert!(CircleProgress::with_config(bad).is_err());
    }

    #[test]
    fn test_setters_with_current_value_are_idempotent() {
        let mut progress = sized();
        progress.set_progress_first(40);
        progress.set_progress_second(70);
        progress.set_progress_start_color(Color::from_argb(0xffff0000));
        progress.set_progress_end_color(Color::from_argb(0xff0000ff));
        progress.set_shader_mode(ShaderMode::Sweep);
        let before = progress.render().unwrap();

        let config = *progress.config();
        progress.set_progress_first(progress.progress());
        progress.set_progress_second(progress.progress_second());
        progress.set_max(progress.max()).unwrap();
        progress.set_style(config.style.style);
        progress.set_shader_mode(config.style.shader_mode);
        progress.set_cap(config.style.cap);
        progress.set_progress_start_color(config.colors.first_start);
        progress.set_progress_end_color(config.colors.first_end);
        progress.set_second_progress_start_color(config.colors.second_start);
        progress.set_second_progress_end_color(config.colors.second_end);
        progress.set_progress_background_color(config.colors.background);
        progress.set_progress_text_color(config.colors.text);
        progress.set_progress_text_size(config.text.text_size);
        progress.set_line_count(config.geometry.line_count).unwrap();
        progress.set_line_width(config.geometry.line_width);
        progress.set_progress_stroke_width(config.geometry.stroke_width);
        progress.set_start_degree(config.geometry.start_degree);
        progress
            .set_draw_background_outside_progress(config.geometry.draw_background_outside_progress);
        progress.on_resize(200, 200);
        progress.apply_config(config).unwrap();

        assert_eq!(progress.render().unwrap(), before);
    }

    #[test]
    fn test_progress_change_keeps_gradients() {
        let mut progress = sized();
        progress.set_progress_start_color(Color::from_argb(0xffff0000));
        let shaders = *progress.shaders();

        progress.set_progress_first(80);
        progress.set_progress_second(10);
        assert_eq!(*progress.shaders(), shaders);

        progress.set_progress_end_color(Color::from_argb(0xffff0000));
        assert!(progress.shaders().first.is_flat());
    }

    #[test]
    fn test_gradients_follow_resize_and_mode() {
        let mut progress = CircleProgress::new();
        progress.set_progress_start_color(Color::from_argb(0xffff0000));
        progress.set_shader_mode(ShaderMode::Radial);
        progress.on_resize(300, 100);

        let TrackShader::Gradient(gradient) = progress.shaders().first else {
            panic!("expected a gradient");
        };
        assert_eq!(
            gradient.kind,
            crate::gradient::GradientKind::Radial {
                center: crate::geometry::Point::new(150.0, 50.0),
                radius: 50.0,
            }
        );
    }

    #[test]
    fn test_stroke_width_recomputes_frame() {
        let mut progress = sized();
        progress.set_progress_stroke_width(10.0);
        assert_eq!(progress.frame().arc_rect.left, 5.0);
        progress.set_progress_stroke_width(4.0);
        assert_eq!(progress.frame().arc_rect.left, 2.0);
    }

    #[test]
    fn test_redraw_requests() {
        let mut progress = sized();
        assert!(progress.take_redraw_request());
        assert!(!progress.take_redraw_request());

        progress.set_progress_first(5);
        assert!(progress.take_redraw_request());
        assert!(progress.set_max(0).is_err());
        assert!(!progress.take_redraw_request());
    }

    #[test]
    fn test_saved_state_round_trip() {
        let mut progress = sized();
        progress.set_progress_first(63);
        let saved = progress.save_state();

        let mut resumed = CircleProgress::new();
        resumed.restore_state(saved);
        assert_eq!(resumed.progress(), 63);
    }
}
