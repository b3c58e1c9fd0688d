//! Ring configuration types
//!
//! `ProgressConfig` is a single value replaced wholesale on change, so
//! related properties (shader mode and its colors, say) never pass through
//! a half-updated state. The `with_*` methods build a modified copy.

use serde::{Deserialize, Serialize};

use crate::color::{deserialize_color, Color};
use crate::error::ConfigError;
use crate::style::{ProgressStyle, ShaderMode, StrokeCap};

pub const DEFAULT_MAX: i32 = 100;
pub const DEFAULT_START_DEGREE: i32 = -90;
pub const DEFAULT_LINE_COUNT: i32 = 45;
pub const DEFAULT_LINE_WIDTH: f64 = 4.0;
pub const DEFAULT_STROKE_WIDTH: f64 = 1.0;
pub const DEFAULT_TEXT_SIZE: f64 = 11.0;

const COLOR_ACCENT: u32 = 0xfff2a670;
const COLOR_TRACK: u32 = 0xffe3e3e5;
const COLOR_TRANSPARENT: u32 = 0x00000000;

/// Which draw routine and paint style apply
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct StyleConfig {
    #[serde(default)]
    pub style: ProgressStyle,
    #[serde(default)]
    pub shader_mode: ShaderMode,
    #[serde(default)]
    pub cap: StrokeCap,
}

/// Ring geometry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeometryConfig {
    /// Number of radial lines, LINE style only
    #[serde(default = "default_line_count")]
    pub line_count: i32,
    /// Radial length of each line, LINE style only
    #[serde(default = "default_line_width")]
    pub line_width: f64,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    /// Rotation of the ring in degrees (0 = right, -90 = top)
    #[serde(default = "default_start_degree")]
    pub start_degree: i32,
    /// Draw the background only where the first track does not cover it
    #[serde(default)]
    pub draw_background_outside_progress: bool,
}

fn default_line_count() -> i32 {
    DEFAULT_LINE_COUNT
}

fn default_line_width() -> f64 {
    DEFAULT_LINE_WIDTH
}

fn default_stroke_width() -> f64 {
    DEFAULT_STROKE_WIDTH
}

fn default_start_degree() -> i32 {
    DEFAULT_START_DEGREE
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            line_count: default_line_count(),
            line_width: default_line_width(),
            stroke_width: default_stroke_width(),
            start_degree: default_start_degree(),
            draw_background_outside_progress: false,
        }
    }
}

/// Track, label and background colors
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ColorConfig {
    #[serde(default = "default_accent", deserialize_with = "deserialize_color")]
    pub first_start: Color,
    #[serde(default = "default_accent", deserialize_with = "deserialize_color")]
    pub first_end: Color,
    #[serde(
        default = "default_transparent",
        deserialize_with = "deserialize_color"
    )]
    pub second_start: Color,
    #[serde(
        default = "default_transparent",
        deserialize_with = "deserialize_color"
    )]
    pub second_end: Color,
    #[serde(default = "default_accent", deserialize_with = "deserialize_color")]
    pub text: Color,
    #[serde(default = "default_track", deserialize_with = "deserialize_color")]
    pub background: Color,
}

fn default_accent() -> Color {
    Color::from_argb(COLOR_ACCENT)
}

fn default_transparent() -> Color {
    Color::from_argb(COLOR_TRANSPARENT)
}

fn default_track() -> Color {
    Color::from_argb(COLOR_TRACK)
}

impl ColorConfig {
    /// A track is a gradient only when its two colors differ
    pub fn first_has_gradient(&self) -> bool {
        self.first_start != self.first_end
    }

    pub fn second_has_gradient(&self) -> bool {
        self.second_start != self.second_end
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            first_start: default_accent(),
            first_end: default_accent(),
            second_start: default_transparent(),
            second_end: default_transparent(),
            text: default_accent(),
            background: default_track(),
        }
    }
}

/// Label text settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TextConfig {
    #[serde(default = "default_text_size")]
    pub text_size: f64,
}

fn default_text_size() -> f64 {
    DEFAULT_TEXT_SIZE
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            text_size: default_text_size(),
        }
    }
}

/// Complete ring configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct ProgressConfig {
    #[serde(default)]
    pub style: StyleConfig,
    #[serde(default)]
    pub geometry: GeometryConfig,
    #[serde(default)]
    pub colors: ColorConfig,
    #[serde(default)]
    pub text: TextConfig,
}

impl ProgressConfig {
    /// Reject values that have no safe numeric fallback
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.geometry.line_count <= 0 {
            return Err(ConfigError::InvalidLineCount(self.geometry.line_count));
        }
        Ok(())
    }

    pub fn with_style(mut self, style: ProgressStyle) -> Self {
        self.style.style = style;
        self
    }

    pub fn with_shader_mode(mut self, shader_mode: ShaderMode) -> Self {
        self.style.shader_mode = shader_mode;
        self
    }

    pub fn with_cap(mut self, cap: StrokeCap) -> Self {
        self.style.cap = cap;
        self
    }

    pub fn with_line_count(mut self, line_count: i32) -> Self {
        self.geometry.line_count = line_count;
        self
    }

    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.geometry.line_width = line_width;
        self
    }

    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.geometry.stroke_width = stroke_width;
        self
    }

    pub fn with_start_degree(mut self, start_degree: i32) -> Self {
        self.geometry.start_degree = start_degree;
        self
    }

    pub fn with_background_outside_progress(mut self, enabled: bool) -> Self {
        self.geometry.draw_background_outside_progress = enabled;
        self
    }

    pub fn with_first_colors(mut self, start: Color, end: Color) -> Self {
        self.colors.first_start = start;
        self.colors.first_end = end;
        self
    }

    pub fn with_second_colors(mut self, start: Color, end: Color) -> Self {
        self.colors.second_start = start;
        self.colors.second_end = end;
        self
    }

    pub fn with_background_color(mut self, color: Color) -> Self {
        self.colors.background = color;
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.colors.text = color;
        self
    }

    pub fn with_text_size(mut self, text_size: f64) -> Self {
        self.text.text_size = text_size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ProgressConfig::default();
        assert_eq!(config.style.style, ProgressStyle::Line);
        assert_eq!(config.style.shader_mode, ShaderMode::Linear);
        assert_eq!(config.style.cap, StrokeCap::Butt);
        assert_eq!(config.geometry.line_count, 45);
        assert_eq!(config.geometry.start_degree, -90);
        assert!(!config.geometry.draw_background_outside_progress);
        assert_eq!(config.colors.first_start.to_argb(), 0xfff2a670);
        assert_eq!(config.colors.background.to_argb(), 0xffe3e3e5);
        assert_eq!(config.colors.second_start, Color::TRANSPARENT);
        assert!(!config.colors.first_has_gradient());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_line_count() {
        let config = ProgressConfig::default().with_line_count(0);
        assert_eq!(config.validate(), Err(ConfigError::InvalidLineCount(0)));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r##"{
            "style": { "style": "solid_line", "cap": "round" },
            "colors": { "first_start": "#ff00ff00", "first_end": "#ff0000ff" }
        }"##;
        let config: ProgressConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.style.style, ProgressStyle::SolidLine);
        assert_eq!(config.style.shader_mode, ShaderMode::Linear);
        assert_eq!(config.style.cap, StrokeCap::Round);
        assert_eq!(config.geometry, GeometryConfig::default());
        assert!(config.colors.first_has_gradient());
        assert!(!config.colors.second_has_gradient());
        assert_eq!(config.text.text_size, DEFAULT_TEXT_SIZE);
    }

    #[test]
    fn test_config_serialization() {
        let config = ProgressConfig::default()
            .with_style(ProgressStyle::Solid)
            .with_shader_mode(ShaderMode::Sweep)
            .with_stroke_width(6.0);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: ProgressConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, config);
    }
}
