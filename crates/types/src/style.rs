//! Style, shader mode and stroke cap enumerations

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Overall rendering mode of the ring
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum ProgressStyle {
    #[serde(rename = "line")]
    #[default]
    Line, // Discrete radial line segments
    #[serde(rename = "solid")]
    Solid, // Filled pie wedges
    #[serde(rename = "solid_line")]
    SolidLine, // Stroked open arcs
}

impl ProgressStyle {
    /// Solid fills its arcs, every other style strokes
    pub fn paint_style(&self) -> PaintStyle {
        match self {
            ProgressStyle::Solid => PaintStyle::Fill,
            ProgressStyle::Line | ProgressStyle::SolidLine => PaintStyle::Stroke,
        }
    }
}

/// Gradient geometry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum ShaderMode {
    #[serde(rename = "linear")]
    #[default]
    Linear,
    #[serde(rename = "radial")]
    Radial,
    #[serde(rename = "sweep")]
    Sweep,
}

/// End shape of stroked lines and arcs
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum StrokeCap {
    #[serde(rename = "butt")]
    #[default]
    Butt, // Flat end at the path endpoint
    #[serde(rename = "round")]
    Round,
    #[serde(rename = "square")]
    Square, // Projects half the stroke width past the endpoint
}

/// Whether a paint fills its shape or strokes its outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaintStyle {
    Fill,
    Stroke,
}

impl TryFrom<i32> for ProgressStyle {
    type Error = ConfigError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ProgressStyle::Line),
            1 => Ok(ProgressStyle::Solid),
            2 => Ok(ProgressStyle::SolidLine),
            other => Err(ConfigError::UnknownStyle(other)),
        }
    }
}

impl TryFrom<i32> for ShaderMode {
    type Error = ConfigError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ShaderMode::Linear),
            1 => Ok(ShaderMode::Radial),
            2 => Ok(ShaderMode::Sweep),
            other => Err(ConfigError::UnknownShaderMode(other)),
        }
    }
}

impl TryFrom<i32> for StrokeCap {
    type Error = ConfigError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(StrokeCap::Butt),
            1 => Ok(StrokeCap::Round),
            2 => Ok(StrokeCap::Square),
            other => Err(ConfigError::UnknownCap(other)),
        }
    }
}

fn normalize_name(s: &str) -> String {
    s.trim().to_ascii_lowercase().replace('-', "_")
}

impl FromStr for ProgressStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "line" => Ok(ProgressStyle::Line),
            "solid" => Ok(ProgressStyle::Solid),
            "solid_line" => Ok(ProgressStyle::SolidLine),
            _ => Err(ConfigError::UnknownName {
                kind: "style",
                name: s.to_string(),
            }),
        }
    }
}

impl FromStr for ShaderMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "linear" => Ok(ShaderMode::Linear),
            "radial" => Ok(ShaderMode::Radial),
            "sweep" => Ok(ShaderMode::Sweep),
            _ => Err(ConfigError::UnknownName {
                kind: "shader mode",
                name: s.to_string(),
            }),
        }
    }
}

impl FromStr for StrokeCap {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "butt" => Ok(StrokeCap::Butt),
            "round" => Ok(StrokeCap::Round),
            "square" => Ok(StrokeCap::Square),
            _ => Err(ConfigError::UnknownName {
                kind: "stroke cap",
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ProgressStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ProgressStyle::Line => "line",
            ProgressStyle::Solid => "solid",
            ProgressStyle::SolidLine => "solid_line",
        })
    }
}

impl fmt::Display for ShaderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShaderMode::Linear => "linear",
            ShaderMode::Radial => "radial",
            ShaderMode::Sweep => "sweep",
        })
    }
}

impl fmt::Display for StrokeCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StrokeCap::Butt => "butt",
            StrokeCap::Round => "round",
            StrokeCap::Square => "square",
        })
    }
}
