//! circle-progress-types: Shared data types for circle-progress.
//!
//! This crate contains pure data types (configs, enums, colors, progress
//! state) shared across the circle-progress crates. They carry no Cairo
//! dependency unless the `cairo` feature is enabled, making them suitable
//! as a foundation layer.

pub mod color;
pub mod config;
pub mod error;
pub mod state;
pub mod style;

// Re-export commonly used types at the crate root for convenience
pub use color::{deserialize_color, Color};
pub use config::{ColorConfig, GeometryConfig, ProgressConfig, StyleConfig, TextConfig};
pub use error::ConfigError;
pub use state::{ProgressState, SavedState};
pub use style::{PaintStyle, ProgressStyle, ShaderMode, StrokeCap};
