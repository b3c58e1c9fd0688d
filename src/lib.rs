//! circle-progress: circular progress rings for GTK4 and offscreen images
//!
//! This library provides the application layer around the ring renderer:
//! - Configuration and saved-state files
//! - An offscreen PNG host
//! - A GTK4 widget host and the demo gallery

pub mod config;
pub mod gallery;
pub mod image_host;
pub mod widget;

// Re-export commonly used types
pub use circle_progress_render::{CircleProgress, DrawList, ProgressFormatter, ProgressHost};
pub use circle_progress_types::{ProgressConfig, ProgressStyle, ShaderMode, StrokeCap};
pub use config::AppConfig;
pub use image_host::ImageHost;
pub use widget::ProgressWidget;
