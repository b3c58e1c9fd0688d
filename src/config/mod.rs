//! Configuration management

mod settings;
pub mod state;

pub use settings::{AppConfig, RenderConfig, CONFIG_VERSION};

use anyhow::Result;

pub(crate) fn project_dirs() -> Result<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "github.circle_progress", "circle-progress")
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}
