//! Saved progress persistence

use anyhow::{Context, Result};
use log::debug;
use std::path::{Path, PathBuf};

use circle_progress_types::SavedState;

/// Path of the saved-state file in the per-user data directory
pub fn state_path() -> Result<PathBuf> {
    let dirs = super::project_dirs()?;
    Ok(dirs.data_dir().join("state.json"))
}

/// Load the saved state, `None` when nothing was saved yet
pub fn load_state() -> Result<Option<SavedState>> {
    load_state_from_path(&state_path()?)
}

/// Save the state to the per-user data directory
pub fn save_state(state: &SavedState) -> Result<()> {
    save_state_to_path(state, &state_path()?)
}

pub fn load_state_from_path(path: &Path) -> Result<Option<SavedState>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read state {}", path.display()))?;
    let state = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse state {}", path.display()))?;
    debug!("Loaded saved state from {}", path.display());
    Ok(Some(state))
}

pub fn save_state_to_path(state: &SavedState, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string(state)?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write state {}", path.display()))?;
    debug!("Saved state to {}", path.display());
    Ok(())
}
