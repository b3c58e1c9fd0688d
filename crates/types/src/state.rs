//! Progress values and the state persisted across suspend/resume

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_MAX;
use crate::error::ConfigError;

/// Current progress of both tracks
///
/// `first` and `second` are deliberately unrestricted: values outside
/// `0..=max` render as saturated or unusual rings, never as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressState {
    pub first: i32,
    pub second: i32,
    max: i32,
}

impl ProgressState {
    pub fn new(first: i32, second: i32, max: i32) -> Result<Self, ConfigError> {
        let mut state = Self {
            first,
            second,
            max: DEFAULT_MAX,
        };
        state.set_max(max)?;
        Ok(state)
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn set_max(&mut self, max: i32) -> Result<(), ConfigError> {
        if max <= 0 {
            return Err(ConfigError::InvalidMax(max));
        }
        self.max = max;
        Ok(())
    }

    /// Fraction of the first track, not clamped
    pub fn first_ratio(&self) -> f64 {
        self.first as f64 / self.max as f64
    }

    /// Fraction of the second track, not clamped
    pub fn second_ratio(&self) -> f64 {
        self.second as f64 / self.max as f64
    }
}

impl Default for ProgressState {
    fn default() -> Self {
        Self {
            first: 0,
            second: 0,
            max: DEFAULT_MAX,
        }
    }
}

/// The only value that survives a suspend/resume cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SavedState {
    pub progress: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive_max() {
        assert_eq!(ProgressState::new(0, 0, 0), Err(ConfigError::InvalidMax(0)));
        assert_eq!(ProgressState::new(0, 0, -5), Err(ConfigError::InvalidMax(-5)));

        let mut state = ProgressState::default();
        assert!(state.set_max(-1).is_err());
        assert_eq!(state.max(), DEFAULT_MAX);
    }

    #[test]
    fn test_out_of_range_progress_is_kept() {
        let state = ProgressState::new(150, -10, 100).unwrap();
        assert_eq!(state.first, 150);
        assert!((state.first_ratio() - 1.5).abs() < 1e-9);
        assert!(state.second_ratio() < 0.0);
    }

    #[test]
    fn test_saved_state_format() {
        let json = serde_json::to_string(&SavedState { progress: 42 }).unwrap();
        assert_eq!(json, r#"{"progress":42}"#);
        let restored: SavedState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.progress, 42);
    }
}
