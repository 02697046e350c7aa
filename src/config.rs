//! Tracker configuration
//!
//! Configuration is an explicit value constructed once and threaded through
//! the tracker and session; there is no lazily-initialized global. The JSON
//! file on disk is optional: a missing or corrupt file falls back to
//! defaults with a warning, and saving failures are reported to the caller
//! rather than silently swallowed.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::copy_mode::CopyMode;
use crate::error::TrackerResult;
use crate::geometry::TARGET_FRAME_WIDTH;

/// Re-detection interval in milliseconds
pub const DEFAULT_MONITOR_INTERVAL_MS: u64 = 2000;
/// Pointer tracking interval in milliseconds
pub const DEFAULT_TRACKING_INTERVAL_MS: u64 = 100;

/// Tracker and session configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Executable name of the tracked application
    pub target_process: String,
    /// Copy mode active at startup
    pub default_copy_mode: CopyMode,
    /// How often the window is re-detected
    pub monitor_interval_ms: u64,
    /// How often the pointer position is sampled
    pub tracking_interval_ms: u64,
    /// Known frame width the border refiner corrects toward
    pub target_frame_width: i32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            target_process:       "WidgetInc.exe".to_string(),
            default_copy_mode:    CopyMode::FrameCoords,
            monitor_interval_ms:  DEFAULT_MONITOR_INTERVAL_MS,
            tracking_interval_ms: DEFAULT_TRACKING_INTERVAL_MS,
            target_frame_width:   TARGET_FRAME_WIDTH,
        }
    }
}

impl TrackerConfig {
    /// Loads configuration from a JSON file
    pub fn load(path: &Path) -> TrackerResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Loads configuration, falling back to defaults on any failure
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                warn!("Config at {} unusable ({err}); using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Saves configuration as pretty-printed JSON, creating parent
    /// directories as needed
    pub fn save(&self, path: &Path) -> TrackerResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}
