//! Headless driver settings
//!
//! Loaded from an optional JSON file. Missing fields take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Driver settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed (`None` = seed from the clock)
    pub seed: Option<u64>,
    /// Ticks to run before stopping
    pub max_ticks: u64,
    /// Fire a mover every N ticks (0 = never)
    pub fire_interval: u64,
    /// Stop firing after this many movers
    pub max_movers: usize,
    /// Log a progress line every N ticks (0 = never)
    pub log_every: u64,
    /// Print the final render snapshot as JSON
    pub dump_snapshot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            max_ticks: 3600,
            fire_interval: 30,
            max_movers: 20,
            log_every: 600,
            dump_snapshot: false,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Bad settings file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Can't read settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    log::warn!("Failed to save settings to {}: {}", path.display(), e);
                } else {
                    log::info!("Settings saved");
                }
            }
            Err(e) => log::warn!("Failed to encode settings: {}", e),
        }
    }

    /// Configured seed, or one taken from the clock
    pub fn resolved_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }

    /// Whether the driver fires on this tick
    pub fn fires_on(&self, tick: u64, movers: usize) -> bool {
        self.fire_interval > 0
            && tick.is_multiple_of(self.fire_interval)
            && movers < self.max_movers
    }
}
