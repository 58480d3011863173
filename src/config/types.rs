use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Terminal shell settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw / animation tick in milliseconds (default: 50).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Development mode (trace panel, fault injection).
    /// Unset follows the build profile.
    #[serde(default)]
    pub dev_mode: Option<bool>,
    /// Pull strength of the magnetic "Send" button (default: 0.3).
    #[serde(default = "default_magnetic_strength")]
    pub magnetic_strength: f32,
}

/// Motion preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionConfig {
    /// Forces the reduced-motion preference. Unset reads the environment.
    #[serde(default)]
    pub reduce_motion: Option<bool>,
    /// Delay between staggered transcript items in seconds (default: 0.08).
    #[serde(default = "default_stagger_seconds")]
    pub stagger_seconds: f32,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. Defaults to `visionbi.log` in the user cache directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_magnetic_strength() -> f32 {
    0.3
}

fn default_stagger_seconds() -> f32 {
    0.08
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            dev_mode: None,
            magnetic_strength: default_magnetic_strength(),
        }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            reduce_motion: None,
            stagger_seconds: default_stagger_seconds(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl UiConfig {
    /// Explicit setting, else debug builds run in development mode.
    pub fn dev_mode(&self) -> bool {
        self.dev_mode.unwrap_or(cfg!(debug_assertions))
    }
}

impl LoggingConfig {
    /// Configured file, else `<cache dir>/visionbi/visionbi.log`.
    pub fn file_path(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("visionbi")
                .join("visionbi.log")
        })
    }
}
