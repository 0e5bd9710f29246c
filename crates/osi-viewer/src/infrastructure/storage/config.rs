//! TOML-based configuration for the viewer application.
//!
//! Reads `ViewerConfig` from the platform-appropriate config file:
//! - Windows:  `%APPDATA%\OSIViewer\config.toml`
//! - Linux:    `~/.config/osiviewer/config.toml`
//! - macOS:    `~/Library/Application Support/OSIViewer/config.toml`
//!
//! Every field carries a `#[serde(default = "...")]` so the app works
//! correctly on first run (before a config file exists) and when upgrading
//! from an older file that is missing newer fields.  An absent file is not
//! an error; a malformed one is.
//!
//! The `[diagram]` section maps onto [`DiagramConfig`] — the defaults here
//! reproduce the reference rendering exactly, and the file exists so a user
//! can resize the stack or slow the animation down without rebuilding.

use std::path::PathBuf;
use std::time::Duration;

use osi_core::DiagramConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::infrastructure::assets::MaxSize;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ViewerConfig {
    #[serde(default)]
    pub viewer: GeneralConfig,
    #[serde(default)]
    pub diagram: DiagramSection,
    #[serde(default)]
    pub assets: AssetConfig,
}

/// General window and logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Window title.
    #[serde(default = "default_window_title")]
    pub window_title: String,
    /// Window width in pixels.
    #[serde(default = "default_window_width")]
    pub window_width: u32,
    /// Window height in pixels.
    #[serde(default = "default_window_height")]
    pub window_height: u32,
    /// `tracing` log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Geometry and timing of the visualization page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagramSection {
    /// Width of every layer box.
    #[serde(default = "default_region_width")]
    pub region_width: f64,
    /// Height of every layer box.
    #[serde(default = "default_region_height")]
    pub region_height: f64,
    /// Vertical gap between adjacent boxes.
    #[serde(default = "default_region_gap")]
    pub region_gap: f64,
    /// Left edge of the stack.
    #[serde(default = "default_origin_x")]
    pub origin_x: f64,
    /// Top edge of the first box.
    #[serde(default = "default_origin_y")]
    pub origin_y: f64,
    /// Radius of the marker disc.
    #[serde(default = "default_marker_radius")]
    pub marker_radius: f64,
    /// Horizontal tooltip offset from the pointer.
    #[serde(default = "default_tooltip_offset")]
    pub tooltip_offset_x: f64,
    /// Vertical tooltip offset from the pointer.
    #[serde(default = "default_tooltip_offset")]
    pub tooltip_offset_y: f64,
    /// Marker tick period in milliseconds.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

/// Where layer illustrations are looked up and how large they display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetConfig {
    /// Directory containing `physical.png`, `data_link.png`, ...
    /// An empty string means the process working directory.
    #[serde(default)]
    pub directory: String,
    /// Maximum illustration display width.
    #[serde(default = "default_max_thumbnail")]
    pub max_width: u32,
    /// Maximum illustration display height.
    #[serde(default = "default_max_thumbnail")]
    pub max_height: u32,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_window_title() -> String {
    "OSI Model Reference".to_string()
}
fn default_window_width() -> u32 {
    900
}
fn default_window_height() -> u32 {
    650
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_region_width() -> f64 {
    700.0
}
fn default_region_height() -> f64 {
    60.0
}
fn default_region_gap() -> f64 {
    20.0
}
fn default_origin_x() -> f64 {
    100.0
}
fn default_origin_y() -> f64 {
    50.0
}
fn default_marker_radius() -> f64 {
    15.0
}
fn default_tooltip_offset() -> f64 {
    20.0
}
fn default_tick_interval_ms() -> u64 {
    1000
}
fn default_max_thumbnail() -> u32 {
    300
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            window_title: default_window_title(),
            window_width: default_window_width(),
            window_height: default_window_height(),
            log_level: default_log_level(),
        }
    }
}

impl Default for DiagramSection {
    fn default() -> Self {
        Self {
            region_width: default_region_width(),
            region_height: default_region_height(),
            region_gap: default_region_gap(),
            origin_x: default_origin_x(),
            origin_y: default_origin_y(),
            marker_radius: default_marker_radius(),
            tooltip_offset_x: default_tooltip_offset(),
            tooltip_offset_y: default_tooltip_offset(),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            directory: String::new(),
            max_width: default_max_thumbnail(),
            max_height: default_max_thumbnail(),
        }
    }
}

// ── Mapping onto domain / infrastructure types ────────────────────────────────

impl DiagramSection {
    /// The geometry constants for [`osi_core::DiagramLayout::build`].
    pub fn to_diagram_config(&self) -> DiagramConfig {
        DiagramConfig {
            region_width: self.region_width,
            region_height: self.region_height,
            region_gap: self.region_gap,
            origin_x: self.origin_x,
            origin_y: self.origin_y,
            marker_radius: self.marker_radius,
            tooltip_offset: (self.tooltip_offset_x, self.tooltip_offset_y),
        }
    }

    /// The marker tick period.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl AssetConfig {
    /// The directory illustrations are looked up in.
    pub fn asset_dir(&self) -> PathBuf {
        if self.directory.is_empty() {
            PathBuf::from(".")
        } else {
            PathBuf::from(&self.directory)
        }
    }

    /// The illustration bounding box.
    pub fn max_size(&self) -> MaxSize {
        MaxSize {
            width: self.max_width,
            height: self.max_height,
        }
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Determines the platform-appropriate directory for the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the platform config base
/// directory cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    platform_config_dir().ok_or(ConfigError::NoPlatformConfigDir)
}

/// Resolves the full path to the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot
/// be determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Loads `ViewerConfig` from disk, returning `ViewerConfig::default()` if the
/// file does not yet exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config() -> Result<ViewerConfig, ConfigError> {
    let path = config_file_path()?;

    match std::fs::read_to_string(&path) {
        Ok(content) => {
            let cfg: ViewerConfig = toml::from_str(&content)?;
            Ok(cfg)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ViewerConfig::default()),
        Err(e) => Err(ConfigError::Io { path, source: e }),
    }
}

/// Resolves the platform config base directory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        // %APPDATA% e.g. C:\Users\<user>\AppData\Roaming
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("OSIViewer"))
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("osiviewer"))
    }

    #[cfg(target_os = "macos")]
    {
        // ~/Library/Application Support/OSIViewer
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("OSIViewer")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        // Fallback for unsupported platforms.
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
