//! Configuration System
//!
//! Loads the dashboard configuration from a TOML file. Every field has a
//! default, so a missing file or a partial file is fine; command-line flags
//! override what the file says.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::app::{HostPage, Viewport, DEFAULT_ANCHOR};
use crate::error::{DashboardError, DashboardResult};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    /// Anchor the dashboard mounts on
    #[serde(default = "default_mount")]
    pub mount: String,

    #[serde(default)]
    pub host: HostConfig,

    #[serde(default)]
    pub window: WindowConfig,

    #[serde(default)]
    pub export: ExportConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_mount() -> String {
    DEFAULT_ANCHOR.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mount: default_mount(),
            host: HostConfig::default(),
            window: WindowConfig::default(),
            export: ExportConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Anchors provided by the host page
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HostConfig {
    #[serde(default = "default_anchors")]
    pub anchors: Vec<String>,
}

fn default_anchors() -> Vec<String> {
    vec![DEFAULT_ANCHOR.to_string()]
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            anchors: default_anchors(),
        }
    }
}

/// Native window configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct WindowConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_width")]
    pub width: u32,

    #[serde(default = "default_height")]
    pub height: u32,

    #[serde(default = "default_min_width")]
    pub min_width: u32,

    #[serde(default = "default_min_height")]
    pub min_height: u32,
}

fn default_title() -> String {
    "Customer Churn Analytics".to_string()
}

fn default_width() -> u32 {
    1200
}

fn default_height() -> u32 {
    800
}

fn default_min_width() -> u32 {
    800
}

fn default_min_height() -> u32 {
    600
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_width(),
            height: default_height(),
            min_width: default_min_width(),
            min_height: default_min_height(),
        }
    }
}

/// Headless export configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ExportConfig {
    /// Canvas width in pixels; the height follows from the layout
    #[serde(default = "default_export_width")]
    pub width: u32,
}

fn default_export_width() -> u32 {
    1600
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            width: default_export_width(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    if cfg!(feature = "dev") {
        "churn_dashboard=debug".to_string()
    } else {
        "churn_dashboard=info".to_string()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// used when present and built-in defaults otherwise.
    pub fn load(path: Option<&Path>) -> DashboardResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> DashboardResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> DashboardResult<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// `<config dir>/churn-dashboard/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("churn-dashboard").join("config.toml"))
    }

    fn validate(&self) -> DashboardResult<()> {
        if self.mount.trim().is_empty() {
            return Err(DashboardError::Config("mount must not be empty".to_string()));
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(DashboardError::Config("window size must be non-zero".to_string()));
        }
        if self.export.width == 0 {
            return Err(DashboardError::Config("export width must be non-zero".to_string()));
        }
        Ok(())
    }

    /// Host page for the native window.
    pub fn window_host(&self) -> HostPage {
        HostPage::from_ids(
            self.host.anchors.iter().cloned(),
            Viewport {
                width: self.window.width,
                height: self.window.height,
            },
        )
    }

    /// Host page for a headless export of the given width.
    pub fn export_host(&self, width: u32) -> HostPage {
        HostPage::from_ids(
            self.host.anchors.iter().cloned(),
            Viewport { width, height: 0 },
        )
    }
}
