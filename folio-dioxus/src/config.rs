//! GUI-specific configuration for folio-dioxus.
//!
//! Configuration is loaded from `<config-dir>/folio/folio.toml` and
//! provides window, font, logging, and preview settings.

use std::path::{Path, PathBuf};

use anyhow::Result;
use etcetera::BaseStrategy;
use serde::Deserialize;

/// GUI-specific configuration loaded from `folio.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub window: WindowConfig,
    pub font: FontConfig,
    pub logging: LoggingConfig,
    pub preview: PreviewConfig,
}

/// Window configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

/// Font configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub family: String,
    pub size: f64,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_file: Option<PathBuf>,
    pub level: String,
    pub suppressed_patterns: Vec<String>,
}

/// Hover preview configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Base URL of the article server.
    pub server_url: String,
    /// Debounce delay before a hover triggers a fetch, in milliseconds.
    pub delay_ms: u64,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            font: FontConfig::default(),
            logging: LoggingConfig::default(),
            preview: PreviewConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "folio".to_string(),
            width: 1100.0,
            height: 760.0,
        }
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "'Iowan Old Style', Palatino, Georgia, serif".to_string(),
            size: 15.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_file: Some(PathBuf::from("/tmp/folio.log")),
            level: "info".to_string(),
            suppressed_patterns: vec![
                "SelectionDidChange".to_string(),
                "Dispatched unknown event".to_string(),
                "mousemove".to_string(),
                "pointermove".to_string(),
            ],
        }
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:5000".to_string(),
            delay_ms: 500,
        }
    }
}

/// The `folio` configuration directory, if a home directory is known.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    let strategy = etcetera::choose_base_strategy().ok()?;
    Some(strategy.config_dir().join("folio"))
}

impl FolioConfig {
    /// Load configuration from the default location
    /// (`<config-dir>/folio/folio.toml`).
    ///
    /// Falls back to defaults if the file doesn't exist.
    /// Returns an error only if the file exists but is malformed.
    pub fn load_default() -> Result<Self> {
        let config_path = config_dir().map(|dir| dir.join("folio.toml"));
        match config_path {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str::<FolioConfig>(&content)?;
        Ok(config)
    }

    /// Set the window title.
    #[must_use]
    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    /// Set the window dimensions.
    #[must_use]
    pub fn with_window_size(mut self, width: f64, height: f64) -> Self {
        self.window.width = width;
        self.window.height = height;
        self
    }

    /// Set the font family.
    #[must_use]
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font.family = family.into();
        self
    }

    /// Set the font size in pixels.
    #[must_use]
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font.size = size;
        self
    }

    /// Set the log file path.
    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.logging.log_file = Some(path.into());
        self
    }

    /// Set the log level (e.g., "info", "debug", "warn").
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }

    /// Set the article server base URL.
    #[must_use]
    pub fn with_server_url(mut self, url: impl Into<String>) -> Self {
        self.preview.server_url = url.into();
        self
    }

    /// Set the hover debounce delay in milliseconds.
    #[must_use]
    pub fn with_preview_delay_ms(mut self, delay_ms: u64) -> Self {
        self.preview.delay_ms = delay_ms;
        self
    }

    /// Generate CSS custom properties for font configuration.
    ///
    /// Returns a `<style>` block that overrides the stylesheet's `:root`
    /// defaults.
    #[must_use]
    pub fn font_css(&self) -> String {
        format!(
            "<style>:root {{ --font-body: {}; --font-size: {}px; }}</style>",
            self.font.family, self.font.size
        )
    }
}
