// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Manifest source and requested image format
//! - `[layout]` - Distribution strategy and per-breakpoint column counts
//! - `[lightbox]` - Neighbor prefetch toggle
//! - `[cache]` - Image cache budget
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `ICED_FOLIO_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Validation
//!
//! Broken values never abort startup: an unparseable file falls back to
//! defaults with a warning, and a zero column count is replaced by the
//! default table with a warning. The layout engine itself still rejects a
//! zero count, so the fallback here is what keeps the app renderable.

use crate::app::paths;
use crate::content::ImageFormat;
use crate::error::{Error, Result};
use crate::gallery::{ColumnsTable, DistributionStrategy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Manifest path or URL. The `--manifest` CLI flag overrides it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<String>,

    /// Delivery format requested from the CDN.
    #[serde(default)]
    pub image_format: ImageFormat,
}

/// Gallery layout settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct LayoutConfig {
    /// How images are distributed across columns.
    #[serde(default)]
    pub strategy: DistributionStrategy,

    /// Column counts per viewport breakpoint.
    #[serde(default)]
    pub columns: ColumnsTable,
}

/// Lightbox settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LightboxConfig {
    /// Whether to warm the cache with the neighbors of the shown image.
    #[serde(default = "default_prefetch_neighbors")]
    pub prefetch_neighbors: bool,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            prefetch_neighbors: default_prefetch_neighbors(),
        }
    }
}

/// Image cache budget.
///
/// Values are clamped to the supported ranges when the runtime cache is
/// built, not here, so the file round-trips unchanged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CacheConfig {
    /// Cache size budget in megabytes.
    #[serde(default = "default_cache_mb")]
    pub max_mb: u32,

    /// Maximum number of cached images.
    #[serde(default = "default_cache_entries")]
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_mb: default_cache_mb(),
            max_entries: default_cache_entries(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Gallery layout settings.
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Lightbox settings.
    #[serde(default)]
    pub lightbox: LightboxConfig,

    /// Image cache budget.
    #[serde(default)]
    pub cache: CacheConfig,
}

impl Config {
    /// Replaces invalid values with defaults.
    ///
    /// Returns a warning describing what was replaced, if anything. Only
    /// the column table can be invalid today; everything else is either
    /// clamped downstream or valid by construction.
    pub fn sanitize(&mut self) -> Option<String> {
        if let Err(err) = self.layout.columns.validate() {
            let warning = format!("{err}; using default column counts");
            self.layout.columns = ColumnsTable::default();
            return Some(warning);
        }
        None
    }

    /// Cache budget in bytes.
    #[must_use]
    pub fn cache_bytes(&self) -> usize {
        (self.cache.max_mb as usize) * 1024 * 1024
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_prefetch_neighbors() -> bool {
    true
}

fn default_cache_mb() -> u32 {
    32
}

fn default_cache_entries() -> usize {
    16
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(mut config) => {
                    let warning = config.sanitize();
                    return (config, warning);
                }
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!(
                            "could not read {}: {err}; using defaults",
                            path.display()
                        )),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns `Error::Io` when the file cannot be read and `Error::Config`
/// when it cannot be parsed.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
///
/// # Errors
///
/// Returns `Error::Io` when the file cannot be written.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
///
/// # Errors
///
/// Returns `Error::Io` when the file cannot be written.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
///
/// # Errors
///
/// Returns `Error::Io` when directories or the file cannot be written.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_uses_contiguous_blocks_and_grid_classes() {
        let config = Config::default();
        assert_eq!(config.layout.strategy, DistributionStrategy::ContiguousBlock);
        assert_eq!(config.layout.columns, ColumnsTable::default());
        assert!(config.lightbox.prefetch_neighbors);
        assert_eq!(config.cache.max_mb, 32);
        assert_eq!(config.general.image_format, ImageFormat::Webp);
        assert!(config.general.manifest.is_none());
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                manifest: Some("https://example.com/manifest.json".to_string()),
                image_format: ImageFormat::Jpg,
            },
            layout: LayoutConfig {
                strategy: DistributionStrategy::RoundRobin,
                columns: ColumnsTable {
                    small: 1,
                    medium: 2,
                    large: 4,
                },
            },
            lightbox: LightboxConfig {
                prefetch_neighbors: false,
            },
            cache: CacheConfig {
                max_mb: 64,
                max_entries: 24,
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(message.contains("expected")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[layout]\nstrategy = \"round-robin\"\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.layout.strategy, DistributionStrategy::RoundRobin);
        assert_eq!(loaded.layout.columns, ColumnsTable::default());
        assert!(loaded.lightbox.prefetch_neighbors);
    }

    #[test]
    fn load_with_override_missing_file_returns_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_unparseable_file_warns_and_falls_back() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[[[[broken")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        let warning = warning.expect("expected a warning");
        assert!(warning.contains("using defaults"));
    }

    #[test]
    fn zero_column_count_is_sanitized_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(
            temp_dir.path().join(CONFIG_FILE),
            "[layout.columns]\nsmall = 0\n",
        )
        .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config.layout.columns, ColumnsTable::default());
        let warning = warning.expect("expected a warning");
        assert!(warning.contains("columns.small"));
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("failed to save config");
        assert!(config_path.exists());
    }

    #[test]
    fn saved_file_uses_kebab_case_enum_values() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        let config = Config {
            layout: LayoutConfig {
                strategy: DistributionStrategy::RoundRobin,
                ..LayoutConfig::default()
            },
            ..Config::default()
        };
        save_to_path(&config, &config_path).expect("failed to save config");

        let content = fs::read_to_string(&config_path).expect("read config");
        assert!(content.contains("strategy = \"round-robin\""));
        assert!(content.contains("image_format = \"webp\""));
    }

    #[test]
    fn cache_bytes_converts_megabytes() {
        let mut config = Config::default();
        config.cache.max_mb = 8;
        assert_eq!(config.cache_bytes(), 8 * 1024 * 1024);
    }
}
