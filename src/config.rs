//! Configuration management for whitespace-tools.
//!
//! This module provides the [`Config`] struct carrying the spacer defaults
//! that are not baked into the CLI. Configuration can be loaded from:
//! - TOML files (`whitespace-tools.toml`)
//! - CLI arguments (which override file settings)
//!
//! Config files are auto-discovered by searching parent directories of the
//! working directory up to the filesystem root, plus the user's home
//! directory; more specific files override less specific ones.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Config file names to search for (in order of priority, later overrides earlier)
const CONFIG_FILE_NAMES: &[&str] = &["whitespace-tools.toml"];

/// Get the user's home directory
fn dirs_home() -> Option<PathBuf> {
    // Try HOME environment variable first (works on Unix and some Windows setups)
    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home));
    }
    // Fallback for Windows
    if let Ok(userprofile) = std::env::var("USERPROFILE") {
        return Some(PathBuf::from(userprofile));
    }
    None
}

// Serde default functions
fn default_tab_size() -> usize {
    2
}

/// Main configuration struct for whitespace-tools
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Tab width assumed for existing indentation, in spaces (default: 2)
    #[serde(default = "default_tab_size")]
    pub tab_size: usize,

    /// Round leftover spaces down to a whole number of tabs when tabifying
    /// (default: false)
    #[serde(default)]
    pub round: bool,
}

/// Partial configuration for TOML parsing
///
/// All fields are `Option<T>` so we can distinguish between
/// "explicitly set" and "not specified" when merging configs.
#[derive(Debug, Clone, Default, Deserialize)]
struct PartialConfig {
    pub tab_size: Option<usize>,
    pub round: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tab_size: 2,
            round: false,
        }
    }
}

impl Config {
    /// Maximum reasonable tab width
    const MAX_TAB_SIZE: usize = 16;

    /// Validate configuration values are within reasonable bounds
    ///
    /// Returns an error message if validation fails, None if valid.
    #[must_use]
    pub fn validate(&self) -> Option<String> {
        if self.tab_size == 0 {
            return Some("tab_size must be at least 1".to_string());
        }
        if self.tab_size > Self::MAX_TAB_SIZE {
            return Some(format!(
                "tab_size {} exceeds maximum of {}",
                self.tab_size,
                Self::MAX_TAB_SIZE
            ));
        }
        None
    }

    /// Load configuration from a TOML file
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let partial: PartialConfig = toml::from_str(&contents)?;
        let mut config = Self::default();
        config.apply_partial(&partial);
        Ok(config)
    }

    /// Apply a partial config, only overriding fields that are explicitly set
    fn apply_partial(&mut self, partial: &PartialConfig) {
        if let Some(v) = partial.tab_size {
            self.tab_size = v;
        }
        if let Some(v) = partial.round {
            self.round = v;
        }
    }

    /// Discover config files from ancestors of a starting directory
    ///
    /// Returns config file paths in merge order: the home directory config
    /// first (lowest priority), then ancestor directories from the root
    /// down to `start_dir`.
    #[must_use]
    pub fn discover_config_files(start_dir: &Path) -> Vec<PathBuf> {
        let mut config_files = Vec::new();

        // Home directory config has the lowest priority
        if let Some(home) = dirs_home() {
            for config_name in CONFIG_FILE_NAMES {
                let home_config = home.join(config_name);
                if home_config.is_file() {
                    config_files.push(home_config);
                }
            }
        }

        let mut ancestors: Vec<PathBuf> = start_dir.ancestors().map(Path::to_path_buf).collect();
        // Reverse so we go from root to start_dir (less specific to more specific)
        ancestors.reverse();

        for ancestor in ancestors {
            for config_name in CONFIG_FILE_NAMES {
                let config_path = ancestor.join(config_name);
                if config_path.is_file() && !config_files.contains(&config_path) {
                    config_files.push(config_path);
                }
            }
        }

        config_files
    }

    /// Build a config by merging all discovered files in priority order.
    ///
    /// Unreadable or invalid files are skipped; discovery never fails the
    /// run.
    #[must_use]
    pub fn from_discovered_files(start_dir: &Path) -> Self {
        let mut config = Self::default();
        for path in Self::discover_config_files(start_dir) {
            if let Ok(contents) = std::fs::read_to_string(&path) {
                if let Ok(partial) = toml::from_str::<PartialConfig>(&contents) {
                    config.apply_partial(&partial);
                }
            }
        }
        config
    }
}
