//! Configuration
//!
//! [`Config`] is loaded from `~/.dirtree.toml` and supplies defaults that the
//! command line can only switch on. [`TraversalConfig`] is the resolved,
//! read-only set of output flags shared by every level of a walk.

use crate::{Args, Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default cap on the number of paths analyzed in one run
pub const DEFAULT_MAX_PATHS: usize = 64;

/// Output flags for a traversal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalConfig {
    /// Draw branch glyphs instead of plain indentation
    pub tree: bool,
    /// Print per-path summaries and the grand total
    pub summary: bool,
    /// Print owner, group, size, blocks and type for each entry
    pub verbose: bool,
}

impl TraversalConfig {
    pub const TREE: u32 = 0x1;
    pub const SUMMARY: u32 = 0x2;
    pub const VERBOSE: u32 = 0x4;

    /// Build from a `TREE | SUMMARY | VERBOSE` bitmask
    pub fn from_bits(bits: u32) -> Self {
        Self {
            tree: bits & Self::TREE != 0,
            summary: bits & Self::SUMMARY != 0,
            verbose: bits & Self::VERBOSE != 0,
        }
    }

    pub fn bits(&self) -> u32 {
        let mut bits = 0;
        if self.tree {
            bits |= Self::TREE;
        }
        if self.summary {
            bits |= Self::SUMMARY;
        }
        if self.verbose {
            bits |= Self::VERBOSE;
        }
        bits
    }

    /// Merge command line flags with the config file defaults
    pub fn from_args_and_config(args: &Args, config: &Config) -> Self {
        Self {
            tree: args.tree || config.display.tree,
            summary: args.summary || config.display.summary,
            verbose: args.verbose || config.display.verbose,
        }
    }

    /// Whether branch glyphs are drawn; verbose output always uses them
    pub fn tree_view(&self) -> bool {
        self.tree || self.verbose
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default output flags
    #[serde(default)]
    pub display: DisplayConfig,

    /// Limits
    #[serde(default)]
    pub limits: LimitsConfig,
}

/// Output flags switched on by default
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub tree: bool,

    #[serde(default)]
    pub summary: bool,

    #[serde(default)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Maximum number of paths analyzed; the rest are ignored with a warning
    #[serde(default = "default_max_paths")]
    pub max_paths: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_paths: DEFAULT_MAX_PATHS,
        }
    }
}

impl Config {
    /// Load configuration from ~/.dirtree.toml
    pub fn load() -> Result<Self> {
        match get_config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                log::debug!("No home directory, using default config");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from `path`, falling back to defaults if it does
    /// not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config file found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        log::debug!("Loading config from {:?}", path);
        let content = fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&content)?;
        config.validate()?;

        Ok(config)
    }

    /// Write configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content)
            .map_err(|e| Error::config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.limits.max_paths == 0 {
            return Err(Error::config("limits.max_paths must be at least 1"));
        }
        Ok(())
    }
}

/// Get the path to the config file
fn get_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".dirtree.toml"))
}

fn default_max_paths() -> usize {
    DEFAULT_MAX_PATHS
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.display.tree);
        assert!(!config.display.summary);
        assert_eq!(config.limits.max_paths, DEFAULT_MAX_PATHS);
    }

    #[test]
    fn test_bits_layout() {
        let config = TraversalConfig::from_bits(TraversalConfig::TREE | TraversalConfig::VERBOSE);
        assert!(config.tree);
        assert!(!config.summary);
        assert!(config.verbose);
        assert_eq!(config.bits(), 0x5);
    }

    #[test]
    fn test_verbose_implies_tree_view() {
        let config = TraversalConfig::from_bits(TraversalConfig::VERBOSE);
        assert!(!config.tree);
        assert!(config.tree_view());
        assert!(!TraversalConfig::default().tree_view());
    }

    #[test]
    fn test_load_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dirtree.toml");
        fs::write(&path, "[display]\nsummary = true\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.display.summary);
        assert!(!config.display.verbose);
        assert_eq!(config.limits.max_paths, DEFAULT_MAX_PATHS);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("none.toml")).unwrap();
        assert_eq!(config.limits.max_paths, DEFAULT_MAX_PATHS);
    }

    #[test]
    fn test_zero_max_paths_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dirtree.toml");
        fs::write(&path, "[limits]\nmax_paths = 0\n").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(Error::ConfigError(_))
        ));
    }

    #[test]
    fn test_config_serialization() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dirtree.toml");
        let mut config = Config::default();
        config.display.tree = true;
        config.limits.max_paths = 3;
        config.save_to(&path).unwrap();

        let parsed = Config::load_from(&path).unwrap();
        assert!(parsed.display.tree);
        assert_eq!(parsed.limits.max_paths, 3);
    }
}
