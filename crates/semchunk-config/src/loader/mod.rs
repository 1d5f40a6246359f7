//! Configuration loading from various sources

pub mod env;
pub mod file;
pub mod formats;
pub mod merge;

use crate::{Config, Result, Validate};
pub use merge::{ChunkerOverlay, ConfigOverlay, ModelOverlay};
use std::path::{Path, PathBuf};

/// Format for configuration files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
    /// JSON format (.json)
    Json,
}

/// Configuration source for layered loading
#[derive(Debug, Clone)]
pub enum ConfigSource {
    File(PathBuf),
    Environment,
    /// Explicit config object (for programmatic use); replaces every field
    Explicit(Config),
    /// Programmatic override of selected fields
    Overlay(ConfigOverlay),
}

/// Builder for loading and merging configurations
///
/// Precedence: defaults < file < environment < explicit overrides,
/// applied in the order sources were added. A source overrides exactly the
/// fields it sets, even when it sets them to their default value.
///
/// ```no_run
/// use semchunk_config::loader::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .with_file(".semchunk.toml")
///     .with_env()
///     .build()?;
/// # Ok::<(), semchunk_config::ConfigError>(())
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    sources: Vec<ConfigSource>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.sources
            .push(ConfigSource::File(path.as_ref().to_path_buf()));
        self
    }

    pub fn with_env(mut self) -> Self {
        self.sources.push(ConfigSource::Environment);
        self
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.sources.push(ConfigSource::Explicit(config));
        self
    }

    pub fn with_overlay(mut self, overlay: ConfigOverlay) -> Self {
        self.sources.push(ConfigSource::Overlay(overlay));
        self
    }

    /// Merge all sources in order and validate the result
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        for source in self.sources {
            let overlay = match source {
                ConfigSource::File(path) => file::load_overlay(&path)?,
                ConfigSource::Environment => match env::from_env() {
                    Some(env_overlay) => env_overlay,
                    None => continue,
                },
                ConfigSource::Explicit(explicit) => explicit.into(),
                ConfigSource::Overlay(overlay) => overlay,
            };
            config = merge::merge(config, overlay);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load from a single file (convenience method)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
        Self::new().with_file(path).build()
    }
}

impl Config {
    /// Load configuration from default locations
    ///
    /// Uses the first of `.semchunk.toml`, `.semchunk.yml`, `.semchunk.yaml`
    /// and `.semchunk.json` found in the working directory, then applies
    /// environment overlays. Without a file the defaults are used.
    pub fn load() -> Result<Self> {
        let default_paths = [
            ".semchunk.toml",
            ".semchunk.yml",
            ".semchunk.yaml",
            ".semchunk.json",
        ];

        let mut builder = ConfigBuilder::new();
        if let Some(path) = default_paths.iter().find(|p| Path::new(p).exists()) {
            builder = builder.with_file(path);
        }

        builder.with_env().build()
    }

    /// Load configuration from a specific file, then apply environment overlays
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        ConfigBuilder::new().with_file(path).with_env().build()
    }
}
