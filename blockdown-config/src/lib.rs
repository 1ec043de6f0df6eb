//! Shared configuration loader for the blockdown toolchain.
//!
//! `defaults/blockdown.default.toml` is embedded into every binary so that
//! docs and runtime behavior stay in sync. Applications layer user-specific
//! files on top of those defaults via [`Loader`] before deserializing into
//! [`BlockdownConfig`].

use blockdown::ConvertOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/blockdown.default.toml");

/// Top-level configuration consumed by blockdown applications.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockdownConfig {
    pub editorjs: EditorJsConfig,
    pub markdown: MarkdownConfig,
    pub quote: QuoteConfig,
}

/// Knobs for synthesized Editor.js documents.
#[derive(Debug, Clone, Deserialize)]
pub struct EditorJsConfig {
    pub version: String,
}

/// Knobs for rendered markdown output.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkdownConfig {
    pub width: usize,
}

/// Knobs for synthesized quote blocks.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteConfig {
    pub alignment: String,
}

impl From<&BlockdownConfig> for ConvertOptions {
    fn from(config: &BlockdownConfig) -> Self {
        ConvertOptions {
            version: config.editorjs.version.clone(),
            quote_alignment: config.quote.alignment.clone(),
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<BlockdownConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<BlockdownConfig, ConfigError> {
    Loader::new().build()
}
