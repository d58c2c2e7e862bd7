//! Configuration for mdblocks applications.
//!
//! The defaults live in `defaults/mdblocks.default.toml`, which is compiled in, so a
//! binary with no config file on disk still has every key. [`Loader`] stacks files and
//! overrides on top and deserializes the result into [`MdblocksConfig`]; the `From`
//! impls turn its sections into the library's option types.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use mdblocks::formats::markdown::OutlineRules;
use mdblocks::{PipelineOptions, RenderMode};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/mdblocks.default.toml");

/// Top-level configuration consumed by mdblocks applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MdblocksConfig {
    pub parse: ParseConfig,
    pub render: RenderConfig,
    pub convert: ConvertConfig,
    pub inspect: InspectConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParseConfig {
    pub max_nesting_depth: usize,
}

impl From<&ParseConfig> for PipelineOptions {
    fn from(config: &ParseConfig) -> Self {
        PipelineOptions {
            max_nesting_depth: config.max_nesting_depth,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub mode: RenderMode,
}

/// Format-specific conversion knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub outline: OutlineConfig,
}

/// Mirrors the knobs exposed by the Markdown outline serializer.
#[derive(Debug, Clone, Deserialize)]
pub struct OutlineConfig {
    pub indent_string: String,
    pub bullet: char,
}

impl From<&OutlineConfig> for OutlineRules {
    fn from(config: &OutlineConfig) -> Self {
        OutlineRules {
            indent_string: config.indent_string.clone(),
            bullet: config.bullet,
        }
    }
}

/// Controls inspect output.
#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    pub show_icons: bool,
}

/// Builds an [`MdblocksConfig`] from the embedded defaults plus any layers added on top.
///
/// Later layers win: files in the order they were added, then overrides.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        Loader {
            builder: Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    /// Add a TOML file that must exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// Add a TOML file that is skipped when absent (e.g. `mdblocks.toml` in the working
    /// directory).
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    /// Override one dotted key, e.g. `render.mode`.
    pub fn set_override<V>(self, key: &str, value: V) -> Result<Self, ConfigError>
    where
        V: Into<ValueKind>,
    {
        Ok(Loader {
            builder: self.builder.set_override(key, value)?,
        })
    }

    pub fn build(self) -> Result<MdblocksConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }

    fn layer(self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        Loader {
            builder: self.builder.add_source(source),
        }
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults with nothing layered on top.
pub fn load_defaults() -> Result<MdblocksConfig, ConfigError> {
    Loader::new().build()
}
