//! Presentation settings for help output.
//!
//! # Example YAML
//!
//! ```yaml
//! program_name: gates
//! name_width: 13
//! description_width: 65
//! indent: 2
//! format: text
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{HelpError, Result};

/// Supported help output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Column layout for terminals (the default).
    #[default]
    Text,
    Markdown,
    Json,
    Yaml,
}

/// Layout settings used by [`render`](crate::render) and
/// [`TextPresenter`](crate::TextPresenter).
///
/// Missing fields take their defaults when deserializing.
///
/// # Examples
///
/// ```
/// use argent_help::{HelpConfig, OutputFormat};
///
/// let config = HelpConfig::from_yaml_str("program_name: gates\nformat: markdown\n").unwrap();
/// assert_eq!(config.program_name.as_deref(), Some("gates"));
/// assert_eq!(config.format, OutputFormat::Markdown);
/// assert_eq!(config.name_width, 13);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpConfig {
    /// Name shown for the root command. Defaults to the basename of the
    /// running executable.
    pub program_name: Option<String>,
    /// Width of the name column in listings.
    pub name_width: usize,
    /// Width at which descriptions wrap.
    pub description_width: usize,
    /// Spaces before each listing row.
    pub indent: usize,
    /// Output format.
    pub format: OutputFormat,
}

impl Default for HelpConfig {
    fn default() -> Self {
        Self {
            program_name: None,
            name_width: 13,
            description_width: 65,
            indent: 2,
            format: OutputFormat::Text,
        }
    }
}

impl HelpConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](HelpError::IoError) if the file cannot be read,
    /// [`YamlError`](HelpError::YamlError) if parsing fails, or
    /// [`InvalidConfig`](HelpError::InvalidConfig) for unusable widths.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config: Self = serde_yaml::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    /// Sets the program name shown for the root command.
    pub fn with_program_name(mut self, name: impl Into<String>) -> Self {
        self.program_name = Some(name.into());
        self
    }

    /// Sets the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Rejects a zero description width.
    pub fn validate(&self) -> Result<()> {
        if self.description_width == 0 {
            return Err(HelpError::InvalidConfig(
                "description_width must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
