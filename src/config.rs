//! Builder configuration
//!
//! Defaults match the grid notation's conventions; a TOML file may override
//! any of them:
//!
//! ```toml
//! [builder]
//! label_prefix = "'"
//! growth_weight = 1
//! sticky = "nsew"
//! strict = false
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::builder::Sticky;

/// Errors that can occur when loading a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid sticky value '{value}': unexpected '{found}' (use n, s, e, w)")]
    InvalidSticky { value: String, found: char },
}

/// Options for [`ComponentBuilder`](crate::builder::ComponentBuilder)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Cells whose text starts with this character are literal labels
    pub label_prefix: char,

    /// Stretch weight given to every row and column of every frame
    pub growth_weight: u32,

    /// Default alignment of placed components
    pub sticky: Sticky,

    /// Reject layouts with overlapping cells
    pub strict: bool,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            label_prefix: '\'',
            growth_weight: 1,
            sticky: Sticky::NSEW,
            strict: false,
        }
    }
}

/// TOML structure for deserializing configurations
#[derive(Deserialize)]
struct TomlConfig {
    builder: Option<TomlBuilder>,
}

#[derive(Deserialize)]
struct TomlBuilder {
    label_prefix: Option<char>,
    growth_weight: Option<u32>,
    sticky: Option<String>,
    strict: Option<bool>,
}

impl BuilderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string; missing keys keep their defaults
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        let mut config = Self::default();
        let Some(builder) = parsed.builder else {
            return Ok(config);
        };

        if let Some(prefix) = builder.label_prefix {
            config.label_prefix = prefix;
        }
        if let Some(weight) = builder.growth_weight {
            config.growth_weight = weight;
        }
        if let Some(value) = builder.sticky {
            config.sticky = Sticky::parse(&value)
                .map_err(|found| ConfigError::InvalidSticky { value: value.clone(), found })?;
        }
        if let Some(strict) = builder.strict {
            config.strict = strict;
        }
        Ok(config)
    }

    /// Set the literal label prefix
    pub fn with_label_prefix(mut self, prefix: char) -> Self {
        self.label_prefix = prefix;
        self
    }

    /// Set the stretch weight of rows and columns
    pub fn with_growth_weight(mut self, weight: u32) -> Self {
        self.growth_weight = weight;
        self
    }

    /// Set the default alignment
    pub fn with_sticky(mut self, sticky: Sticky) -> Self {
        self.sticky = sticky;
        self
    }

    /// Enable or disable rejection of overlapping cells
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = BuilderConfig::default();
        assert_eq!(config.label_prefix, '\'');
        assert_eq!(config.growth_weight, 1);
        assert_eq!(config.sticky, Sticky::NSEW);
        assert!(!config.strict);
    }

    #[test]
    fn test_builder_pattern() {
        let config = BuilderConfig::new()
            .with_label_prefix('#')
            .with_growth_weight(0)
            .with_strict(true);

        assert_eq!(config.label_prefix, '#');
        assert_eq!(config.growth_weight, 0);
        assert!(config.strict);
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
[builder]
label_prefix = "~"
growth_weight = 2
sticky = "ew"
"#;
        let config = BuilderConfig::from_str(toml_str).expect("Should parse");
        assert_eq!(config.label_prefix, '~');
        assert_eq!(config.growth_weight, 2);
        assert_eq!(config.sticky, Sticky::EW);
        assert!(!config.strict);
    }

    #[test]
    fn test_parse_empty_toml() {
        let config = BuilderConfig::from_str("").expect("Should parse");
        assert_eq!(config, BuilderConfig::default());
    }

    #[test]
    fn test_invalid_sticky() {
        let result = BuilderConfig::from_str("[builder]\nsticky = \"nq\"");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidSticky { found: 'q', .. })
        ));
    }

    #[test]
    fn test_invalid_toml() {
        let result = BuilderConfig::from_str("[builder\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
