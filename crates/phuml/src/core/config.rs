//! Run configuration
//!
//! A [`DigraphConfiguration`] is read once per run and decides three things:
//! which members survive the structure builder's filters, whether association
//! edges are extracted, and how labels are styled.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Color palettes available to the label style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Phuml,
    Php,
    Classic,
}

impl ThemeName {
    /// Get all valid theme names
    pub fn variants() -> &'static [&'static str] {
        &["phuml", "php", "classic"]
    }
}

impl FromStr for ThemeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "phuml" => Ok(ThemeName::Phuml),
            "php" => Ok(ThemeName::Php),
            "classic" => Ok(ThemeName::Classic),
            _ => Err(format!(
                "Unknown theme: {} (expected one of {})",
                s,
                Self::variants().join(", ")
            )),
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeName::Phuml => write!(f, "phuml"),
            ThemeName::Php => write!(f, "php"),
            ThemeName::Classic => write!(f, "classic"),
        }
    }
}

/// Configuration knobs for one diagram generation run
///
/// Missing fields take their default when deserialized, so a partial JSON
/// document such as `{"hide_private": true}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DigraphConfiguration {
    /// Drop every attribute before the model is built
    pub hide_attributes: bool,
    /// Drop every method before the model is built
    pub hide_methods: bool,
    /// Drop private attributes and methods
    pub hide_private: bool,
    /// Drop protected attributes and methods
    pub hide_protected: bool,
    /// Emit association edges for typed attributes and constructor parameters
    pub extract_associations: bool,
    /// Omit empty attribute and method blocks from labels
    pub hide_empty_blocks: bool,
    /// Color palette used for labels and edges
    pub theme: ThemeName,
}

impl Default for DigraphConfiguration {
    fn default() -> Self {
        Self {
            hide_attributes: false,
            hide_methods: false,
            hide_private: false,
            hide_protected: false,
            extract_associations: true,
            hide_empty_blocks: false,
            theme: ThemeName::default(),
        }
    }
}

impl DigraphConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hidden_attributes(mut self, hide: bool) -> Self {
        self.hide_attributes = hide;
        self
    }

    pub fn with_hidden_methods(mut self, hide: bool) -> Self {
        self.hide_methods = hide;
        self
    }

    pub fn with_hidden_private(mut self, hide: bool) -> Self {
        self.hide_private = hide;
        self
    }

    pub fn with_hidden_protected(mut self, hide: bool) -> Self {
        self.hide_protected = hide;
        self
    }

    pub fn with_associations(mut self, extract: bool) -> Self {
        self.extract_associations = extract;
        self
    }

    pub fn with_hidden_empty_blocks(mut self, hide: bool) -> Self {
        self.hide_empty_blocks = hide;
        self
    }

    pub fn with_theme(mut self, theme: ThemeName) -> Self {
        self.theme = theme;
        self
    }

    /// Parse a configuration from a JSON document
    pub fn from_json(json: &str) -> crate::core::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration() {
        let config = DigraphConfiguration::default();
        assert!(config.extract_associations);
        assert!(!config.hide_empty_blocks);
        assert!(!config.hide_private);
        assert_eq!(config.theme, ThemeName::Phuml);
    }

    #[test]
    fn test_builder_methods() {
        let config = DigraphConfiguration::new()
            .with_associations(false)
            .with_hidden_empty_blocks(true)
            .with_hidden_protected(true)
            .with_theme(ThemeName::Classic);

        assert!(!config.extract_associations);
        assert!(config.hide_empty_blocks);
        assert!(config.hide_protected);
        assert_eq!(config.theme, ThemeName::Classic);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config =
            DigraphConfiguration::from_json(r#"{"hide_private": true, "theme": "php"}"#).unwrap();
        assert!(config.hide_private);
        assert!(config.extract_associations);
        assert_eq!(config.theme, ThemeName::Php);
    }

    #[test]
    fn test_invalid_json_is_an_input_error() {
        let err = DigraphConfiguration::from_json(r#"{"theme": "neon"}"#).unwrap_err();
        assert!(err.to_string().contains("Input error"));
    }

    #[test]
    fn test_theme_name_parsing() {
        assert_eq!("PHP".parse::<ThemeName>().unwrap(), ThemeName::Php);
        assert_eq!("classic".parse::<ThemeName>().unwrap(), ThemeName::Classic);
        assert!("neon".parse::<ThemeName>().is_err());
        assert_eq!(ThemeName::Phuml.to_string(), "phuml");
    }
}
