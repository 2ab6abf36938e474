//! Identifier type shared by definitions and members

use std::borrow::Borrow;
use std::fmt;

use crate::core::{PhumlError, Result};

/// A validated identifier
///
/// Names are compared by exact string value and are the join key used to
/// resolve `extends`, `implements` and typed members against a codebase.
/// Namespace separators (`\`) are allowed; whitespace and control characters
/// are not.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() || name.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(PhumlError::invalid_name(name));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Name {
    type Error = PhumlError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert_eq!(Name::new("Animal").unwrap().as_str(), "Animal");
        assert_eq!(Name::new("App\\Model\\User").unwrap().to_string(), "App\\Model\\User");
        assert_eq!(Name::new("__construct").unwrap().as_ref(), "__construct");
    }

    #[test]
    fn test_invalid_names() {
        assert!(Name::new("").is_err());
        assert!(Name::new("Foo Bar").is_err());
        assert!(Name::new("Foo\n").is_err());
        assert!(Name::try_from("\t").is_err());
    }

    #[test]
    fn test_equality_is_by_value() {
        assert_eq!(Name::new("Dog").unwrap(), Name::try_from("Dog").unwrap());
        assert_ne!(Name::new("Dog").unwrap(), Name::new("dog").unwrap());
    }
}
