//! Raw records handed over by a source parser
//!
//! These mirror what a tokenizer can extract without any knowledge of the
//! rest of the codebase: names as written, modifiers as strings and
//! unresolved `extends`/`implements` references.

use serde::{Deserialize, Serialize};

fn public() -> String {
    "public".to_string()
}

/// Whether a raw record describes a class or an interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RawKind {
    Class,
    Interface,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawConstant {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawParameter {
    pub name: String,
    #[serde(default, rename = "type")]
    pub type_hint: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAttribute {
    pub name: String,
    #[serde(default = "public")]
    pub visibility: String,
    #[serde(default, rename = "type")]
    pub type_hint: Option<String>,
    #[serde(default)]
    pub is_static: bool,
}

impl RawAttribute {
    pub fn new(name: impl Into<String>, visibility: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: visibility.into(),
            type_hint: None,
            is_static: false,
        }
    }

    pub fn public(name: impl Into<String>) -> Self {
        Self::new(name, "public")
    }

    pub fn protected(name: impl Into<String>) -> Self {
        Self::new(name, "protected")
    }

    pub fn private(name: impl Into<String>) -> Self {
        Self::new(name, "private")
    }

    pub fn with_type(mut self, type_hint: impl Into<String>) -> Self {
        self.type_hint = Some(type_hint.into());
        self
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMethod {
    pub name: String,
    #[serde(default = "public")]
    pub visibility: String,
    #[serde(default)]
    pub parameters: Vec<RawParameter>,
    #[serde(default)]
    pub return_type: Option<String>,
    #[serde(default)]
    pub is_abstract: bool,
    #[serde(default)]
    pub is_static: bool,
}

impl RawMethod {
    pub fn new(name: impl Into<String>, visibility: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: visibility.into(),
            parameters: Vec::new(),
            return_type: None,
            is_abstract: false,
            is_static: false,
        }
    }

    pub fn public(name: impl Into<String>) -> Self {
        Self::new(name, "public")
    }

    pub fn protected(name: impl Into<String>) -> Self {
        Self::new(name, "protected")
    }

    pub fn private(name: impl Into<String>) -> Self {
        Self::new(name, "private")
    }

    pub fn with_parameter(mut self, name: impl Into<String>, type_hint: Option<&str>) -> Self {
        self.parameters.push(RawParameter {
            name: name.into(),
            type_hint: type_hint.map(str::to_string),
        });
        self
    }

    pub fn with_return_type(mut self, return_type: impl Into<String>) -> Self {
        self.return_type = Some(return_type.into());
        self
    }

    pub fn with_abstract(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }
}

/// One class or interface as extracted from source
///
/// Interfaces ignore `attributes` and `implements`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDefinition {
    pub kind: RawKind,
    pub name: String,
    #[serde(default)]
    pub constants: Vec<RawConstant>,
    #[serde(default)]
    pub attributes: Vec<RawAttribute>,
    #[serde(default)]
    pub methods: Vec<RawMethod>,
    #[serde(default)]
    pub extends: Option<String>,
    #[serde(default)]
    pub implements: Vec<String>,
}

impl RawDefinition {
    pub fn new(kind: RawKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            constants: Vec::new(),
            attributes: Vec::new(),
            methods: Vec::new(),
            extends: None,
            implements: Vec::new(),
        }
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::new(RawKind::Class, name)
    }

    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(RawKind::Interface, name)
    }

    pub fn with_constant(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.constants.push(RawConstant {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn with_attribute(mut self, attribute: RawAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn with_method(mut self, method: RawMethod) -> Self {
        self.methods.push(method);
        self
    }

    pub fn extending(mut self, parent: impl Into<String>) -> Self {
        self.extends = Some(parent.into());
        self
    }

    pub fn implementing<I, S>(mut self, interfaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.implements.extend(interfaces.into_iter().map(Into::into));
        self
    }

    /// Parse a JSON array of raw definitions
    pub fn list_from_json(json: &str) -> crate::core::Result<Vec<RawDefinition>> {
        Ok(serde_json::from_str(json)?)
    }
}
