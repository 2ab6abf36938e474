//! Variables, attributes, constants and parameters

use std::fmt;

use super::{Name, Visibility};

/// Type names that never refer to a definition in the codebase
const BUILTIN_TYPES: &[&str] = &[
    "int", "float", "bool", "string", "array", "callable", "iterable", "object", "mixed", "void",
    "null", "self", "static",
];

/// An optional type hint attached to a variable, parameter or return value
///
/// The raw text is kept verbatim for rendering. [`TypeDeclaration::referenced_name`]
/// strips nullability (`?Foo`), array notation (`Foo[]`) and a leading
/// namespace separator so that the hint can be matched against definition
/// names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeDeclaration(String);

impl TypeDeclaration {
    /// Returns `None` for a missing or blank hint
    pub fn from_text(text: Option<&str>) -> Option<Self> {
        text.map(str::trim)
            .filter(|t| !t.is_empty())
            .map(|t| Self(t.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_nullable(&self) -> bool {
        self.0.starts_with('?')
    }

    pub fn is_array(&self) -> bool {
        self.0.ends_with("[]")
    }

    pub fn is_builtin(&self) -> bool {
        let bare = self.bare();
        BUILTIN_TYPES.iter().any(|b| b.eq_ignore_ascii_case(bare))
    }

    /// Name of the definition this hint points at, if it can point at one
    pub fn referenced_name(&self) -> Option<&str> {
        if self.is_builtin() {
            return None;
        }
        let bare = self.bare();
        (!bare.is_empty()).then_some(bare)
    }

    fn bare(&self) -> &str {
        let text = self.0.trim_start_matches('?');
        let text = text.trim_end_matches("[]");
        text.trim_start_matches('\\')
    }
}

impl fmt::Display for TypeDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named, optionally typed value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    name: Name,
    type_declaration: Option<TypeDeclaration>,
}

impl Variable {
    pub fn new(name: Name, type_declaration: Option<TypeDeclaration>) -> Self {
        Self {
            name,
            type_declaration,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn type_declaration(&self) -> Option<&TypeDeclaration> {
        self.type_declaration.as_ref()
    }

    pub fn has_type_declaration(&self) -> bool {
        self.type_declaration.is_some()
    }
}

/// `name` or `name: Type`
impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.type_declaration {
            Some(t) => write!(f, "{}: {}", self.name, t),
            None => write!(f, "{}", self.name),
        }
    }
}

/// A class property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    variable: Variable,
    visibility: Visibility,
    is_static: bool,
}

impl Attribute {
    pub fn new(variable: Variable, visibility: Visibility) -> Self {
        Self {
            variable,
            visibility,
            is_static: false,
        }
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn name(&self) -> &Name {
        self.variable.name()
    }

    pub fn type_declaration(&self) -> Option<&TypeDeclaration> {
        self.variable.type_declaration()
    }

    pub fn has_type_declaration(&self) -> bool {
        self.variable.has_type_declaration()
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn has_visibility(&self, visibility: Visibility) -> bool {
        self.visibility == visibility
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }
}

/// `+name: Type`
impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.visibility.glyph(), self.variable)
    }
}

/// A class or interface constant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constant {
    name: Name,
    value: String,
}

impl Constant {
    pub fn new(name: Name, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Constants are always public: `+NAME = value`
impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_empty() {
            write!(f, "+{}", self.name)
        } else {
            write!(f, "+{} = {}", self.name, self.value)
        }
    }
}

/// A method parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    variable: Variable,
}

impl Parameter {
    pub fn new(variable: Variable) -> Self {
        Self { variable }
    }

    pub fn name(&self) -> &Name {
        self.variable.name()
    }

    pub fn type_declaration(&self) -> Option<&TypeDeclaration> {
        self.variable.type_declaration()
    }

    pub fn has_type_declaration(&self) -> bool {
        self.variable.has_type_declaration()
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.variable.fmt(f)
    }
}
