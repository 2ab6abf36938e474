//! Methods

use std::fmt;

use super::{Name, Parameter, TypeDeclaration, Visibility};

/// Conventional constructor identifier
pub const CONSTRUCTOR_NAME: &str = "__construct";

/// A class or interface method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    name: Name,
    visibility: Visibility,
    parameters: Vec<Parameter>,
    return_type: Option<TypeDeclaration>,
    is_abstract: bool,
    is_static: bool,
}

impl Method {
    pub fn new(name: Name, visibility: Visibility) -> Self {
        Self {
            name,
            visibility,
            parameters: Vec::new(),
            return_type: None,
            is_abstract: false,
            is_static: false,
        }
    }

    pub fn with_parameters(mut self, parameters: Vec<Parameter>) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_return_type(mut self, return_type: Option<TypeDeclaration>) -> Self {
        self.return_type = return_type;
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

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn has_visibility(&self, visibility: Visibility) -> bool {
        self.visibility == visibility
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn return_type(&self) -> Option<&TypeDeclaration> {
        self.return_type.as_ref()
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// Method names are case-insensitive, so `__Construct` counts too
    pub fn is_constructor(&self) -> bool {
        self.name.as_str().eq_ignore_ascii_case(CONSTRUCTOR_NAME)
    }
}

/// `+name(a: A, b): Type`
impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}(", self.visibility.glyph(), self.name)?;
        for (i, parameter) in self.parameters.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", parameter)?;
        }
        f.write_str(")")?;
        if let Some(return_type) = &self.return_type {
            write!(f, ": {}", return_type)?;
        }
        Ok(())
    }
}
