//! Class and interface definitions

use super::{Attribute, Constant, Method, Name, Parameter, Visibility};

/// A parsed class
///
/// `extends` and `implements` hold the names as written in the source. They
/// are resolved against the owning [`Codebase`](super::Codebase) when the
/// graph is built, and names with no matching definition are simply left
/// dangling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDefinition {
    name: Name,
    constants: Vec<Constant>,
    methods: Vec<Method>,
    attributes: Vec<Attribute>,
    extends: Option<Name>,
    implements: Vec<Name>,
}

impl ClassDefinition {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            constants: Vec::new(),
            methods: Vec::new(),
            attributes: Vec::new(),
            extends: None,
            implements: Vec::new(),
        }
    }

    pub fn with_constants(mut self, constants: Vec<Constant>) -> Self {
        self.constants = constants;
        self
    }

    pub fn with_methods(mut self, methods: Vec<Method>) -> Self {
        self.methods = methods;
        self
    }

    pub fn with_attributes(mut self, attributes: Vec<Attribute>) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn extending(mut self, parent: Option<Name>) -> Self {
        self.extends = parent;
        self
    }

    pub fn implementing(mut self, interfaces: Vec<Name>) -> Self {
        self.implements = interfaces;
        self
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn constants(&self) -> &[Constant] {
        &self.constants
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Declared parent name, resolved or not
    pub fn extends(&self) -> Option<&Name> {
        self.extends.as_ref()
    }

    pub fn has_parent(&self) -> bool {
        self.extends.is_some()
    }

    /// Declared interface names, in declaration order
    pub fn implements(&self) -> &[Name] {
        &self.implements
    }

    /// A class is abstract as soon as one of its methods is
    pub fn is_abstract(&self) -> bool {
        self.methods.iter().any(Method::is_abstract)
    }

    /// Constants share the attributes block with attributes
    pub fn has_attributes(&self) -> bool {
        self.constants.len() + self.attributes.len() > 0
    }

    pub fn has_methods(&self) -> bool {
        !self.methods.is_empty()
    }

    /// Parameters of the constructor, or nothing when the class does not
    /// declare exactly one
    pub fn constructor_parameters(&self) -> &[Parameter] {
        let mut constructors = self.methods.iter().filter(|m| m.is_constructor());
        match (constructors.next(), constructors.next()) {
            (Some(constructor), None) => constructor.parameters(),
            _ => &[],
        }
    }

    pub fn count_attributes_by_visibility(&self, visibility: Visibility) -> usize {
        self.attributes
            .iter()
            .filter(|a| a.has_visibility(visibility))
            .count()
    }

    pub fn count_typed_attributes_by_visibility(&self, visibility: Visibility) -> usize {
        self.attributes
            .iter()
            .filter(|a| a.has_type_declaration() && a.has_visibility(visibility))
            .count()
    }
}

/// A parsed interface
///
/// Interfaces never carry attributes, only constants and methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDefinition {
    name: Name,
    constants: Vec<Constant>,
    methods: Vec<Method>,
    extends: Option<Name>,
}

impl InterfaceDefinition {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            constants: Vec::new(),
            methods: Vec::new(),
            extends: None,
        }
    }

    pub fn with_constants(mut self, constants: Vec<Constant>) -> Self {
        self.constants = constants;
        self
    }

    pub fn with_methods(mut self, methods: Vec<Method>) -> Self {
        self.methods = methods;
        self
    }

    pub fn extending(mut self, parent: Option<Name>) -> Self {
        self.extends = parent;
        self
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn constants(&self) -> &[Constant] {
        &self.constants
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub fn extends(&self) -> Option<&Name> {
        self.extends.as_ref()
    }

    pub fn has_parent(&self) -> bool {
        self.extends.is_some()
    }

    pub fn has_attributes(&self) -> bool {
        !self.constants.is_empty()
    }

    pub fn has_methods(&self) -> bool {
        !self.methods.is_empty()
    }
}

/// Either kind of definition found in a codebase
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Definition {
    Class(ClassDefinition),
    Interface(InterfaceDefinition),
}

impl Definition {
    pub fn name(&self) -> &Name {
        match self {
            Definition::Class(class) => class.name(),
            Definition::Interface(interface) => interface.name(),
        }
    }

    pub fn constants(&self) -> &[Constant] {
        match self {
            Definition::Class(class) => class.constants(),
            Definition::Interface(interface) => interface.constants(),
        }
    }

    pub fn methods(&self) -> &[Method] {
        match self {
            Definition::Class(class) => class.methods(),
            Definition::Interface(interface) => interface.methods(),
        }
    }

    pub fn extends(&self) -> Option<&Name> {
        match self {
            Definition::Class(class) => class.extends(),
            Definition::Interface(interface) => interface.extends(),
        }
    }

    pub fn has_attributes(&self) -> bool {
        match self {
            Definition::Class(class) => class.has_attributes(),
            Definition::Interface(interface) => interface.has_attributes(),
        }
    }

    pub fn has_methods(&self) -> bool {
        !self.methods().is_empty()
    }

    pub fn as_class(&self) -> Option<&ClassDefinition> {
        match self {
            Definition::Class(class) => Some(class),
            Definition::Interface(_) => None,
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceDefinition> {
        match self {
            Definition::Interface(interface) => Some(interface),
            Definition::Class(_) => None,
        }
    }

    pub fn is_class(&self) -> bool {
        matches!(self, Definition::Class(_))
    }

    pub fn is_interface(&self) -> bool {
        matches!(self, Definition::Interface(_))
    }
}

impl From<ClassDefinition> for Definition {
    fn from(class: ClassDefinition) -> Self {
        Definition::Class(class)
    }
}

impl From<InterfaceDefinition> for Definition {
    fn from(interface: InterfaceDefinition) -> Self {
        Definition::Interface(interface)
    }
}
