//! The ordered collection of every definition found in one run

use indexmap::IndexMap;

use super::{ClassDefinition, Definition, InterfaceDefinition, Name};
use crate::core::{PhumlError, Result};

/// Every definition discovered in one run, keyed by name
///
/// Insertion order is preserved and is the order in which nodes appear in the
/// digraph. The codebase owns all definitions; relationships between them are
/// resolved by name through the lookup methods below.
#[derive(Debug, Clone, Default)]
pub struct Codebase {
    definitions: IndexMap<Name, Definition>,
}

impl Codebase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a definition, failing if its name is already taken
    pub fn add(&mut self, definition: impl Into<Definition>) -> Result<()> {
        let definition = definition.into();
        if self.definitions.contains_key(definition.name()) {
            return Err(PhumlError::duplicate_definition(definition.name().as_str()));
        }
        self.definitions
            .insert(definition.name().clone(), definition);
        Ok(())
    }

    pub fn has(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Definition> {
        self.definitions.get(name)
    }

    /// Definitions in insertion order
    pub fn definitions(&self) -> impl Iterator<Item = &Definition> {
        self.definitions.values()
    }

    pub fn classes(&self) -> impl Iterator<Item = &ClassDefinition> {
        self.definitions().filter_map(Definition::as_class)
    }

    pub fn interfaces(&self) -> impl Iterator<Item = &InterfaceDefinition> {
        self.definitions().filter_map(Definition::as_interface)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Parent of a class, only if it names a class in this codebase
    pub fn parent_of_class(&self, class: &ClassDefinition) -> Option<&ClassDefinition> {
        class
            .extends()
            .and_then(|parent| self.get(parent.as_str()))
            .and_then(Definition::as_class)
    }

    /// Parent of an interface, whatever kind of definition it names
    pub fn parent_of_interface(&self, interface: &InterfaceDefinition) -> Option<&Definition> {
        interface
            .extends()
            .and_then(|parent| self.get(parent.as_str()))
    }

    /// Interfaces implemented by a class that are present in this codebase,
    /// in declaration order
    pub fn interfaces_of<'a>(
        &'a self,
        class: &'a ClassDefinition,
    ) -> impl Iterator<Item = &'a InterfaceDefinition> + 'a {
        class
            .implements()
            .iter()
            .filter_map(|name| self.get(name.as_str()))
            .filter_map(Definition::as_interface)
    }
}
