use crate::code::{Codebase, InterfaceDefinition};
use crate::graphviz::{DotElement, Edge, Node};

/// Builds the elements representing an interface: its node, then an
/// inheritance edge when its parent is in the codebase
#[derive(Debug, Default, Clone, Copy)]
pub struct InterfaceGraphBuilder;

impl InterfaceGraphBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn extract_from<'a>(
        &self,
        interface: &'a InterfaceDefinition,
        codebase: &'a Codebase,
    ) -> Vec<DotElement<'a>> {
        let mut elements = vec![DotElement::Node(Node::Interface(interface))];
        if let Some(parent) = codebase.parent_of_interface(interface) {
            elements.push(Edge::inheritance(parent.name(), interface.name()).into());
        }
        elements
    }
}
