//! Graph primitives

use std::fmt;

use crate::code::{ClassDefinition, Definition, InterfaceDefinition, Name};

/// Quote a name as a DOT identifier
pub(crate) fn dot_id(name: &Name) -> String {
    let escaped = name.as_str().replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

/// One definition to be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node<'a> {
    Class(&'a ClassDefinition),
    Interface(&'a InterfaceDefinition),
}

impl<'a> Node<'a> {
    pub fn name(&self) -> &'a Name {
        match *self {
            Node::Class(class) => class.name(),
            Node::Interface(interface) => interface.name(),
        }
    }

    pub fn id(&self) -> String {
        dot_id(self.name())
    }

    pub fn is_interface(&self) -> bool {
        matches!(self, Node::Interface(_))
    }

    pub fn is_abstract(&self) -> bool {
        match *self {
            Node::Class(class) => class.is_abstract(),
            Node::Interface(_) => false,
        }
    }
}

impl<'a> From<&'a Definition> for Node<'a> {
    fn from(definition: &'a Definition) -> Self {
        match definition {
            Definition::Class(class) => Node::Class(class),
            Definition::Interface(interface) => Node::Interface(interface),
        }
    }
}

/// Relationship drawn between two nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    Inheritance,
    Implementation,
    Association,
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeKind::Inheritance => write!(f, "inheritance"),
            EdgeKind::Implementation => write!(f, "implementation"),
            EdgeKind::Association => write!(f, "association"),
        }
    }
}

/// A directed edge between two resolved definitions
///
/// `source` is the related definition (parent, interface or associated type)
/// and `target` is the definition that declared the relationship. The arrow is
/// drawn backwards, pointing at the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<'a> {
    kind: EdgeKind,
    source: &'a Name,
    target: &'a Name,
}

impl<'a> Edge<'a> {
    pub fn inheritance(parent: &'a Name, child: &'a Name) -> Self {
        Self {
            kind: EdgeKind::Inheritance,
            source: parent,
            target: child,
        }
    }

    pub fn implementation(interface: &'a Name, class: &'a Name) -> Self {
        Self {
            kind: EdgeKind::Implementation,
            source: interface,
            target: class,
        }
    }

    pub fn association(reference: &'a Name, owner: &'a Name) -> Self {
        Self {
            kind: EdgeKind::Association,
            source: reference,
            target: owner,
        }
    }

    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    pub fn source(&self) -> &'a Name {
        self.source
    }

    pub fn target(&self) -> &'a Name {
        self.target
    }
}

/// Anything with a statement in the DOT output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotElement<'a> {
    Node(Node<'a>),
    Edge(Edge<'a>),
}

impl<'a> DotElement<'a> {
    pub fn as_node(&self) -> Option<&Node<'a>> {
        match self {
            DotElement::Node(node) => Some(node),
            DotElement::Edge(_) => None,
        }
    }

    pub fn as_edge(&self) -> Option<&Edge<'a>> {
        match self {
            DotElement::Edge(edge) => Some(edge),
            DotElement::Node(_) => None,
        }
    }
}

impl<'a> From<Node<'a>> for DotElement<'a> {
    fn from(node: Node<'a>) -> Self {
        DotElement::Node(node)
    }
}

impl<'a> From<Edge<'a>> for DotElement<'a> {
    fn from(edge: Edge<'a>) -> Self {
        DotElement::Edge(edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(n: &str) -> Name {
        Name::new(n).unwrap()
    }

    #[test]
    fn test_dot_id_quotes_and_escapes() {
        assert_eq!(dot_id(&name("Animal")), "\"Animal\"");
        assert_eq!(dot_id(&name("App\\User")), "\"App\\\\User\"");
        assert_eq!(dot_id(&name("Odd\"Name")), "\"Odd\\\"Name\"");
    }

    #[test]
    fn test_node_from_definition() {
        let class: Definition = ClassDefinition::new(name("Dog")).into();
        let interface: Definition = InterfaceDefinition::new(name("Pet")).into();

        let node = Node::from(&class);
        assert_eq!(node.name().as_str(), "Dog");
        assert!(!node.is_interface());
        assert!(Node::from(&interface).is_interface());
    }

    #[test]
    fn test_edge_constructors() {
        let parent = name("Animal");
        let child = name("Dog");
        let edge = Edge::inheritance(&parent, &child);
        assert_eq!(edge.kind(), EdgeKind::Inheritance);
        assert_eq!(edge.source().as_str(), "Animal");
        assert_eq!(edge.target().as_str(), "Dog");

        assert_eq!(Edge::implementation(&parent, &child).kind(), EdgeKind::Implementation);
        assert_eq!(Edge::association(&parent, &child).kind(), EdgeKind::Association);
        assert_eq!(EdgeKind::Association.to_string(), "association");
    }
}
