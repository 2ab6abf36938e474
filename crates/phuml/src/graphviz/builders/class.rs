use tracing::trace;

use super::{AssociationsBuilder, EdgesBuilder, NoAssociationsBuilder};
use crate::code::{ClassDefinition, Codebase};
use crate::graphviz::{DotElement, Edge, Node};

/// Builds the elements representing a class
///
/// Order: the class node, the inheritance edge when the parent is a class in
/// the codebase, one implementation edge per resolved interface in
/// declaration order, then the associations.
pub struct ClassGraphBuilder {
    associations: Box<dyn AssociationsBuilder>,
}

impl ClassGraphBuilder {
    pub fn new(associations: Box<dyn AssociationsBuilder>) -> Self {
        Self { associations }
    }

    /// Pick the associations strategy from a flag
    pub fn with_associations(extract: bool) -> Self {
        if extract {
            Self::new(Box::new(EdgesBuilder::new()))
        } else {
            Self::new(Box::new(NoAssociationsBuilder::new()))
        }
    }

    pub fn associations_builder(&self) -> &dyn AssociationsBuilder {
        self.associations.as_ref()
    }

    pub fn extract_from<'a>(
        &self,
        class: &'a ClassDefinition,
        codebase: &'a Codebase,
    ) -> Vec<DotElement<'a>> {
        let mut elements = vec![DotElement::Node(Node::Class(class))];

        if let Some(parent) = codebase.parent_of_class(class) {
            elements.push(Edge::inheritance(parent.name(), class.name()).into());
        }

        elements.extend(
            codebase
                .interfaces_of(class)
                .map(|interface| DotElement::from(Edge::implementation(interface.name(), class.name()))),
        );

        elements.extend(
            self.associations
                .from_attributes(class, codebase)
                .into_iter()
                .map(DotElement::from),
        );

        trace!(class = %class.name(), elements = elements.len(), "Class elements extracted");
        elements
    }
}

impl Default for ClassGraphBuilder {
    fn default() -> Self {
        Self::with_associations(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::{Attribute, InterfaceDefinition, Name, TypeDeclaration, Variable, Visibility};
    use crate::graphviz::EdgeKind;

    fn name(n: &str) -> Name {
        Name::new(n).unwrap()
    }

    fn codebase() -> Codebase {
        let mut codebase = Codebase::new();
        codebase.add(ClassDefinition::new(name("Animal"))).unwrap();
        codebase.add(InterfaceDefinition::new(name("Pet"))).unwrap();
        codebase.add(InterfaceDefinition::new(name("Walker"))).unwrap();
        codebase.add(ClassDefinition::new(name("Owner"))).unwrap();
        codebase
            .add(
                ClassDefinition::new(name("Dog"))
                    .extending(Some(name("Animal")))
                    .implementing(vec![name("Walker"), name("Unknown"), name("Pet")])
                    .with_attributes(vec![Attribute::new(
                        Variable::new(name("owner"), TypeDeclaration::from_text(Some("Owner"))),
                        Visibility::Private,
                    )]),
            )
            .unwrap();
        codebase
    }

    fn describe(element: &DotElement<'_>) -> String {
        match element {
            DotElement::Node(node) => format!("node {}", node.name()),
            DotElement::Edge(edge) => {
                format!("{} {} -> {}", edge.kind(), edge.source(), edge.target())
            }
        }
    }

    #[test]
    fn test_element_order() {
        let codebase = codebase();
        let dog = codebase.get("Dog").and_then(|d| d.as_class()).unwrap();

        let elements = ClassGraphBuilder::default().extract_from(dog, &codebase);
        let described: Vec<_> = elements.iter().map(describe).collect();
        assert_eq!(
            described,
            vec![
                "node Dog",
                "inheritance Animal -> Dog",
                "implementation Walker -> Dog",
                "implementation Pet -> Dog",
                "association Owner -> Dog",
            ]
        );
    }

    #[test]
    fn test_without_associations() {
        let codebase = codebase();
        let dog = codebase.get("Dog").and_then(|d| d.as_class()).unwrap();

        let elements = ClassGraphBuilder::with_associations(false).extract_from(dog, &codebase);
        assert_eq!(elements.len(), 4);
        assert!(elements
            .iter()
            .filter_map(DotElement::as_edge)
            .all(|e| e.kind() != EdgeKind::Association));
    }

    #[test]
    fn test_unresolved_parent_has_no_edge() {
        let mut codebase = Codebase::new();
        codebase
            .add(ClassDefinition::new(name("Controller")).extending(Some(name("Base"))))
            .unwrap();
        let controller = codebase.get("Controller").and_then(|d| d.as_class()).unwrap();

        let elements = ClassGraphBuilder::default().extract_from(controller, &codebase);
        assert_eq!(elements, vec![DotElement::Node(Node::Class(controller))]);
    }
}
