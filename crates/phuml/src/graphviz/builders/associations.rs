use tracing::trace;

use crate::code::{ClassDefinition, Codebase, Name, TypeDeclaration};
use crate::graphviz::Edge;

/// Extracts association edges from a class
pub trait AssociationsBuilder: Send + Sync {
    /// Associations declared by typed attributes, then by typed constructor
    /// parameters
    fn from_attributes<'a>(
        &self,
        class: &'a ClassDefinition,
        codebase: &'a Codebase,
    ) -> Vec<Edge<'a>>;

    /// Get the builder name
    fn name(&self) -> &'static str;
}

/// Emits one association per type hint naming another definition
///
/// Builtin types, unknown names and references back to the class itself
/// produce nothing. The same target may come up more than once; duplicates
/// are removed by the printer.
#[derive(Debug, Default, Clone, Copy)]
pub struct EdgesBuilder;

impl EdgesBuilder {
    pub fn new() -> Self {
        Self
    }
}

impl AssociationsBuilder for EdgesBuilder {
    fn from_attributes<'a>(
        &self,
        class: &'a ClassDefinition,
        codebase: &'a Codebase,
    ) -> Vec<Edge<'a>> {
        let attribute_types = class
            .attributes()
            .iter()
            .filter_map(|attribute| attribute.type_declaration());
        let parameter_types = class
            .constructor_parameters()
            .iter()
            .filter_map(|parameter| parameter.type_declaration());

        attribute_types
            .chain(parameter_types)
            .filter_map(|type_declaration| resolve(type_declaration, class, codebase))
            .map(|reference| Edge::association(reference, class.name()))
            .collect()
    }

    fn name(&self) -> &'static str {
        "edges"
    }
}

fn resolve<'a>(
    type_declaration: &TypeDeclaration,
    class: &ClassDefinition,
    codebase: &'a Codebase,
) -> Option<&'a Name> {
    let referenced = type_declaration.referenced_name()?;
    let definition = codebase.get(referenced)?;
    if definition.name() == class.name() {
        trace!(class = %class.name(), "Skipping self association");
        return None;
    }
    Some(definition.name())
}

/// Never emits associations
#[derive(Debug, Default, Clone, Copy)]
pub struct NoAssociationsBuilder;

impl NoAssociationsBuilder {
    pub fn new() -> Self {
        Self
    }
}

impl AssociationsBuilder for NoAssociationsBuilder {
    fn from_attributes<'a>(
        &self,
        _class: &'a ClassDefinition,
        _codebase: &'a Codebase,
    ) -> Vec<Edge<'a>> {
        Vec::new()
    }

    fn name(&self) -> &'static str {
        "none"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::{Attribute, Method, Parameter, Variable, Visibility};
    use crate::graphviz::EdgeKind;

    fn name(n: &str) -> Name {
        Name::new(n).unwrap()
    }

    fn typed(n: &str, t: &str) -> Variable {
        Variable::new(name(n), TypeDeclaration::from_text(Some(t)))
    }

    fn codebase_with(class: ClassDefinition) -> Codebase {
        let mut codebase = Codebase::new();
        codebase.add(ClassDefinition::new(name("Customer"))).unwrap();
        codebase.add(ClassDefinition::new(name("Address"))).unwrap();
        codebase.add(class).unwrap();
        codebase
    }

    fn order() -> ClassDefinition {
        ClassDefinition::new(name("Order"))
            .with_attributes(vec![
                Attribute::new(typed("customer", "Customer"), Visibility::Private),
                Attribute::new(typed("total", "float"), Visibility::Private),
                Attribute::new(typed("parent", "Order"), Visibility::Private),
                Attribute::new(typed("coupon", "Coupon"), Visibility::Private),
            ])
            .with_methods(vec![Method::new(name("__construct"), Visibility::Public)
                .with_parameters(vec![
                    Parameter::new(typed("shipping", "?Address")),
                    Parameter::new(Variable::new(name("notes"), None)),
                ])])
    }

    #[test]
    fn test_edges_from_attributes_then_constructor() {
        let codebase = codebase_with(order());
        let class = codebase.get("Order").and_then(|d| d.as_class()).unwrap();

        let edges = EdgesBuilder::new().from_attributes(class, &codebase);
        let sources: Vec<_> = edges.iter().map(|e| e.source().as_str()).collect();
        assert_eq!(sources, vec!["Customer", "Address"]);
        assert!(edges.iter().all(|e| e.kind() == EdgeKind::Association));
        assert!(edges.iter().all(|e| e.target().as_str() == "Order"));
    }

    #[test]
    fn test_repeated_types_are_all_reported() {
        let class = ClassDefinition::new(name("Order")).with_attributes(vec![
            Attribute::new(typed("billing", "Customer"), Visibility::Private),
            Attribute::new(typed("shipping", "Customer"), Visibility::Private),
        ]);
        let codebase = codebase_with(class);
        let class = codebase.get("Order").and_then(|d| d.as_class()).unwrap();

        assert_eq!(EdgesBuilder::new().from_attributes(class, &codebase).len(), 2);
    }

    #[test]
    fn test_no_associations_builder_is_empty() {
        let codebase = codebase_with(order());
        let class = codebase.get("Order").and_then(|d| d.as_class()).unwrap();

        assert!(NoAssociationsBuilder::new()
            .from_attributes(class, &codebase)
            .is_empty());
        assert_eq!(NoAssociationsBuilder.name(), "none");
    }
}
