//! Builds the definition model from raw records

use tracing::{debug, info, span, trace, Level};

use super::{MembersFilter, RawAttribute, RawDefinition, RawKind, RawMethod};
use crate::code::{
    Attribute, ClassDefinition, Codebase, Constant, Definition, InterfaceDefinition, Method, Name,
    Parameter, TypeDeclaration, Variable,
};
use crate::core::{DigraphConfiguration, Result};

/// Assembles a [`Codebase`] from raw records
///
/// Every name and modifier is validated, members are filtered, and the
/// definitions are added in input order. References are stored by name only;
/// unknown parents and interfaces are kept as dangling names.
#[derive(Default)]
pub struct StructureBuilder {
    filter: MembersFilter,
}

impl StructureBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(filter: MembersFilter) -> Self {
        Self { filter }
    }

    pub fn from_configuration(configuration: &DigraphConfiguration) -> Self {
        Self::with_filter(MembersFilter::from_configuration(configuration))
    }

    pub fn build(&self, raws: &[RawDefinition]) -> Result<Codebase> {
        let build_span = span!(Level::INFO, "build_codebase", raw_count = raws.len());
        let _enter = build_span.enter();

        let mut codebase = Codebase::new();
        for raw in raws {
            trace!(name = %raw.name, kind = ?raw.kind, "Building definition");
            codebase.add(self.definition(raw)?)?;
        }

        log_dangling_references(&codebase);
        info!(
            definitions = codebase.len(),
            filters = ?self.filter.filter_names(),
            "Codebase built"
        );
        Ok(codebase)
    }

    fn definition(&self, raw: &RawDefinition) -> Result<Definition> {
        let name = Name::new(raw.name.as_str())?;
        let constants = raw
            .constants
            .iter()
            .map(|c| -> Result<Constant> {
                Ok(Constant::new(Name::new(c.name.as_str())?, c.value.as_str()))
            })
            .collect::<Result<Vec<_>>>()?;
        let methods = raw
            .methods
            .iter()
            .map(build_method)
            .collect::<Result<Vec<_>>>()?;
        let methods = self.filter.methods(methods);
        let extends = raw.extends.as_deref().map(Name::new).transpose()?;

        Ok(match raw.kind {
            RawKind::Class => {
                let attributes = raw
                    .attributes
                    .iter()
                    .map(build_attribute)
                    .collect::<Result<Vec<_>>>()?;
                let implements = raw
                    .implements
                    .iter()
                    .map(|i| Name::new(i.as_str()))
                    .collect::<Result<Vec<_>>>()?;

                ClassDefinition::new(name)
                    .with_constants(constants)
                    .with_methods(methods)
                    .with_attributes(self.filter.attributes(attributes))
                    .extending(extends)
                    .implementing(implements)
                    .into()
            }
            RawKind::Interface => {
                if !raw.attributes.is_empty() || !raw.implements.is_empty() {
                    debug!(name = %raw.name, "Ignoring attributes and implements on interface");
                }
                InterfaceDefinition::new(name)
                    .with_constants(constants)
                    .with_methods(methods)
                    .extending(extends)
                    .into()
            }
        })
    }
}

fn build_attribute(raw: &RawAttribute) -> Result<Attribute> {
    let variable = Variable::new(
        Name::new(raw.name.as_str())?,
        TypeDeclaration::from_text(raw.type_hint.as_deref()),
    );
    Ok(Attribute::new(variable, raw.visibility.parse()?).with_static(raw.is_static))
}

fn build_method(raw: &RawMethod) -> Result<Method> {
    let parameters = raw
        .parameters
        .iter()
        .map(|p| -> Result<Parameter> {
            Ok(Parameter::new(Variable::new(
                Name::new(p.name.as_str())?,
                TypeDeclaration::from_text(p.type_hint.as_deref()),
            )))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Method::new(Name::new(raw.name.as_str())?, raw.visibility.parse()?)
        .with_parameters(parameters)
        .with_return_type(TypeDeclaration::from_text(raw.return_type.as_deref()))
        .with_abstract(raw.is_abstract)
        .with_static(raw.is_static))
}

fn log_dangling_references(codebase: &Codebase) {
    for definition in codebase.definitions() {
        let implements = definition
            .as_class()
            .map(ClassDefinition::implements)
            .unwrap_or_default();
        for reference in definition.extends().into_iter().chain(implements) {
            if !codebase.has(reference.as_str()) {
                debug!(
                    definition = %definition.name(),
                    reference = %reference,
                    "Unresolved reference"
                );
            }
        }
    }
}
