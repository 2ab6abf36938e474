//! phUML - Generate UML class diagrams as Graphviz DOT
//!
//! A library that turns the classes and interfaces found in a codebase into
//! a DOT digraph: one node per definition, plus inheritance, implementation
//! and association edges. The DOT text is meant to be rendered by Graphviz.
//!
//! # Quick Start
//!
//! ```rust
//! use phuml::generate_digraph_from_json;
//!
//! let input = r#"[
//!     {"kind": "class", "name": "Animal"},
//!     {"kind": "class", "name": "Dog", "extends": "Animal"}
//! ]"#;
//! let dot = generate_digraph_from_json(input).unwrap();
//! assert!(dot.contains(r#""Animal" -> "Dog""#));
//! ```
//!
//! # Advanced Usage
//!
//! For more control, use the individual components:
//!
//! ```rust
//! use phuml::prelude::*;
//!
//! let raws = vec![
//!     RawDefinition::interface("Comparable"),
//!     RawDefinition::class("Item").implementing(["Comparable"]),
//! ];
//!
//! // Build the definition model
//! let configuration = DigraphConfiguration::new().with_hidden_empty_blocks(true);
//! let codebase = StructureBuilder::from_configuration(&configuration)
//!     .build(&raws)
//!     .unwrap();
//! assert_eq!(codebase.len(), 2);
//!
//! // Print it
//! let processor = GraphvizProcessor::from_configuration(&configuration).unwrap();
//! let dot = processor.process(&codebase).unwrap();
//! assert!(dot.contains("style=dashed"));
//! ```

pub mod code;
pub mod core;
pub mod graphviz;
pub mod parser;
pub mod processor;
pub mod summary;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use crate::core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::code::{
        Attribute, ClassDefinition, Codebase, Constant, Definition, InterfaceDefinition, Method,
        Name, Parameter, TypeDeclaration, Variable, Visibility,
    };
    pub use crate::core::{DigraphConfiguration, PhumlError, ThemeName};
    pub use crate::graphviz::{
        ClassGraphBuilder, DigraphPrinter, DigraphStyle, DotElement, Edge, EdgeKind,
        InterfaceGraphBuilder, Node,
    };
    pub use crate::parser::{RawAttribute, RawDefinition, RawMethod, StructureBuilder};
    pub use crate::processor::{DigraphGenerator, GraphvizProcessor, Processor};
    pub use crate::summary::{StatisticsProcessor, Summary};
}

/// Generate a DOT digraph from raw records with the default configuration
///
/// # Example
/// ```rust
/// use phuml::generate_digraph;
/// use phuml::parser::RawDefinition;
///
/// let dot = generate_digraph(&[RawDefinition::class("User")]).unwrap();
/// assert!(dot.starts_with("digraph \"phUML\" {"));
/// assert!(dot.contains("<b>User</b>"));
/// ```
pub fn generate_digraph(raws: &[parser::RawDefinition]) -> anyhow::Result<String> {
    generate_digraph_with_configuration(raws, &DigraphConfiguration::default())
}

/// Generate a DOT digraph from raw records with an explicit configuration
///
/// # Example
/// ```rust
/// use phuml::{generate_digraph_with_configuration, DigraphConfiguration};
/// use phuml::parser::{RawAttribute, RawDefinition};
///
/// let raws = vec![
///     RawDefinition::class("Customer"),
///     RawDefinition::class("Order")
///         .with_attribute(RawAttribute::private("customer").with_type("Customer")),
/// ];
/// let configuration = DigraphConfiguration::new().with_associations(false);
/// let dot = generate_digraph_with_configuration(&raws, &configuration).unwrap();
/// assert!(!dot.contains("arrowtail=vee"));
/// ```
pub fn generate_digraph_with_configuration(
    raws: &[parser::RawDefinition],
    configuration: &DigraphConfiguration,
) -> anyhow::Result<String> {
    let generator = processor::DigraphGenerator::from_configuration(configuration)?;
    Ok(generator.generate(raws)?)
}

/// Generate a DOT digraph from a JSON array of raw records
pub fn generate_digraph_from_json(json: &str) -> anyhow::Result<String> {
    let raws = parser::RawDefinition::list_from_json(json)?;
    generate_digraph(&raws)
}

/// Build the definition model without printing it
///
/// # Example
/// ```rust
/// use phuml::parse;
/// use phuml::parser::RawDefinition;
///
/// let codebase = parse(&[RawDefinition::class("A"), RawDefinition::interface("B")]).unwrap();
/// assert_eq!(codebase.classes().count(), 1);
/// assert_eq!(codebase.interfaces().count(), 1);
/// ```
pub fn parse(raws: &[parser::RawDefinition]) -> anyhow::Result<code::Codebase> {
    Ok(parser::StructureBuilder::new().build(raws)?)
}
