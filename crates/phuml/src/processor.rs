//! Processors turn a finished codebase into output text
//!
//! [`GraphvizProcessor`] runs the graph builders over every definition and
//! hands the elements to the printer. [`DigraphGenerator`] wires the structure
//! builder in front of a processor so a run goes from raw records to text.

use tracing::{debug, info, span, trace, Level};

use crate::code::{Codebase, Definition};
use crate::core::{DigraphConfiguration, PhumlError, Result};
use crate::graphviz::{ClassGraphBuilder, DigraphPrinter, DotElement, InterfaceGraphBuilder};
use crate::parser::{RawDefinition, StructureBuilder};

/// Anything that renders a codebase as text
pub trait Processor {
    /// Get the processor name
    fn name(&self) -> &'static str;

    fn process(&self, codebase: &Codebase) -> Result<String>;
}

/// Produces a DOT digraph for a codebase
pub struct GraphvizProcessor {
    class_builder: ClassGraphBuilder,
    interface_builder: InterfaceGraphBuilder,
    printer: DigraphPrinter,
}

impl GraphvizProcessor {
    pub fn new(
        class_builder: ClassGraphBuilder,
        interface_builder: InterfaceGraphBuilder,
        printer: DigraphPrinter,
    ) -> Self {
        Self {
            class_builder,
            interface_builder,
            printer,
        }
    }

    pub fn from_configuration(configuration: &DigraphConfiguration) -> Result<Self> {
        Ok(Self::new(
            ClassGraphBuilder::with_associations(configuration.extract_associations),
            InterfaceGraphBuilder::new(),
            DigraphPrinter::from_configuration(configuration)?,
        ))
    }

    /// Every element of the digraph, definition by definition in codebase
    /// order
    pub fn elements<'a>(&self, codebase: &'a Codebase) -> Vec<DotElement<'a>> {
        let mut elements = Vec::new();
        for definition in codebase.definitions() {
            let extracted = match definition {
                Definition::Class(class) => self.class_builder.extract_from(class, codebase),
                Definition::Interface(interface) => {
                    self.interface_builder.extract_from(interface, codebase)
                }
            };
            trace!(
                definition = %definition.name(),
                elements = extracted.len(),
                "Extracted definition"
            );
            elements.extend(extracted);
        }
        elements
    }
}

impl Processor for GraphvizProcessor {
    fn name(&self) -> &'static str {
        "graphviz"
    }

    fn process(&self, codebase: &Codebase) -> Result<String> {
        let process_span = span!(
            Level::INFO,
            "process_codebase",
            definitions = codebase.len(),
            associations = self.class_builder.associations_builder().name()
        );
        let _enter = process_span.enter();

        info!("Starting digraph generation");
        let elements = self.elements(codebase);
        debug!(elements = elements.len(), "Graph elements extracted");

        let output = self.printer.print(&elements)?;
        info!(bytes = output.len(), "Digraph generated");
        Ok(output)
    }
}

/// Runs the structure builder, then a processor
pub struct DigraphGenerator {
    builder: StructureBuilder,
    processor: Option<Box<dyn Processor>>,
}

impl DigraphGenerator {
    pub fn new(builder: StructureBuilder) -> Self {
        Self {
            builder,
            processor: None,
        }
    }

    pub fn with_processor(mut self, processor: Box<dyn Processor>) -> Self {
        self.processor = Some(processor);
        self
    }

    /// Structure builder and Graphviz processor for a configuration
    pub fn from_configuration(configuration: &DigraphConfiguration) -> Result<Self> {
        Ok(Self::new(StructureBuilder::from_configuration(configuration))
            .with_processor(Box::new(GraphvizProcessor::from_configuration(configuration)?)))
    }

    pub fn generate(&self, raws: &[RawDefinition]) -> Result<String> {
        let processor = self
            .processor
            .as_ref()
            .ok_or_else(|| PhumlError::missing_collaborator("processor"))?;

        let codebase = self.builder.build(raws)?;
        debug!(processor = processor.name(), "Running processor");
        processor.process(&codebase)
    }
}
