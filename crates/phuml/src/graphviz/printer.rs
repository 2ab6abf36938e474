//! Serializes graph elements as a DOT document

use indexmap::IndexSet;
use minijinja::Environment;
use serde::Serialize;
use tracing::{debug, span, Level};

use super::elements::dot_id;
use super::templates::{self, DIGRAPH, LABEL};
use super::{DigraphStyle, DotElement, Edge, Node, Theme};
use crate::core::{DigraphConfiguration, Result};

/// Name written in the digraph header
pub const DIGRAPH_NAME: &str = "phUML";

#[derive(Serialize)]
struct NodeStatement {
    id: String,
    label: String,
}

#[derive(Serialize)]
struct EdgeStatement {
    source: String,
    target: String,
    attributes: &'static str,
}

#[derive(Serialize)]
struct DigraphContext<'a> {
    name: &'a str,
    theme: &'a Theme,
    nodes: Vec<NodeStatement>,
    edges: Vec<EdgeStatement>,
}

/// Renders an ordered element list as Graphviz DOT
///
/// Nodes are written first in the order they were produced, then the edges.
/// Repeated edges, whatever their kind, are written once at the position of
/// their first occurrence.
pub struct DigraphPrinter {
    style: DigraphStyle,
    templates: Environment<'static>,
}

impl DigraphPrinter {
    pub fn new(style: DigraphStyle) -> Result<Self> {
        Ok(Self {
            style,
            templates: templates::environment()?,
        })
    }

    pub fn from_configuration(configuration: &DigraphConfiguration) -> Result<Self> {
        Self::new(DigraphStyle::from_configuration(configuration))
    }

    pub fn style(&self) -> &DigraphStyle {
        &self.style
    }

    pub fn print(&self, elements: &[DotElement<'_>]) -> Result<String> {
        let print_span = span!(Level::DEBUG, "print_digraph", elements = elements.len());
        let _enter = print_span.enter();

        let nodes = elements
            .iter()
            .filter_map(DotElement::as_node)
            .map(|node| self.node_statement(node))
            .collect::<Result<Vec<_>>>()?;

        let all_edges: Vec<&Edge<'_>> = elements.iter().filter_map(DotElement::as_edge).collect();
        let unique_edges: IndexSet<&Edge<'_>> = all_edges.iter().copied().collect();
        if unique_edges.len() < all_edges.len() {
            debug!(
                removed = all_edges.len() - unique_edges.len(),
                "Removed duplicate edges"
            );
        }
        let edges = unique_edges
            .into_iter()
            .map(|edge| EdgeStatement {
                source: dot_id(edge.source()),
                target: dot_id(edge.target()),
                attributes: self.style.edge_style_for(edge.kind()),
            })
            .collect::<Vec<_>>();

        debug!(nodes = nodes.len(), edges = edges.len(), "Rendering digraph");
        let output = self.templates.get_template(DIGRAPH)?.render(DigraphContext {
            name: DIGRAPH_NAME,
            theme: self.style.theme(),
            nodes,
            edges,
        })?;
        Ok(output)
    }

    fn node_statement(&self, node: &Node<'_>) -> Result<NodeStatement> {
        let label = self
            .templates
            .get_template(LABEL)?
            .render(self.style.label_for(node))?;
        Ok(NodeStatement {
            id: node.id(),
            label,
        })
    }
}
