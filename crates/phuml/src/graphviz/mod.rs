//! Digraph construction and printing
//!
//! Graph builders turn each definition into an ordered list of
//! [`DotElement`]s. The printer applies a [`DigraphStyle`] to every node and
//! serializes the whole list as a Graphviz DOT document.

pub mod builders;
mod elements;
mod printer;
mod style;
mod templates;

pub use builders::{
    AssociationsBuilder, ClassGraphBuilder, EdgesBuilder, InterfaceGraphBuilder,
    NoAssociationsBuilder,
};
pub use elements::{DotElement, Edge, EdgeKind, Node};
pub use printer::{DigraphPrinter, DIGRAPH_NAME};
pub use style::{DigraphStyle, LabelMember, LabelStyle, NodeLabel, Theme};
