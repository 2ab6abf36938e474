//! Graph builders
//!
//! Each builder turns one definition into the elements that represent it:
//! its node first, then the edges it declares, in a fixed order.

mod associations;
mod class;
mod interface;

pub use associations::{AssociationsBuilder, EdgesBuilder, NoAssociationsBuilder};
pub use class::ClassGraphBuilder;
pub use interface::InterfaceGraphBuilder;
