//! Structure builder
//!
//! Turns the raw constructs extracted by a source parser into the definition
//! model. Raw records are plain data (deserializable from JSON); validation of
//! names and modifiers and member filtering happen here, so the graph side
//! only ever sees a well-formed, already filtered [`Codebase`](crate::code::Codebase).

mod filters;
mod raw;
mod structure;

pub use filters::{MembersFilter, PrivateVisibilityFilter, ProtectedVisibilityFilter, VisibilityFilter};
pub use raw::{RawAttribute, RawConstant, RawDefinition, RawKind, RawMethod, RawParameter};
pub use structure::StructureBuilder;
