//! Definition model
//!
//! Immutable value types describing the classes and interfaces found in a
//! codebase. Instances are created by the structure builder and are read-only
//! afterwards; references between definitions are kept as [`Name`]s and
//! resolved through the owning [`Codebase`].

mod codebase;
mod definitions;
mod methods;
mod modifiers;
mod name;
mod variables;

pub use codebase::Codebase;
pub use definitions::{ClassDefinition, Definition, InterfaceDefinition};
pub use methods::{Method, CONSTRUCTOR_NAME};
pub use modifiers::Visibility;
pub use name::Name;
pub use variables::{Attribute, Constant, Parameter, TypeDeclaration, Variable};
