//! Core abstractions shared by the whole pipeline
//!
//! Error types, logging setup and the run configuration live here. Everything
//! else in the crate depends on this module, never the other way around.

mod config;
mod error;
pub mod logging;

pub use config::*;
pub use error::*;
pub use logging::*;
