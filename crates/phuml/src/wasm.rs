//! WebAssembly bindings for phUML
//!
//! Browser-friendly wrappers around the generation pipeline. Input is the raw
//! record JSON accepted by the CLI; errors are returned as JavaScript
//! exceptions.

use wasm_bindgen::prelude::*;

use crate::core::DigraphConfiguration;
use crate::parser::{RawDefinition, StructureBuilder};
use crate::processor::{DigraphGenerator, Processor};
use crate::summary::{StatisticsProcessor, Summary};

/// Initialize WASM module
///
/// Sets up panic hooks and logging for better error messages in the browser.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    use crate::core::logging::init_logging;
    let _ = init_logging(Some("info"), None);
}

fn to_js(error: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&error.to_string())
}

/// Generate a DOT digraph from raw record JSON
///
/// # Arguments
/// * `input` - JSON array of raw definitions
/// * `configuration` - optional JSON configuration, e.g. `{"hide_private": true}`
#[wasm_bindgen]
pub fn generate_digraph(input: &str, configuration: Option<String>) -> Result<String, JsValue> {
    let configuration = match configuration {
        Some(json) => DigraphConfiguration::from_json(&json).map_err(to_js)?,
        None => DigraphConfiguration::default(),
    };
    let raws = RawDefinition::list_from_json(input).map_err(to_js)?;

    DigraphGenerator::from_configuration(&configuration)
        .and_then(|generator| generator.generate(&raws))
        .map_err(to_js)
}

/// Codebase statistics as plain text
#[wasm_bindgen]
pub fn statistics(input: &str) -> Result<String, JsValue> {
    let raws = RawDefinition::list_from_json(input).map_err(to_js)?;
    let codebase = StructureBuilder::new().build(&raws).map_err(to_js)?;
    StatisticsProcessor::new()
        .and_then(|processor| processor.process(&codebase))
        .map_err(to_js)
}

/// Codebase statistics as a JSON object
#[wasm_bindgen]
pub fn statistics_json(input: &str) -> Result<String, JsValue> {
    let raws = RawDefinition::list_from_json(input).map_err(to_js)?;
    let codebase = StructureBuilder::new().build(&raws).map_err(to_js)?;
    serde_json::to_string(&Summary::from(&codebase)).map_err(to_js)
}
