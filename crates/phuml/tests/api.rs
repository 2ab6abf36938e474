//! Integration tests for the public API

use phuml::prelude::*;
use phuml::{generate_digraph, generate_digraph_from_json, generate_digraph_with_configuration, parse};

#[test]
fn test_generate_simple_hierarchy() {
    let raws = vec![
        RawDefinition::class("Shape"),
        RawDefinition::class("Circle").extending("Shape"),
        RawDefinition::class("Square").extending("Shape"),
    ];
    let dot = generate_digraph(&raws).unwrap();
    assert!(dot.contains("\"Shape\" -> \"Circle\""));
    assert!(dot.contains("\"Shape\" -> \"Square\""));
}

#[test]
fn test_generate_from_json() {
    let json = r#"[
        {
            "kind": "class",
            "name": "User",
            "attributes": [{"name": "email", "visibility": "private", "type": "string"}],
            "methods": [{"name": "login", "visibility": "public", "return_type": "bool"}]
        }
    ]"#;
    let dot = generate_digraph_from_json(json).unwrap();
    assert!(dot.contains("-email: string"));
    assert!(dot.contains("+login(): bool"));
}

#[test]
fn test_configuration_from_json() {
    let configuration =
        DigraphConfiguration::from_json(r#"{"hide_methods": true, "theme": "classic"}"#).unwrap();
    let raws = vec![RawDefinition::class("User").with_method(RawMethod::public("login"))];

    let dot = generate_digraph_with_configuration(&raws, &configuration).unwrap();
    assert!(!dot.contains("login"));
    assert!(dot.contains("#fcaf3e"));
}

#[test]
fn test_parse_then_process() {
    let raws = vec![
        RawDefinition::interface("Comparable"),
        RawDefinition::class("Item").implementing(["Comparable"]),
    ];
    let codebase = parse(&raws).unwrap();
    assert_eq!(codebase.len(), 2);

    let processor = GraphvizProcessor::from_configuration(&DigraphConfiguration::default()).unwrap();
    let elements = processor.elements(&codebase);
    assert_eq!(elements.len(), 3);

    let dot = processor.process(&codebase).unwrap();
    assert!(dot.contains("\"Comparable\" -> \"Item\" [dir=back arrowtail=empty style=dashed]"));
}

#[test]
fn test_custom_pipeline() {
    let raws = vec![
        RawDefinition::class("Customer"),
        RawDefinition::class("Order")
            .with_attribute(RawAttribute::private("customer").with_type("Customer")),
    ];
    let codebase = StructureBuilder::new().build(&raws).unwrap();

    let processor = GraphvizProcessor::new(
        ClassGraphBuilder::with_associations(false),
        InterfaceGraphBuilder::new(),
        DigraphPrinter::new(DigraphStyle::with_non_empty_blocks(ThemeName::Php)).unwrap(),
    );
    let dot = processor.process(&codebase).unwrap();
    assert!(!dot.contains("arrowtail=vee"));
    assert!(dot.contains("-customer: Customer"));
}

#[test]
fn test_generator_with_statistics() {
    let raws = vec![
        RawDefinition::class("User").with_attribute(RawAttribute::public("name")),
        RawDefinition::interface("Entity"),
    ];
    let generator = DigraphGenerator::new(StructureBuilder::new())
        .with_processor(Box::new(StatisticsProcessor::new().unwrap()));

    let text = generator.generate(&raws).unwrap();
    assert!(text.contains("Classes:    1"));
    assert!(text.contains("Interfaces: 1"));
}

#[test]
fn test_summary_from_codebase() {
    let raws = vec![RawDefinition::class("User")
        .with_attribute(RawAttribute::private("id").with_type("int"))
        .with_attribute(RawAttribute::private("name"))];
    let summary = Summary::from(&parse(&raws).unwrap());
    assert_eq!(summary.private_attributes, 2);
    assert_eq!(summary.typed_private_attributes, 1);
}
