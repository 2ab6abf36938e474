//! Codebase statistics

use minijinja::{AutoEscape, Environment};
use serde::Serialize;

use crate::code::{Codebase, Visibility};
use crate::core::Result;
use crate::processor::Processor;

const STATISTICS: &str = "statistics.txt";

const STATISTICS_TEMPLATE: &str = r#"phUML generated statistics
==========================

General statistics
------------------

Classes:    {{ classes }}
Interfaces: {{ interfaces }}
Abstract classes: {{ abstract_classes }}

Attributes: {{ attributes }} ({{ typed_attributes }} are typed)
    * private:   {{ private_attributes }} ({{ typed_private_attributes }} typed)
    * protected: {{ protected_attributes }} ({{ typed_protected_attributes }} typed)
    * public:    {{ public_attributes }} ({{ typed_public_attributes }} typed)

Constants: {{ constants }}

Methods: {{ methods }}
    * private:   {{ private_methods }}
    * protected: {{ protected_methods }}
    * public:    {{ public_methods }}
    * static:    {{ static_methods }}
    * abstract:  {{ abstract_methods }}

Average statistics
------------------

Attributes per class: {{ attributes_per_class }}
Methods per class:    {{ methods_per_class }}
"#;

/// Counts gathered over a whole codebase
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Summary {
    pub classes: usize,
    pub interfaces: usize,
    pub abstract_classes: usize,
    pub constants: usize,
    pub attributes: usize,
    pub typed_attributes: usize,
    pub public_attributes: usize,
    pub typed_public_attributes: usize,
    pub protected_attributes: usize,
    pub typed_protected_attributes: usize,
    pub private_attributes: usize,
    pub typed_private_attributes: usize,
    pub methods: usize,
    pub public_methods: usize,
    pub protected_methods: usize,
    pub private_methods: usize,
    pub static_methods: usize,
    pub abstract_methods: usize,
    pub attributes_per_class: f64,
    pub methods_per_class: f64,
}

impl From<&Codebase> for Summary {
    fn from(codebase: &Codebase) -> Self {
        let mut summary = Summary::default();

        for class in codebase.classes() {
            summary.classes += 1;
            if class.is_abstract() {
                summary.abstract_classes += 1;
            }
            summary.public_attributes += class.count_attributes_by_visibility(Visibility::Public);
            summary.protected_attributes +=
                class.count_attributes_by_visibility(Visibility::Protected);
            summary.private_attributes += class.count_attributes_by_visibility(Visibility::Private);
            summary.typed_public_attributes +=
                class.count_typed_attributes_by_visibility(Visibility::Public);
            summary.typed_protected_attributes +=
                class.count_typed_attributes_by_visibility(Visibility::Protected);
            summary.typed_private_attributes +=
                class.count_typed_attributes_by_visibility(Visibility::Private);
        }
        summary.interfaces = codebase.interfaces().count();

        for definition in codebase.definitions() {
            summary.constants += definition.constants().len();
            for method in definition.methods() {
                summary.methods += 1;
                match method.visibility() {
                    Visibility::Public => summary.public_methods += 1,
                    Visibility::Protected => summary.protected_methods += 1,
                    Visibility::Private => summary.private_methods += 1,
                }
                if method.is_static() {
                    summary.static_methods += 1;
                }
                if method.is_abstract() {
                    summary.abstract_methods += 1;
                }
            }
        }

        summary.attributes =
            summary.public_attributes + summary.protected_attributes + summary.private_attributes;
        summary.typed_attributes = summary.typed_public_attributes
            + summary.typed_protected_attributes
            + summary.typed_private_attributes;

        let class_methods: usize = codebase.classes().map(|c| c.methods().len()).sum();
        summary.attributes_per_class = average(summary.attributes, summary.classes);
        summary.methods_per_class = average(class_methods, summary.classes);
        summary
    }
}

/// Two decimal places, zero for an empty codebase
fn average(total: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    (total as f64 / count as f64 * 100.0).round() / 100.0
}

/// Renders a [`Summary`] as plain text
pub struct StatisticsProcessor {
    templates: Environment<'static>,
}

impl StatisticsProcessor {
    pub fn new() -> Result<Self> {
        let mut templates = Environment::new();
        templates.set_keep_trailing_newline(true);
        templates.set_auto_escape_callback(|_| AutoEscape::None);
        templates.add_template(STATISTICS, STATISTICS_TEMPLATE)?;
        Ok(Self { templates })
    }
}

impl Processor for StatisticsProcessor {
    fn name(&self) -> &'static str {
        "statistics"
    }

    fn process(&self, codebase: &Codebase) -> Result<String> {
        let summary = Summary::from(codebase);
        Ok(self.templates.get_template(STATISTICS)?.render(&summary)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{RawAttribute, RawDefinition, RawMethod, StructureBuilder};

    fn codebase() -> Codebase {
        let raws = vec![
            RawDefinition::interface("Shape")
                .with_constant("SIDES", "0")
                .with_method(RawMethod::public("area").with_return_type("float")),
            RawDefinition::class("Polygon")
                .implementing(["Shape"])
                .with_attribute(RawAttribute::private("points").with_type("array"))
                .with_attribute(RawAttribute::protected("name"))
                .with_method(RawMethod::public("area").with_abstract(true))
                .with_method(RawMethod::private("check").with_static(true)),
            RawDefinition::class("Square")
                .extending("Polygon")
                .with_attribute(RawAttribute::public("side").with_type("float")),
        ];
        StructureBuilder::new().build(&raws).unwrap()
    }

    #[test]
    fn test_summary_counts() {
        let summary = Summary::from(&codebase());
        assert_eq!(summary.classes, 2);
        assert_eq!(summary.interfaces, 1);
        assert_eq!(summary.abstract_classes, 1);
        assert_eq!(summary.constants, 1);
        assert_eq!(summary.attributes, 3);
        assert_eq!(summary.typed_attributes, 2);
        assert_eq!(summary.protected_attributes, 1);
        assert_eq!(summary.typed_protected_attributes, 0);
        assert_eq!(summary.methods, 3);
        assert_eq!(summary.public_methods, 2);
        assert_eq!(summary.static_methods, 1);
        assert_eq!(summary.abstract_methods, 1);
        assert_eq!(summary.attributes_per_class, 1.5);
        assert_eq!(summary.methods_per_class, 1.0);
    }

    #[test]
    fn test_empty_codebase() {
        let summary = Summary::from(&Codebase::new());
        assert_eq!(summary, Summary::default());
    }

    #[test]
    fn test_statistics_text() {
        let output = StatisticsProcessor::new()
            .unwrap()
            .process(&codebase())
            .unwrap();
        assert!(output.starts_with("phUML generated statistics"));
        assert!(output.contains("Classes:    2"));
        assert!(output.contains("Attributes: 3 (2 are typed)"));
        assert!(output.contains("Attributes per class: 1.5"));
        assert!(output.ends_with('\n'));
    }
}
