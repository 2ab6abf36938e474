//! Label style policy
//!
//! A [`DigraphStyle`] decides what goes into each node label and which
//! attributes each kind of edge is drawn with. It never adds or removes nodes
//! or edges, so both label styles produce the same graph topology.

use serde::Serialize;

use super::{EdgeKind, Node};
use crate::code::{Attribute, Constant, Method};
use crate::core::{DigraphConfiguration, ThemeName};

/// Color palette and font for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub font: &'static str,
    pub name_background: &'static str,
    pub name_font: &'static str,
    pub attributes_background: &'static str,
    pub methods_background: &'static str,
    pub member_font: &'static str,
    pub border: &'static str,
    pub edge: &'static str,
}

impl Theme {
    pub fn named(name: ThemeName) -> Self {
        match name {
            ThemeName::Phuml => Self {
                font: "Helvetica",
                name_background: "#3465a4",
                name_font: "#ffffff",
                attributes_background: "#eeeeec",
                methods_background: "#eeeeec",
                member_font: "#2e3436",
                border: "#2e3436",
                edge: "#2e3436",
            },
            ThemeName::Php => Self {
                font: "Helvetica",
                name_background: "#4f5b93",
                name_font: "#ffffff",
                attributes_background: "#e2e4ef",
                methods_background: "#e2e4ef",
                member_font: "#333333",
                border: "#777bb3",
                edge: "#777bb3",
            },
            ThemeName::Classic => Self {
                font: "Helvetica",
                name_background: "#fcaf3e",
                name_font: "#2e3436",
                attributes_background: "#eeeeec",
                methods_background: "#eeeeec",
                member_font: "#2e3436",
                border: "#000000",
                edge: "#2e3436",
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::named(ThemeName::default())
    }
}

/// Which label blocks are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelStyle {
    /// Both blocks always present, even when empty
    #[default]
    Default,
    /// Empty blocks are left out
    NonEmptyBlocks,
}

/// One line of a label block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelMember {
    pub text: String,
    pub is_abstract: bool,
    pub is_static: bool,
}

impl From<&Constant> for LabelMember {
    fn from(constant: &Constant) -> Self {
        Self {
            text: constant.to_string(),
            is_abstract: false,
            is_static: false,
        }
    }
}

impl From<&Attribute> for LabelMember {
    fn from(attribute: &Attribute) -> Self {
        Self {
            text: attribute.to_string(),
            is_abstract: false,
            is_static: attribute.is_static(),
        }
    }
}

impl From<&Method> for LabelMember {
    fn from(method: &Method) -> Self {
        Self {
            text: method.to_string(),
            is_abstract: method.is_abstract(),
            is_static: method.is_static(),
        }
    }
}

/// Everything the label template needs for one node
///
/// A block set to `None` is not rendered at all; `Some` with no members
/// renders as an empty cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeLabel {
    pub name: String,
    pub is_interface: bool,
    pub is_abstract: bool,
    pub attributes: Option<Vec<LabelMember>>,
    pub methods: Option<Vec<LabelMember>>,
    pub theme: Theme,
}

/// Label and edge styling for a whole digraph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DigraphStyle {
    label_style: LabelStyle,
    theme: Theme,
}

impl DigraphStyle {
    pub fn new(label_style: LabelStyle, theme: Theme) -> Self {
        Self { label_style, theme }
    }

    pub fn with_default_blocks(theme: ThemeName) -> Self {
        Self::new(LabelStyle::Default, Theme::named(theme))
    }

    pub fn with_non_empty_blocks(theme: ThemeName) -> Self {
        Self::new(LabelStyle::NonEmptyBlocks, Theme::named(theme))
    }

    pub fn from_configuration(configuration: &DigraphConfiguration) -> Self {
        if configuration.hide_empty_blocks {
            Self::with_non_empty_blocks(configuration.theme)
        } else {
            Self::with_default_blocks(configuration.theme)
        }
    }

    pub fn label_style(&self) -> LabelStyle {
        self.label_style
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Label contents for a node
    pub fn label_for(&self, node: &Node<'_>) -> NodeLabel {
        let (attributes, methods): (Vec<LabelMember>, Vec<LabelMember>) = match node {
            Node::Class(class) => (
                class
                    .constants()
                    .iter()
                    .map(LabelMember::from)
                    .chain(class.attributes().iter().map(LabelMember::from))
                    .collect(),
                class.methods().iter().map(LabelMember::from).collect(),
            ),
            Node::Interface(interface) => (
                interface.constants().iter().map(LabelMember::from).collect(),
                interface.methods().iter().map(LabelMember::from).collect(),
            ),
        };

        NodeLabel {
            name: node.name().to_string(),
            is_interface: node.is_interface(),
            is_abstract: node.is_abstract(),
            attributes: self.block(attributes),
            methods: self.block(methods),
            theme: self.theme,
        }
    }

    /// DOT attributes for an edge statement
    pub fn edge_style_for(&self, kind: EdgeKind) -> &'static str {
        match kind {
            EdgeKind::Inheritance => "dir=back arrowtail=empty style=solid",
            EdgeKind::Implementation => "dir=back arrowtail=empty style=dashed",
            EdgeKind::Association => "dir=back arrowtail=vee style=dashed",
        }
    }

    fn block(&self, members: Vec<LabelMember>) -> Option<Vec<LabelMember>> {
        match self.label_style {
            LabelStyle::NonEmptyBlocks if members.is_empty() => None,
            _ => Some(members),
        }
    }
}
