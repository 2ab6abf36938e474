//! Member filters
//!
//! Filters run while the model is built, so hidden members never reach the
//! graph builders. Hiding the constructor therefore also hides the
//! associations inferred from its parameters.

use crate::code::{Attribute, Method, Visibility};
use crate::core::DigraphConfiguration;

/// Decides whether members of a given visibility are kept
pub trait VisibilityFilter: Send + Sync {
    fn accept(&self, visibility: Visibility) -> bool;

    /// Name used in logs
    fn name(&self) -> &'static str;
}

/// Rejects private members
pub struct PrivateVisibilityFilter;

impl VisibilityFilter for PrivateVisibilityFilter {
    fn accept(&self, visibility: Visibility) -> bool {
        visibility != Visibility::Private
    }

    fn name(&self) -> &'static str {
        "private"
    }
}

/// Rejects protected members
pub struct ProtectedVisibilityFilter;

impl VisibilityFilter for ProtectedVisibilityFilter {
    fn accept(&self, visibility: Visibility) -> bool {
        visibility != Visibility::Protected
    }

    fn name(&self) -> &'static str {
        "protected"
    }
}

/// Combination of every member filter chosen for a run
///
/// Constants are always public and are never filtered.
#[derive(Default)]
pub struct MembersFilter {
    exclude_attributes: bool,
    exclude_methods: bool,
    filters: Vec<Box<dyn VisibilityFilter>>,
}

impl MembersFilter {
    /// A filter that keeps everything
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_configuration(configuration: &DigraphConfiguration) -> Self {
        let mut filter = Self::new();
        if configuration.hide_attributes {
            filter = filter.excluding_attributes();
        }
        if configuration.hide_methods {
            filter = filter.excluding_methods();
        }
        if configuration.hide_private {
            filter = filter.with_filter(Box::new(PrivateVisibilityFilter));
        }
        if configuration.hide_protected {
            filter = filter.with_filter(Box::new(ProtectedVisibilityFilter));
        }
        filter
    }

    pub fn excluding_attributes(mut self) -> Self {
        self.exclude_attributes = true;
        self
    }

    pub fn excluding_methods(mut self) -> Self {
        self.exclude_methods = true;
        self
    }

    pub fn with_filter(mut self, filter: Box<dyn VisibilityFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Names of the active visibility filters
    pub fn filter_names(&self) -> Vec<&'static str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    fn accepts(&self, visibility: Visibility) -> bool {
        self.filters.iter().all(|f| f.accept(visibility))
    }

    pub fn attributes(&self, attributes: Vec<Attribute>) -> Vec<Attribute> {
        if self.exclude_attributes {
            return Vec::new();
        }
        attributes
            .into_iter()
            .filter(|a| self.accepts(a.visibility()))
            .collect()
    }

    pub fn methods(&self, methods: Vec<Method>) -> Vec<Method> {
        if self.exclude_methods {
            return Vec::new();
        }
        methods
            .into_iter()
            .filter(|m| self.accepts(m.visibility()))
            .collect()
    }
}
