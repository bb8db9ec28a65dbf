//! Stored practice resource definition.

use serde::{Deserialize, Serialize};

use crate::display::{DisplayMode, DisplayOptions};

/// Identifier of a practice instance in the record store.
pub type PracticeId = i64;

/// One `query key -> variable name` binding appended to the resolved URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlParameter {
    /// Literal query key, as typed by the instructor.
    pub name: String,
    /// Symbolic variable looked up in the [`crate::variables::VariableContext`].
    pub variable: String,
}

impl UrlParameter {
    pub fn new(name: impl Into<String>, variable: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variable: variable.into(),
        }
    }
}

/// Collapses bindings to one per query key.
///
/// The last binding of a key wins and the key keeps the position of its first
/// occurrence.
pub fn dedupe_parameters(parameters: impl IntoIterator<Item = UrlParameter>) -> Vec<UrlParameter> {
    let mut out: Vec<UrlParameter> = Vec::new();
    for param in parameters {
        match out.iter_mut().find(|p| p.name == param.name) {
            Some(existing) => existing.variable = param.variable,
            None => out.push(param),
        }
    }
    out
}

/// A practice activity's link as stored after the instructor saved it.
///
/// Read-only while resolving; the resolved URL is derived on every view and
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDefinition {
    pub id: PracticeId,
    pub course: i64,
    pub name: String,
    #[serde(default)]
    pub intro: String,
    /// Free-text due date shown in result reports.
    #[serde(default)]
    pub due_date: String,
    /// Raw URL template.
    pub external_url: String,
    pub display: DisplayMode,
    #[serde(default)]
    pub display_options: DisplayOptions,
    /// Ordered parameter bindings; order is kept in the emitted query string.
    #[serde(default)]
    pub parameters: Vec<UrlParameter>,
    #[serde(default)]
    pub time_modified: i64,
}

impl ResourceDefinition {
    /// Minimal definition, mostly for tests and ad-hoc resolution.
    pub fn new(external_url: impl Into<String>, display: DisplayMode) -> Self {
        Self {
            id: 0,
            course: 0,
            name: String::new(),
            intro: String::new(),
            due_date: String::new(),
            external_url: external_url.into(),
            display,
            display_options: DisplayOptions::default(),
            parameters: Vec::new(),
            time_modified: 0,
        }
    }

    /// Binds `name` to `variable`; rebinding a key replaces it in place.
    pub fn with_parameter(mut self, name: &str, variable: &str) -> Self {
        self.parameters.push(UrlParameter::new(name, variable));
        self.parameters = dedupe_parameters(std::mem::take(&mut self.parameters));
        self
    }

    /// Stored URLs that are empty or only `http://` cannot be displayed.
    pub fn has_usable_url(&self) -> bool {
        let url = self.external_url.trim();
        !url.is_empty() && url != "http://"
    }
}
