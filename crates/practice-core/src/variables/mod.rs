//! Variables that can be substituted into practice URL parameters.
//!
//! The resolver never reads ambient state: everything it may append to a URL
//! comes from an explicit [`VariableContext`], usually built from a
//! [`RenderEnvironment`] at view time.

mod catalog;
mod environment;

pub use catalog::{variable_options, VariableGroup, VariableOption};
pub use environment::{CourseInfo, ModuleInfo, RenderEnvironment, RoleName, SiteInfo, UserInfo};

use std::collections::BTreeMap;

/// Read-only snapshot of named values available while resolving a URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableContext {
    values: BTreeMap<String, String>,
}

impl VariableContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl ToString) {
        self.values.insert(name.into(), value.to_string());
    }

    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for VariableContext {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut ctx = VariableContext::new();
        for (k, v) in iter {
            ctx.insert(k, v);
        }
        ctx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_get_replace() {
        let mut ctx = VariableContext::new();
        assert!(ctx.is_empty());
        ctx.insert("courseid", 7);
        ctx.insert("lang", "en");
        assert_eq!(ctx.get("courseid"), Some("7"));
        ctx.insert("courseid", 8);
        assert_eq!(ctx.get("courseid"), Some("8"));
        assert_eq!(ctx.len(), 2);
        assert!(ctx.get("userid").is_none());
    }

    #[test]
    fn from_iterator() {
        let ctx: VariableContext = [("a", "1"), ("b", "2")].into_iter().collect();
        assert!(ctx.contains("a"));
        assert_eq!(ctx.iter().count(), 2);
    }
}
