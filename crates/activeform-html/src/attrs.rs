//! HTML attribute maps with consume-on-read extraction and class merging.

use std::collections::BTreeMap;

/// A class-list addition: a single name, or names gated by flags.
#[derive(Debug, Clone)]
pub enum ClassSpec {
    /// One class name, always added.
    Single(String),
    /// Class names, each added only when its flag is true.
    Conditional(Vec<(String, bool)>),
}

impl From<&str> for ClassSpec {
    fn from(name: &str) -> Self {
        Self::Single(name.to_string())
    }
}

impl From<String> for ClassSpec {
    fn from(name: String) -> Self {
        Self::Single(name)
    }
}

impl<const N: usize> From<[(&str, bool); N]> for ClassSpec {
    fn from(pairs: [(&str, bool); N]) -> Self {
        Self::Conditional(
            pairs
                .into_iter()
                .map(|(name, enabled)| (name.to_string(), enabled))
                .collect(),
        )
    }
}

impl From<Vec<(String, bool)>> for ClassSpec {
    fn from(pairs: Vec<(String, bool)>) -> Self {
        Self::Conditional(pairs)
    }
}

/// Attributes applied to a single HTML tag.
///
/// Keys iterate in sorted order, so rendered tags are deterministic.
#[derive(Debug, Clone, Default)]
pub struct AttrMap {
    /// Attribute name/value pairs.
    pub attrs: BTreeMap<String, String>,
}

impl AttrMap {
    /// Creates an empty attribute map.
    pub fn new() -> Self {
        Self {
            attrs: BTreeMap::new(),
        }
    }

    /// Sets an attribute.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    /// Gets an attribute.
    pub fn get(&self, key: &str) -> Option<&String> {
        self.attrs.get(key)
    }

    /// Removes an attribute and returns its prior value.
    ///
    /// Renderer-specific keys are pulled out this way before the rest of
    /// the map is emitted as raw HTML attributes; a second take of the
    /// same key returns `None`.
    pub fn take(&mut self, key: &str) -> Option<String> {
        self.attrs.remove(key)
    }

    /// Returns whether an attribute is present.
    pub fn contains(&self, key: &str) -> bool {
        self.attrs.contains_key(key)
    }

    /// Appends each enabled class to the `class` attribute, space-separated.
    ///
    /// Existing classes are preserved. Nothing deduplicates: adding a class
    /// twice lists it twice.
    pub fn add_class(&mut self, spec: impl Into<ClassSpec>) {
        let names = match spec.into() {
            ClassSpec::Single(name) => vec![name],
            ClassSpec::Conditional(pairs) => pairs
                .into_iter()
                .filter_map(|(name, enabled)| enabled.then_some(name))
                .collect(),
        };
        for name in names {
            let merged = match self.attrs.get("class") {
                Some(existing) if !existing.is_empty() => format!("{existing} {name}"),
                _ => name,
            };
            self.attrs.insert("class".to_string(), merged);
        }
    }

    /// Renders the map as an HTML attribute string, values escaped.
    pub fn to_html(&self) -> String {
        self.attrs
            .iter()
            .map(|(k, v)| format!(r#"{k}="{}""#, html_escape(v)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
