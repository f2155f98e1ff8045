//! Model access for form rendering.
//!
//! Forms bind to anything implementing [`FormModel`]: an attribute value
//! lookup, a display label, and per-attribute validation errors. The
//! renderer never validates; it only reads what the model reports.

use activeform_html::AttrMap;

/// A value resolved from a model attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A single scalar value.
    Single(String),
    /// Multiple values, as held by list attributes.
    Multiple(Vec<String>),
}

impl FieldValue {
    /// Returns the value as a scalar, when it is one.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value),
            Self::Multiple(_) => None,
        }
    }

    /// Returns the value as a list, wrapping a scalar into one element.
    pub fn into_list(self) -> Vec<String> {
        match self {
            Self::Single(value) => vec![value],
            Self::Multiple(values) => values,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(values: Vec<String>) -> Self {
        Self::Multiple(values)
    }
}

/// Data object a form binds to.
pub trait FormModel {
    /// Short name used to prefix submit names, as in `Post[title]`.
    fn form_name(&self) -> &str;

    /// Returns the current value of an attribute, if it holds one.
    fn attribute_value(&self, attribute: &str) -> Option<FieldValue>;

    /// Returns the display label of an attribute.
    fn attribute_label(&self, attribute: &str) -> String {
        humanize_attribute(attribute)
    }

    /// Returns the validation errors recorded for an attribute.
    fn attribute_errors(&self, attribute: &str) -> &[String];

    /// Returns whether an attribute has validation errors.
    fn has_errors(&self, attribute: &str) -> bool {
        !self.attribute_errors(attribute).is_empty()
    }
}

/// Resolves the submit name and DOM id for a model attribute.
///
/// A caller-supplied `name` in `attrs` wins and is removed, since the name
/// always travels as an explicit argument to the markup layer. A supplied
/// `id` wins and stays in the map. Otherwise the name becomes
/// `Form[attribute]` and the id is derived from it and written into `attrs`.
pub fn resolve_name_id(
    model: &dyn FormModel,
    attribute: &str,
    attrs: &mut AttrMap,
) -> (String, String) {
    let name = attrs
        .take("name")
        .unwrap_or_else(|| format!("{}[{attribute}]", model.form_name()));
    let id = match attrs.get("id") {
        Some(id) => id.clone(),
        None => {
            let id = id_from_name(&name);
            attrs.set("id", id.clone());
            id
        }
    };
    (name, id)
}

/// Derives a DOM id from a submit name, as `Post[title]` to `Post_title`.
pub fn id_from_name(name: &str) -> String {
    name.replace("[]", "")
        .replace("][", "_")
        .replace('[', "_")
        .replace(']', "")
        .replace(' ', "_")
}

/// Generates a display label from an attribute name.
///
/// Splits on underscores and camel-case boundaries and capitalizes each
/// word, as `email_address` to `Email Address`.
pub fn humanize_attribute(attribute: &str) -> String {
    let mut result = String::new();
    let mut start_of_word = true;
    for c in attribute.chars() {
        if c == '_' || c == '-' || c == '.' {
            result.push(' ');
            start_of_word = true;
        } else if c.is_uppercase() {
            if !start_of_word {
                result.push(' ');
            }
            result.push(c);
            start_of_word = false;
        } else if start_of_word {
            result.push(c.to_ascii_uppercase());
            start_of_word = false;
        } else {
            result.push(c);
        }
    }
    result
}
