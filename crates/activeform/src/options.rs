//! Typed per-call options for field renderers.
//!
//! Renderer-specific settings live in named fields here; anything meant
//! for the markup layer as a raw HTML attribute goes into the embedded
//! [`AttrMap`].

use serde_json::{Map, Value};

use activeform_html::{AttrMap, ClassSpec};

/// Options accepted by every field renderer.
#[derive(Debug, Clone, Default)]
pub struct FieldOptions {
    /// Whether to render the label; `None` falls back to the form default.
    pub label: Option<bool>,
    /// Attributes for the label tag.
    pub label_options: AttrMap,
    /// Help text rendered after the control.
    pub help_text: Option<String>,
    /// Raw HTML attributes for the control.
    pub attrs: AttrMap,
}

impl FieldOptions {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forces the label on or off for this field.
    #[must_use]
    pub fn label(mut self, render: bool) -> Self {
        self.label = Some(render);
        self
    }

    /// Sets an attribute on the label tag.
    #[must_use]
    pub fn label_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.label_options.set(key, value);
        self
    }

    /// Sets the help text rendered after the control.
    #[must_use]
    pub fn help_text(mut self, text: impl Into<String>) -> Self {
        self.help_text = Some(text.into());
        self
    }

    /// Sets a raw HTML attribute on the control.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }

    /// Appends classes to the control's `class` attribute.
    #[must_use]
    pub fn class(mut self, spec: impl Into<ClassSpec>) -> Self {
        self.attrs.add_class(spec);
        self
    }
}

/// Named preset of allowed rich-text formatting rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RuleSet {
    /// Basic formatting rules.
    #[default]
    Simple,
    /// Full formatting rules plus the bundled editor stylesheet.
    Advanced,
    /// A custom rule file published with the assets.
    Custom(String),
}

impl RuleSet {
    /// Returns the rule file stem under the published parser rules.
    pub fn name(&self) -> &str {
        match self {
            Self::Simple => "simple",
            Self::Advanced => "advanced",
            Self::Custom(name) => name,
        }
    }
}

/// Options for the rich-text editor control.
#[derive(Debug, Clone, Default)]
pub struct EditorOptions {
    /// The formatting rule set to load.
    pub rule_set: RuleSet,
    /// Settings passed to the editor constructor.
    pub settings: Map<String, Value>,
}

impl EditorOptions {
    /// Creates default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the formatting rule set.
    #[must_use]
    pub fn rule_set(mut self, rule_set: RuleSet) -> Self {
        self.rule_set = rule_set;
        self
    }

    /// Sets an editor constructor option.
    #[must_use]
    pub fn option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }

    /// Serializes the constructor options to JSON.
    ///
    /// The advanced rule set also points the editor `stylesheets` option
    /// into the published asset path.
    pub fn to_json(&self, asset_base: &str) -> String {
        let mut settings = self.settings.clone();
        if self.rule_set == RuleSet::Advanced {
            settings.insert(
                "stylesheets".to_string(),
                Value::String(format!("{asset_base}/wysihtml5/stylesheet.css")),
            );
        }
        Value::Object(settings).to_string()
    }
}

/// Options for the date-time picker control.
#[derive(Debug, Clone, Default)]
pub struct PickerOptions {
    /// Settings passed to the picker initializer.
    pub settings: Map<String, Value>,
}

impl PickerOptions {
    /// Creates default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a picker option.
    #[must_use]
    pub fn option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }

    /// Serializes the picker options to JSON.
    pub fn to_json(&self) -> String {
        Value::Object(self.settings.clone()).to_string()
    }
}
