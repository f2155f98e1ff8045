//! The form renderer: open/close lifecycle and per-field rendering.

use std::path::PathBuf;

use tracing::debug;

use activeform_html::{AttrMap, Bootstrap, MarkupBuilder};

use crate::assets::{AssetPublisher, ClientScripts, ScriptPosition, ScriptRegistrar};
use crate::error::Result;
use crate::model::{resolve_name_id, FieldValue, FormModel};
use crate::options::{EditorOptions, FieldOptions, PickerOptions};

/// Configuration for one form render.
#[derive(Debug, Clone)]
pub struct FormConfig {
    /// Action URL the form submits to.
    pub action: String,
    /// HTTP method of the form.
    pub method: String,
    /// Whether field labels render by default.
    pub labels: bool,
    /// Attributes seeding the form's opening tag.
    pub attrs: AttrMap,
    /// Local directory holding the widget assets.
    pub asset_source: PathBuf,
    /// Whether to load minified asset variants.
    pub minified_assets: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            action: String::new(),
            method: "post".to_string(),
            labels: true,
            attrs: AttrMap::new(),
            asset_source: PathBuf::from("assets"),
            minified_assets: true,
        }
    }
}

impl FormConfig {
    /// Creates a configuration submitting to `action` with `method`.
    pub fn new(action: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            method: method.into(),
            ..Default::default()
        }
    }

    /// Disables field labels for the whole form.
    #[must_use]
    pub fn without_labels(mut self) -> Self {
        self.labels = false;
        self
    }

    /// Sets an attribute on the form tag.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }

    /// Sets the local directory holding the widget assets.
    #[must_use]
    pub fn asset_source(mut self, dir: impl Into<PathBuf>) -> Self {
        self.asset_source = dir.into();
        self
    }

    /// Selects full rather than minified asset variants.
    #[must_use]
    pub fn unminified_assets(mut self) -> Self {
        self.minified_assets = false;
        self
    }
}

/// Renders a form bound to a model.
///
/// One instance covers one open/close cycle: construct it (which
/// publishes the widget assets), render the opening tag, render fields,
/// render the closing tag. Scripts registered along the way accumulate
/// in the registrar and are rendered into the page by the caller.
pub struct ActiveForm<R: ScriptRegistrar = ClientScripts> {
    config: FormConfig,
    markup: Box<dyn MarkupBuilder>,
    scripts: R,
    asset_base: String,
}

impl ActiveForm<ClientScripts> {
    /// Creates a form, publishing its assets through `publisher`.
    pub fn new(config: FormConfig, publisher: &dyn AssetPublisher) -> Result<Self> {
        Self::with_registrar(config, publisher, ClientScripts::new())
    }
}

impl<R: ScriptRegistrar> ActiveForm<R> {
    /// Creates a form collecting scripts into an existing registrar.
    pub fn with_registrar(
        config: FormConfig,
        publisher: &dyn AssetPublisher,
        scripts: R,
    ) -> Result<Self> {
        let asset_base = publisher.publish(&config.asset_source)?;
        Ok(Self {
            config,
            markup: Box::new(Bootstrap::new()),
            scripts,
            asset_base,
        })
    }

    /// Replaces the markup builder.
    #[must_use]
    pub fn with_markup(mut self, markup: impl MarkupBuilder + 'static) -> Self {
        self.markup = Box::new(markup);
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Returns the published asset base URL.
    pub fn asset_base(&self) -> &str {
        &self.asset_base
    }

    /// Returns the collected scripts.
    pub fn scripts(&self) -> &R {
        &self.scripts
    }

    /// Consumes the form, returning the collected scripts.
    pub fn into_scripts(self) -> R {
        self.scripts
    }

    /// Renders the opening form tag.
    pub fn open(&self) -> String {
        let mut attrs = self.config.attrs.clone();
        attrs.set("action", self.config.action.clone());
        attrs.set("method", self.config.method.clone());
        self.markup.open_form(&attrs)
    }

    /// Renders the closing form tag.
    pub fn close(&self) -> String {
        self.markup.close_form()
    }

    /// Renders a single-line text field for a model attribute.
    pub fn text_field(
        &self,
        model: &dyn FormModel,
        attribute: &str,
        options: &FieldOptions,
    ) -> String {
        self.input_field("text", model, attribute, options)
    }

    /// Renders a password field, with the model value filled in.
    pub fn password_field(
        &self,
        model: &dyn FormModel,
        attribute: &str,
        options: &FieldOptions,
    ) -> String {
        let mut options = options.clone();
        if let Some(value) = model.attribute_value(attribute) {
            if let Some(value) = value.as_single() {
                options.attrs.set("value", value);
            }
        }
        self.input_field("password", model, attribute, &options)
    }

    /// Renders a multi-line text area, with the model value as content.
    pub fn text_area(
        &self,
        model: &dyn FormModel,
        attribute: &str,
        options: &FieldOptions,
    ) -> String {
        let mut control_attrs = options.attrs.clone();
        let (name, id) = resolve_name_id(model, attribute, &mut control_attrs);
        if let Some(help_text) = &options.help_text {
            control_attrs.set("helpText", help_text.clone());
        }

        let mut group_attrs = AttrMap::new();
        Self::apply_validation_state(model, attribute, &mut group_attrs, &mut control_attrs);

        let value = model.attribute_value(attribute);
        let value = value.as_ref().and_then(FieldValue::as_single);

        let mut render = self.markup.open_form_group(&group_attrs);
        render.push_str(&self.render_label(model, attribute, &id, options));
        render.push_str(&self.markup.text_area(&name, value, &control_attrs));
        render.push_str(&self.markup.close_form_group());
        render
    }

    /// Renders a checkbox list over `data` (value, label) pairs.
    ///
    /// A scalar model value selects a single box, a list value each
    /// matching box. The list renders inside a bare form group, without
    /// a label or validation decoration.
    pub fn checkbox_list(
        &self,
        model: &dyn FormModel,
        attribute: &str,
        data: &[(String, String)],
        attrs: &AttrMap,
    ) -> String {
        let mut control_attrs = attrs.clone();
        let (name, _id) = resolve_name_id(model, attribute, &mut control_attrs);

        let selected = model
            .attribute_value(attribute)
            .map(FieldValue::into_list)
            .unwrap_or_default();

        let mut render = self.markup.open_form_group(&AttrMap::new());
        render.push_str(
            &self
                .markup
                .check_box_list(&name, &selected, data, &control_attrs),
        );
        render.push_str(&self.markup.close_form_group());
        render
    }

    /// Renders a radio button list over `data` (value, label) pairs.
    ///
    /// Only a scalar model value selects a button. Renders like
    /// [`checkbox_list`](Self::checkbox_list), without a label or
    /// validation decoration.
    pub fn radio_button_list(
        &self,
        model: &dyn FormModel,
        attribute: &str,
        data: &[(String, String)],
        attrs: &AttrMap,
    ) -> String {
        let mut control_attrs = attrs.clone();
        let (name, _id) = resolve_name_id(model, attribute, &mut control_attrs);

        let value = model.attribute_value(attribute);
        let selected = value.as_ref().and_then(FieldValue::as_single);

        let mut render = self.markup.open_form_group(&AttrMap::new());
        render.push_str(
            &self
                .markup
                .radio_button_list(&name, selected, data, &control_attrs),
        );
        render.push_str(&self.markup.close_form_group());
        render
    }

    /// Renders a rich-text editor backed by a text area.
    ///
    /// Registers the rule-set, engine, and adapter scripts along with an
    /// inline initialization snippet keyed by the control's id.
    pub fn text_editor(
        &mut self,
        model: &dyn FormModel,
        attribute: &str,
        options: &FieldOptions,
        editor: &EditorOptions,
    ) -> String {
        let mut options = options.clone();
        options.attrs.add_class("wysihtml5-textarea");
        let (name, id) = resolve_name_id(model, attribute, &mut options.attrs);
        options.attrs.set("name", name);

        let render = self.text_area(model, attribute, &options);

        debug!(id = %id, rule_set = %editor.rule_set.name(), "Attaching rich-text editor");
        let rules_url = format!(
            "{}/wysihtml5/parser_rules/{}.js",
            self.asset_base,
            editor.rule_set.name()
        );
        self.scripts
            .register_script_file(&rules_url, ScriptPosition::EndOfBody);
        let engine_url = format!("{}/wysihtml5/wysihtml5-0.3.0.min.js", self.asset_base);
        self.scripts
            .register_script_file(&engine_url, ScriptPosition::EndOfBody);
        let adapter_url = format!("{}/wysihtml5/bootstrap-wysihtml5.js", self.asset_base);
        self.scripts
            .register_script_file(&adapter_url, ScriptPosition::EndOfBody);

        let code = format!(
            r#"var editor = new wysihtml5.Editor("{id}",{});"#,
            editor.to_json(&self.asset_base)
        );
        self.scripts
            .register_script(&format!("wysihtml5-{id}"), &code, ScriptPosition::OnReady);

        render
    }

    /// Renders a text input wired to the date-time picker plugin.
    ///
    /// The control renders bare, without a form group or label.
    /// Registers the picker stylesheet and scripts along with an inline
    /// initialization snippet keyed by the control's id.
    pub fn date_time_picker(
        &mut self,
        model: &dyn FormModel,
        attribute: &str,
        attrs: &AttrMap,
        picker: &PickerOptions,
    ) -> String {
        let mut control_attrs = attrs.clone();
        let (name, id) = resolve_name_id(model, attribute, &mut control_attrs);

        let render = self.markup.input("text", &name, &control_attrs);

        debug!(id = %id, "Attaching date-time picker");
        let min = if self.config.minified_assets { ".min" } else { "" };
        let css_url = format!(
            "{}/bootstrap-datetimepicker/css/bootstrap-datetimepicker{min}.css",
            self.asset_base
        );
        self.scripts.register_css_file(&css_url);
        let moment_url = format!(
            "{}/bootstrap-datetimepicker/js/moment-with-langs.min.js",
            self.asset_base
        );
        self.scripts
            .register_script_file(&moment_url, ScriptPosition::EndOfBody);
        let picker_url = format!(
            "{}/bootstrap-datetimepicker/js/bootstrap-datetimepicker.min.js",
            self.asset_base
        );
        self.scripts
            .register_script_file(&picker_url, ScriptPosition::EndOfBody);

        let code = format!("$('#{id}').datetimepicker({});", picker.to_json());
        self.scripts.register_script(
            &format!("dateTimePicker-{id}"),
            &code,
            ScriptPosition::OnReady,
        );

        render
    }

    fn input_field(
        &self,
        input_type: &str,
        model: &dyn FormModel,
        attribute: &str,
        options: &FieldOptions,
    ) -> String {
        let mut control_attrs = options.attrs.clone();
        let (name, id) = resolve_name_id(model, attribute, &mut control_attrs);
        if let Some(help_text) = &options.help_text {
            control_attrs.set("helpText", help_text.clone());
        }

        let mut group_attrs = AttrMap::new();
        Self::apply_validation_state(model, attribute, &mut group_attrs, &mut control_attrs);

        let mut render = self.markup.open_form_group(&group_attrs);
        render.push_str(&self.render_label(model, attribute, &id, options));
        render.push_str(&self.markup.input(input_type, &name, &control_attrs));
        render.push_str(&self.markup.close_form_group());
        render
    }

    /// Renders the field label unless suppressed at either scope.
    fn render_label(
        &self,
        model: &dyn FormModel,
        attribute: &str,
        id: &str,
        options: &FieldOptions,
    ) -> String {
        if !self.config.labels || options.label == Some(false) {
            return String::new();
        }
        let mut label_options = options.label_options.clone();
        if !label_options.contains("for") {
            label_options.set("for", id);
        }
        self.markup
            .label(&model.attribute_label(attribute), &label_options)
    }

    /// Joins the attribute's errors into the control help text and marks
    /// the group.
    fn apply_validation_state(
        model: &dyn FormModel,
        attribute: &str,
        group_attrs: &mut AttrMap,
        control_attrs: &mut AttrMap,
    ) {
        if model.has_errors(attribute) {
            control_attrs.set("helpText", model.attribute_errors(attribute).concat());
            group_attrs.add_class("has-error");
        }
    }
}

impl<R: ScriptRegistrar> std::fmt::Debug for ActiveForm<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActiveForm")
            .field("config", &self.config)
            .field("asset_base", &self.asset_base)
            .finish_non_exhaustive()
    }
}
