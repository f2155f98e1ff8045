//! Bootstrap 3 form markup.

use ironhtml::html;
use ironhtml_elements::{Input, Label};

use super::MarkupBuilder;
use crate::attrs::{html_escape, AttrMap};

/// Bootstrap 3 implementation of [`MarkupBuilder`].
///
/// Controls get the `form-control` class, field wrappers `form-group`,
/// labels `control-label`. A `helpText` entry in control attributes is
/// pulled out and rendered as a `help-block` span after the control.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bootstrap;

impl Bootstrap {
    /// Creates the builder.
    pub fn new() -> Self {
        Self
    }

    fn merge_base_class(attrs: &mut AttrMap, base: &str) {
        let mut class = base.to_string();
        if let Some(extra_class) = attrs.get("class") {
            class = format!("{class} {extra_class}");
        }
        attrs.set("class", class);
    }

    fn help_block(text: &str) -> String {
        let span = html! {
            span.class("help-block") { #text }
        };
        span.render()
    }
}

impl MarkupBuilder for Bootstrap {
    fn open_form(&self, attrs: &AttrMap) -> String {
        if attrs.attrs.is_empty() {
            "<form>".to_string()
        } else {
            format!("<form {}>", attrs.to_html())
        }
    }

    fn close_form(&self) -> String {
        "</form>".to_string()
    }

    fn open_form_group(&self, attrs: &AttrMap) -> String {
        let mut attrs = attrs.clone();
        Self::merge_base_class(&mut attrs, "form-group");
        format!("<div {}>", attrs.to_html())
    }

    fn close_form_group(&self) -> String {
        "</div>".to_string()
    }

    fn label(&self, text: &str, attrs: &AttrMap) -> String {
        let mut attrs = attrs.clone();
        Self::merge_base_class(&mut attrs, "control-label");
        let class = attrs.take("class").unwrap_or_default();

        let el = match attrs.take("for") {
            Some(for_id) => html! {
                label.for_(#for_id).class(#class) { #text }
            },
            None => html! {
                label.class(#class) { #text }
            },
        };
        attrs
            .attrs
            .iter()
            .fold(el, |el, (k, v)| el.attr(k.clone(), v.as_str()))
            .render()
    }

    fn input(&self, input_type: &str, name: &str, attrs: &AttrMap) -> String {
        let mut attrs = attrs.clone();
        let help_text = attrs.take("helpText");
        Self::merge_base_class(&mut attrs, "form-control");

        let mut render = format!(
            r#"<input type="{input_type}" name="{name}" {}>"#,
            attrs.to_html()
        );
        if let Some(help_text) = help_text {
            render.push_str(&Self::help_block(&help_text));
        }
        render
    }

    fn text_area(&self, name: &str, value: Option<&str>, attrs: &AttrMap) -> String {
        let mut attrs = attrs.clone();
        let help_text = attrs.take("helpText");
        Self::merge_base_class(&mut attrs, "form-control");
        let content = value.map(html_escape).unwrap_or_default();

        let mut render = format!(
            r#"<textarea name="{name}" {}>{content}</textarea>"#,
            attrs.to_html()
        );
        if let Some(help_text) = help_text {
            render.push_str(&Self::help_block(&help_text));
        }
        render
    }

    fn check_box_list(
        &self,
        name: &str,
        selected: &[String],
        data: &[(String, String)],
        attrs: &AttrMap,
    ) -> String {
        let mut attrs = attrs.clone();
        let base_id = attrs.take("id").unwrap_or_else(|| name.to_string());
        let item_name = if name.ends_with("[]") {
            name.to_string()
        } else {
            format!("{name}[]")
        };

        let mut render = String::new();
        for (i, (value, label)) in data.iter().enumerate() {
            let item_id = format!("{base_id}_{i}");
            let checked = selected.contains(value);
            let item = html! { div.class("checkbox") }.child::<Label, _>(|l| {
                l.child::<Input, _>(|input| {
                    let input = input
                        .attr("type", "checkbox")
                        .attr("id", item_id.as_str())
                        .attr("value", value.as_str())
                        .attr("name", item_name.as_str());
                    let input = attrs
                        .attrs
                        .iter()
                        .fold(input, |el, (k, v)| el.attr(k.clone(), v.as_str()));
                    if checked {
                        input.attr("checked", "checked")
                    } else {
                        input
                    }
                })
                .text(&format!(" {label}"))
            });
            render.push_str(&item.render());
            render.push('\n');
        }
        render
    }

    fn radio_button_list(
        &self,
        name: &str,
        selected: Option<&str>,
        data: &[(String, String)],
        attrs: &AttrMap,
    ) -> String {
        let mut attrs = attrs.clone();
        let base_id = attrs.take("id").unwrap_or_else(|| name.to_string());

        let mut render = String::new();
        for (i, (value, label)) in data.iter().enumerate() {
            let item_id = format!("{base_id}_{i}");
            let checked = selected.is_some_and(|v| v == value.as_str());
            let item = html! { div.class("radio") }.child::<Label, _>(|l| {
                l.child::<Input, _>(|input| {
                    let input = input
                        .attr("type", "radio")
                        .attr("id", item_id.as_str())
                        .attr("value", value.as_str())
                        .attr("name", name);
                    let input = attrs
                        .attrs
                        .iter()
                        .fold(input, |el, (k, v)| el.attr(k.clone(), v.as_str()));
                    if checked {
                        input.attr("checked", "checked")
                    } else {
                        input
                    }
                })
                .text(&format!(" {label}"))
            });
            render.push_str(&item.render());
            render.push('\n');
        }
        render
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(v, l)| ((*v).to_string(), (*l).to_string()))
            .collect()
    }

    #[test]
    fn test_open_form() {
        let markup = Bootstrap::new();
        let attrs = AttrMap::new()
            .with("action", "/posts")
            .with("method", "post");
        assert_eq!(
            markup.open_form(&attrs),
            r#"<form action="/posts" method="post">"#
        );
        assert_eq!(markup.close_form(), "</form>");
    }

    #[test]
    fn test_open_form_without_attrs() {
        let markup = Bootstrap::new();
        assert_eq!(markup.open_form(&AttrMap::new()), "<form>");
    }

    #[test]
    fn test_form_group_merges_class() {
        let markup = Bootstrap::new();
        let mut attrs = AttrMap::new();
        attrs.add_class("has-error");
        assert_eq!(
            markup.open_form_group(&attrs),
            r#"<div class="form-group has-error">"#
        );
        assert_eq!(markup.close_form_group(), "</div>");
    }

    #[test]
    fn test_label() {
        let markup = Bootstrap::new();
        let attrs = AttrMap::new().with("for", "post_title");
        let html = markup.label("Title", &attrs);
        assert!(html.contains(r#"for="post_title""#));
        assert!(html.contains("control-label"));
        assert!(html.contains("Title"));
    }

    #[test]
    fn test_label_extra_class_and_attrs() {
        let markup = Bootstrap::new();
        let attrs = AttrMap::new()
            .with("class", "sr-only")
            .with("data-role", "hint");
        let html = markup.label("Title", &attrs);
        assert!(html.contains("control-label sr-only"));
        assert!(html.contains(r#"data-role="hint""#));
    }

    #[test]
    fn test_input() {
        let markup = Bootstrap::new();
        let attrs = AttrMap::new().with("id", "post_title");
        let html = markup.input("text", "Post[title]", &attrs);
        assert_eq!(
            html,
            r#"<input type="text" name="Post[title]" class="form-control" id="post_title">"#
        );
    }

    #[test]
    fn test_input_renders_help_block() {
        let markup = Bootstrap::new();
        let attrs = AttrMap::new().with("helpText", "Title cannot be blank.");
        let html = markup.input("text", "Post[title]", &attrs);
        assert!(html.contains("help-block"));
        assert!(html.contains("Title cannot be blank."));
        assert!(!html.contains("helpText"));
    }

    #[test]
    fn test_text_area_escapes_content() {
        let markup = Bootstrap::new();
        let html = markup.text_area("Post[body]", Some("<b>hi</b>"), &AttrMap::new());
        assert!(html.contains("&lt;b&gt;hi&lt;/b&gt;"));
        assert!(html.contains(r#"class="form-control""#));
    }

    #[test]
    fn test_check_box_list() {
        let markup = Bootstrap::new();
        let data = pairs(&[("1", "Rust"), ("2", "SQL")]);
        let selected = vec!["2".to_string()];
        let attrs = AttrMap::new().with("id", "post_tags");
        let html = markup.check_box_list("Post[tags]", &selected, &data, &attrs);
        assert!(html.contains(r#"name="Post[tags][]""#));
        assert!(html.contains(r#"id="post_tags_0""#));
        assert!(html.contains(r#"id="post_tags_1""#));
        assert!(html.contains("Rust"));
        assert_eq!(html.matches(r#"checked="checked""#).count(), 1);
    }

    #[test]
    fn test_check_box_list_keeps_array_suffix() {
        let markup = Bootstrap::new();
        let data = pairs(&[("1", "Rust")]);
        let html = markup.check_box_list("Post[tags][]", &[], &data, &AttrMap::new());
        assert!(html.contains(r#"name="Post[tags][]""#));
        assert!(!html.contains("[][]"));
    }

    #[test]
    fn test_check_box_list_spreads_extra_attrs() {
        let markup = Bootstrap::new();
        let data = pairs(&[("1", "Rust"), ("2", "SQL")]);
        let attrs = AttrMap::new().with("data-toggle", "switch");
        let html = markup.check_box_list("Post[tags]", &[], &data, &attrs);
        assert_eq!(html.matches(r#"data-toggle="switch""#).count(), 2);
    }

    #[test]
    fn test_radio_button_list() {
        let markup = Bootstrap::new();
        let data = pairs(&[("draft", "Draft"), ("live", "Live")]);
        let attrs = AttrMap::new().with("id", "post_status");
        let html = markup.radio_button_list("Post[status]", Some("live"), &data, &attrs);
        assert!(html.contains(r#"name="Post[status]""#));
        assert!(html.contains(r#"value="live""#));
        assert_eq!(html.matches(r#"checked="checked""#).count(), 1);
        assert!(html.contains(r#"class="radio""#));
    }

    #[test]
    fn test_radio_button_list_spreads_extra_attrs() {
        let markup = Bootstrap::new();
        let data = pairs(&[("draft", "Draft"), ("live", "Live")]);
        let attrs = AttrMap::new().with("data-toggle", "switch");
        let html = markup.radio_button_list("Post[status]", None, &data, &attrs);
        assert_eq!(html.matches(r#"data-toggle="switch""#).count(), 2);
    }
}
