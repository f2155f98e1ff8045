//! Markup construction for forms, groups, labels, and controls.

mod bootstrap;

pub use bootstrap::Bootstrap;

use crate::attrs::AttrMap;

/// Builds the HTML fragments a form is assembled from.
///
/// Implementations own tag structure and escaping; callers pass the final
/// attribute set for each tag. The `name` of a control travels as an
/// explicit argument, everything else (including `id`) through `attrs`.
pub trait MarkupBuilder: Send + Sync {
    /// Renders the opening `<form>` tag.
    fn open_form(&self, attrs: &AttrMap) -> String;

    /// Renders the closing `</form>` tag.
    fn close_form(&self) -> String;

    /// Renders the opening tag of a field wrapper.
    fn open_form_group(&self, attrs: &AttrMap) -> String;

    /// Renders the closing tag of a field wrapper.
    fn close_form_group(&self) -> String;

    /// Renders a `<label>`.
    fn label(&self, text: &str, attrs: &AttrMap) -> String;

    /// Renders an `<input>` of the given type.
    fn input(&self, input_type: &str, name: &str, attrs: &AttrMap) -> String;

    /// Renders a `<textarea>` holding `value`.
    fn text_area(&self, name: &str, value: Option<&str>, attrs: &AttrMap) -> String;

    /// Renders a checkbox list over `data` (value, label) pairs.
    ///
    /// Every value in `selected` renders checked. Item names carry a `[]`
    /// suffix so multiple selections submit as a list.
    fn check_box_list(
        &self,
        name: &str,
        selected: &[String],
        data: &[(String, String)],
        attrs: &AttrMap,
    ) -> String;

    /// Renders a radio button list over `data` (value, label) pairs.
    fn radio_button_list(
        &self,
        name: &str,
        selected: Option<&str>,
        data: &[(String, String)],
        attrs: &AttrMap,
    ) -> String;
}
