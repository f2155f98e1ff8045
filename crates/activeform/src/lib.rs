//! # activeform
//!
//! Model-bound form rendering with Bootstrap 3 markup, client script
//! registration, and asset publishing.
//!
//! This crate provides:
//! - A [`FormModel`] trait binding form fields to model attributes
//! - An [`ActiveForm`] renderer producing labeled, validated form groups
//! - Rich-text editor and date-time picker widgets with their client scripts
//! - Pluggable [`AssetPublisher`] and [`ScriptRegistrar`] seams
//!
//! ## Quick Start
//!
//! ```rust
//! use activeform::{
//!     ActiveForm, FieldOptions, FieldValue, FormConfig, FormModel, StaticPublisher,
//! };
//!
//! struct Signup {
//!     email: String,
//! }
//!
//! impl FormModel for Signup {
//!     fn form_name(&self) -> &str {
//!         "Signup"
//!     }
//!
//!     fn attribute_value(&self, attribute: &str) -> Option<FieldValue> {
//!         match attribute {
//!             "email" => Some(FieldValue::from(self.email.as_str())),
//!             _ => None,
//!         }
//!     }
//!
//!     fn attribute_errors(&self, _attribute: &str) -> &[String] {
//!         &[]
//!     }
//! }
//!
//! # fn main() -> activeform::Result<()> {
//! let model = Signup {
//!     email: "dev@example.com".to_string(),
//! };
//! let form = ActiveForm::new(
//!     FormConfig::new("/signup", "post"),
//!     &StaticPublisher::new("/assets/form"),
//! )?;
//!
//! let mut page = form.open();
//! page.push_str(&form.text_field(&model, "email", &FieldOptions::new()));
//! page.push_str(&form.close());
//!
//! assert!(page.contains(r#"name="Signup[email]""#));
//! assert!(page.contains(r#"id="Signup_email""#));
//! # Ok(())
//! # }
//! ```

pub mod assets;
pub mod error;
pub mod form;
pub mod model;
pub mod options;

pub use assets::{
    AssetPublisher, ClientScripts, DirectoryPublisher, ScriptPosition, ScriptRegistrar,
    StaticPublisher,
};
pub use error::{FormError, Result};
pub use form::{ActiveForm, FormConfig};
pub use model::{FieldValue, FormModel};
pub use options::{EditorOptions, FieldOptions, PickerOptions, RuleSet};

pub use activeform_html::{html_escape, AttrMap, Bootstrap, ClassSpec, MarkupBuilder};
