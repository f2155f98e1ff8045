//! # activeform-html
//!
//! HTML attribute handling and Bootstrap 3 form markup.
//!
//! This crate provides:
//! - `AttrMap` - ordered HTML attributes with consume-on-read extraction
//! - `ClassSpec` - single or condition-gated class additions
//! - `MarkupBuilder` - the seam form fragments are built through
//! - `Bootstrap` - the Bootstrap 3 implementation
//!
//! ## Quick Start
//!
//! ```rust
//! use activeform_html::{AttrMap, Bootstrap, MarkupBuilder};
//!
//! let markup = Bootstrap::new();
//!
//! let mut group = AttrMap::new();
//! group.add_class("has-error");
//! assert_eq!(
//!     markup.open_form_group(&group),
//!     r#"<div class="form-group has-error">"#
//! );
//!
//! let attrs = AttrMap::new().with("id", "post_title");
//! let html = markup.input("text", "Post[title]", &attrs);
//! assert!(html.contains(r#"class="form-control""#));
//! assert!(html.contains(r#"id="post_title""#));
//! ```

pub mod attrs;
pub mod markup;

pub use attrs::{html_escape, AttrMap, ClassSpec};
pub use markup::{Bootstrap, MarkupBuilder};
