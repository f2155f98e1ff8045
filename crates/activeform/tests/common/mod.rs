#![allow(dead_code)]

use std::collections::BTreeMap;

use activeform::{ActiveForm, FieldValue, FormConfig, FormModel, StaticPublisher};

/// A signup model whose attribute values and errors are set per test.
pub struct Signup {
    pub values: BTreeMap<String, FieldValue>,
    pub errors: BTreeMap<String, Vec<String>>,
}

impl Signup {
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
            errors: BTreeMap::new(),
        }
    }

    pub fn with_value(mut self, attribute: &str, value: impl Into<FieldValue>) -> Self {
        self.values.insert(attribute.to_string(), value.into());
        self
    }

    pub fn with_error(mut self, attribute: &str, message: &str) -> Self {
        self.errors
            .entry(attribute.to_string())
            .or_default()
            .push(message.to_string());
        self
    }
}

impl FormModel for Signup {
    fn form_name(&self) -> &str {
        "Signup"
    }

    fn attribute_value(&self, attribute: &str) -> Option<FieldValue> {
        self.values.get(attribute).cloned()
    }

    fn attribute_errors(&self, attribute: &str) -> &[String] {
        self.errors.get(attribute).map_or(&[], Vec::as_slice)
    }
}

pub fn form() -> ActiveForm {
    ActiveForm::new(
        FormConfig::new("/signup", "post"),
        &StaticPublisher::new("/assets/form"),
    )
    .expect("static publisher cannot fail")
}
