//! Signup Form Example
//!
//! Renders a signup form bound to a model, including the rich-text
//! editor and date-time picker widgets, and prints the page fragments
//! a layout would embed.
//! Run with: cargo run --example signup_form

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use activeform::{
    ActiveForm, AttrMap, EditorOptions, FieldOptions, FieldValue, FormConfig, FormModel,
    PickerOptions, RuleSet, ScriptPosition, StaticPublisher,
};

// ============================================================================
// Model
// ============================================================================

/// A signup submission, as it would come back from a failed validation
/// pass.
struct Signup {
    username: String,
    bio: String,
    interests: Vec<String>,
    starts_at: String,
    errors: Vec<String>,
}

impl FormModel for Signup {
    fn form_name(&self) -> &str {
        "Signup"
    }

    fn attribute_value(&self, attribute: &str) -> Option<FieldValue> {
        match attribute {
            "username" => Some(FieldValue::from(self.username.as_str())),
            "bio" => Some(FieldValue::from(self.bio.as_str())),
            "interests" => Some(FieldValue::from(self.interests.clone())),
            "starts_at" => Some(FieldValue::from(self.starts_at.as_str())),
            _ => None,
        }
    }

    fn attribute_errors(&self, attribute: &str) -> &[String] {
        if attribute == "username" {
            &self.errors
        } else {
            &[]
        }
    }
}

// ============================================================================
// Rendering
// ============================================================================

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let model = Signup {
        username: String::new(),
        bio: "<p>Rust and SQL.</p>".to_string(),
        interests: vec!["rust".to_string(), "sql".to_string()],
        starts_at: "2024-06-01 09:00".to_string(),
        errors: vec!["Username cannot be blank.".to_string()],
    };

    let mut form = ActiveForm::new(
        FormConfig::new("/signup", "post").attr("class", "form-horizontal"),
        &StaticPublisher::new("/assets/form"),
    )?;

    let mut page = String::new();
    page.push_str(&form.open());
    page.push('\n');
    page.push_str(&form.text_field(&model, "username", &FieldOptions::new()));
    page.push('\n');
    page.push_str(&form.password_field(&model, "password", &FieldOptions::new()));
    page.push('\n');
    page.push_str(&form.text_editor(
        &model,
        "bio",
        &FieldOptions::new().help_text("Tell other members about yourself."),
        &EditorOptions::new().rule_set(RuleSet::Advanced),
    ));
    page.push('\n');
    let interests = vec![
        ("rust".to_string(), "Rust".to_string()),
        ("sql".to_string(), "SQL".to_string()),
        ("go".to_string(), "Go".to_string()),
    ];
    page.push_str(&form.checkbox_list(&model, "interests", &interests, &AttrMap::new()));
    page.push('\n');
    page.push_str(&form.date_time_picker(
        &model,
        "starts_at",
        &AttrMap::new().with("placeholder", "YYYY-MM-DD HH:mm"),
        &PickerOptions::new().option("format", "YYYY-MM-DD HH:mm"),
    ));
    page.push('\n');
    page.push_str(&form.close());

    println!("{page}");

    let scripts = form.into_scripts();
    println!("\n<!-- head -->");
    println!("{}", scripts.render_css_links());
    println!("\n<!-- end of body -->");
    println!("{}", scripts.render_scripts(ScriptPosition::EndOfBody));
    println!("{}", scripts.render_scripts(ScriptPosition::OnReady));

    Ok(())
}
