//! Asset publishing to a web root and client script collection across
//! widget renders.

mod common;
use common::*;

use std::fs;
use std::path::Path;

use activeform::{
    ActiveForm, AssetPublisher, AttrMap, DirectoryPublisher, EditorOptions, FieldOptions,
    FormConfig, FormError, PickerOptions, RuleSet, ScriptPosition,
};

#[test]
fn directory_publisher_copies_tree() {
    let source_root = tempfile::tempdir().expect("create temp dir");
    let web_root = tempfile::tempdir().expect("create temp dir");

    let source = source_root.path().join("form");
    fs::create_dir_all(source.join("wysihtml5")).expect("create asset dirs");
    fs::write(source.join("wysihtml5/wysihtml5-0.3.0.min.js"), "// engine")
        .expect("write asset");

    let publisher = DirectoryPublisher::new(web_root.path(), "/static/");
    let base = publisher.publish(&source).expect("publish assets");

    let published = base.strip_prefix("/static/").expect("base under the prefix");
    assert!(published.starts_with("form-"));
    let copied = web_root
        .path()
        .join(published)
        .join("wysihtml5/wysihtml5-0.3.0.min.js");
    assert_eq!(fs::read_to_string(copied).expect("read copy"), "// engine");
}

#[test]
fn republish_skips_up_to_date_files() {
    let source_root = tempfile::tempdir().expect("create temp dir");
    let web_root = tempfile::tempdir().expect("create temp dir");

    let source = source_root.path().join("form");
    fs::create_dir_all(&source).expect("create asset dir");
    fs::write(source.join("app.css"), "v1").expect("write asset");

    let publisher = DirectoryPublisher::new(web_root.path(), "/static");
    let base = publisher.publish(&source).expect("publish assets");

    let published = base.rsplit('/').next().expect("published dir");
    let copied = web_root.path().join(published).join("app.css");
    fs::write(&copied, "edited copy").expect("edit copy");

    publisher.publish(&source).expect("republish assets");
    assert_eq!(fs::read_to_string(&copied).expect("read copy"), "edited copy");
}

#[test]
fn same_named_sources_publish_side_by_side() {
    let first_root = tempfile::tempdir().expect("create temp dir");
    let second_root = tempfile::tempdir().expect("create temp dir");
    let web_root = tempfile::tempdir().expect("create temp dir");

    let first = first_root.path().join("assets");
    fs::create_dir_all(&first).expect("create asset dir");
    fs::write(first.join("widget.js"), "first").expect("write asset");
    let second = second_root.path().join("assets");
    fs::create_dir_all(&second).expect("create asset dir");
    fs::write(second.join("widget.js"), "second").expect("write asset");

    let publisher = DirectoryPublisher::new(web_root.path(), "/static");
    let first_base = publisher.publish(&first).expect("publish first");
    let second_base = publisher.publish(&second).expect("publish second");

    assert_ne!(first_base, second_base);
    let first_dir = first_base.rsplit('/').next().expect("published dir");
    let second_dir = second_base.rsplit('/').next().expect("published dir");
    assert_eq!(
        fs::read_to_string(web_root.path().join(first_dir).join("widget.js"))
            .expect("read first copy"),
        "first"
    );
    assert_eq!(
        fs::read_to_string(web_root.path().join(second_dir).join("widget.js"))
            .expect("read second copy"),
        "second"
    );
}

#[test]
fn publish_missing_directory_fails() {
    let web_root = tempfile::tempdir().expect("create temp dir");
    let publisher = DirectoryPublisher::new(web_root.path(), "/static");
    let err = publisher
        .publish(Path::new("/no/such/assets"))
        .expect_err("missing source must fail");
    assert!(matches!(err, FormError::InvalidAssetDir(_)));
}

#[test]
fn form_publishes_assets_at_construction() {
    let source_root = tempfile::tempdir().expect("create temp dir");
    let web_root = tempfile::tempdir().expect("create temp dir");

    let source = source_root.path().join("form-assets");
    fs::create_dir_all(&source).expect("create asset dir");
    fs::write(source.join("form.css"), "body {}").expect("write asset");

    let publisher = DirectoryPublisher::new(web_root.path(), "/static");
    let form = ActiveForm::new(
        FormConfig::new("/signup", "post").asset_source(&source),
        &publisher,
    )
    .expect("publish assets");

    assert!(form.asset_base().starts_with("/static/form-assets-"));
    let published = form.asset_base().rsplit('/').next().expect("published dir");
    assert!(web_root.path().join(published).join("form.css").exists());
}

#[test]
fn editor_and_picker_collect_scripts() {
    let model = Signup::new();
    let mut form = form();

    form.text_editor(&model, "bio", &FieldOptions::new(), &EditorOptions::new());
    form.date_time_picker(&model, "starts_at", &AttrMap::new(), &PickerOptions::new());

    let scripts = form.into_scripts();
    assert_eq!(scripts.css_files().len(), 1);
    let files = scripts.script_files(ScriptPosition::EndOfBody);
    assert_eq!(files.len(), 5);
    assert!(files[0].ends_with("parser_rules/simple.js"));

    let on_ready = scripts.render_scripts(ScriptPosition::OnReady);
    assert!(on_ready.contains("jQuery(function($) {"));
    assert!(on_ready.contains(r#"var editor = new wysihtml5.Editor("Signup_bio",{});"#));
    assert!(on_ready.contains("$('#Signup_starts_at').datetimepicker({});"));
}

#[test]
fn advanced_rule_set_points_at_published_stylesheet() {
    let model = Signup::new();
    let mut form = form();
    form.text_editor(
        &model,
        "bio",
        &FieldOptions::new(),
        &EditorOptions::new().rule_set(RuleSet::Advanced),
    );

    let scripts = form.into_scripts();
    let files = scripts.script_files(ScriptPosition::EndOfBody);
    assert!(files[0].ends_with("parser_rules/advanced.js"));
    assert_eq!(
        scripts.script("wysihtml5-Signup_bio"),
        Some(
            r#"var editor = new wysihtml5.Editor("Signup_bio",{"stylesheets":"/assets/form/wysihtml5/stylesheet.css"});"#
        )
    );
}

#[test]
fn repeated_widgets_register_files_once() {
    let model = Signup::new();
    let mut form = form();
    form.date_time_picker(&model, "starts_at", &AttrMap::new(), &PickerOptions::new());
    form.date_time_picker(&model, "ends_at", &AttrMap::new(), &PickerOptions::new());

    let scripts = form.scripts();
    assert_eq!(scripts.css_files().len(), 1);
    assert_eq!(scripts.script_files(ScriptPosition::EndOfBody).len(), 2);
    assert!(scripts.script("dateTimePicker-Signup_starts_at").is_some());
    assert!(scripts.script("dateTimePicker-Signup_ends_at").is_some());
}
