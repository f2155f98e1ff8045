//! Client asset publishing and script registration.
//!
//! Field renderers append to a [`ScriptRegistrar`] owned by the form;
//! the page pulls the collected `<link>` and `<script>` blocks back out
//! through [`ClientScripts`] when the layout is assembled.

use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{FormError, Result};

/// Where a registered script lands in the rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptPosition {
    /// Before the closing body tag.
    EndOfBody,
    /// Inside the DOM-ready handler.
    OnReady,
}

/// Registers client-side scripts and styles during a render pass.
pub trait ScriptRegistrar {
    /// Registers an external script file.
    fn register_script_file(&mut self, url: &str, position: ScriptPosition);

    /// Registers an external stylesheet.
    fn register_css_file(&mut self, url: &str);

    /// Registers an inline script under a key.
    ///
    /// Registering the same key again replaces the previous code.
    fn register_script(&mut self, key: &str, code: &str, position: ScriptPosition);
}

#[derive(Debug, Clone)]
struct InlineScript {
    key: String,
    code: String,
    position: ScriptPosition,
}

/// The standard registrar: collects assets and renders page fragments.
///
/// Script files deduplicate by URL within a position, inline scripts
/// replace by key, and everything renders in registration order.
#[derive(Debug, Clone, Default)]
pub struct ClientScripts {
    css_files: Vec<String>,
    script_files: Vec<(String, ScriptPosition)>,
    scripts: Vec<InlineScript>,
}

impl ClientScripts {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the registered stylesheet URLs.
    pub fn css_files(&self) -> &[String] {
        &self.css_files
    }

    /// Returns the script file URLs registered for a position.
    pub fn script_files(&self, position: ScriptPosition) -> Vec<&str> {
        self.script_files
            .iter()
            .filter(|(_, p)| *p == position)
            .map(|(url, _)| url.as_str())
            .collect()
    }

    /// Returns the inline script registered under a key.
    pub fn script(&self, key: &str) -> Option<&str> {
        self.scripts
            .iter()
            .find(|script| script.key == key)
            .map(|script| script.code.as_str())
    }

    /// Renders the collected stylesheets as `<link>` tags.
    pub fn render_css_links(&self) -> String {
        self.css_files
            .iter()
            .map(|url| format!(r#"<link rel="stylesheet" type="text/css" href="{url}">"#))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Renders the scripts collected for a position.
    ///
    /// On-ready code is joined into a single jQuery ready handler, the
    /// way the widgets' initialization snippets expect to run.
    pub fn render_scripts(&self, position: ScriptPosition) -> String {
        let mut blocks: Vec<String> = self
            .script_files
            .iter()
            .filter(|(_, p)| *p == position)
            .map(|(url, _)| format!(r#"<script type="text/javascript" src="{url}"></script>"#))
            .collect();

        let code: Vec<&str> = self
            .scripts
            .iter()
            .filter(|script| script.position == position)
            .map(|script| script.code.as_str())
            .collect();
        if !code.is_empty() {
            let code = code.join("\n");
            let block = match position {
                ScriptPosition::OnReady => format!(
                    "<script type=\"text/javascript\">\njQuery(function($) {{\n{code}\n}});\n</script>"
                ),
                ScriptPosition::EndOfBody => {
                    format!("<script type=\"text/javascript\">\n{code}\n</script>")
                }
            };
            blocks.push(block);
        }

        blocks.join("\n")
    }
}

impl ScriptRegistrar for ClientScripts {
    fn register_script_file(&mut self, url: &str, position: ScriptPosition) {
        if self
            .script_files
            .iter()
            .any(|(existing, p)| existing == url && *p == position)
        {
            return;
        }
        debug!(url = %url, position = ?position, "Registering script file");
        self.script_files.push((url.to_string(), position));
    }

    fn register_css_file(&mut self, url: &str) {
        if self.css_files.iter().any(|existing| existing == url) {
            return;
        }
        debug!(url = %url, "Registering stylesheet");
        self.css_files.push(url.to_string());
    }

    fn register_script(&mut self, key: &str, code: &str, position: ScriptPosition) {
        debug!(key = %key, position = ?position, "Registering inline script");
        if let Some(existing) = self.scripts.iter_mut().find(|script| script.key == key) {
            existing.code = code.to_string();
            existing.position = position;
        } else {
            self.scripts.push(InlineScript {
                key: key.to_string(),
                code: code.to_string(),
                position,
            });
        }
    }
}

/// Publishes a local asset directory under a public URL.
pub trait AssetPublisher {
    /// Publishes `path` and returns the base URL it is served from.
    fn publish(&self, path: &Path) -> Result<String>;
}

/// Publishes assets by copying them under a served web root.
///
/// Each source lands in a directory named after it plus a hash of the
/// full source path, so distinct sources that share a name publish side
/// by side instead of overwriting each other.
#[derive(Debug, Clone)]
pub struct DirectoryPublisher {
    web_root: PathBuf,
    base_url: String,
}

impl DirectoryPublisher {
    /// Creates a publisher copying into `web_root`, served at `base_url`.
    pub fn new(web_root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            web_root: web_root.into(),
            base_url: base_url.into(),
        }
    }
}

impl AssetPublisher for DirectoryPublisher {
    fn publish(&self, path: &Path) -> Result<String> {
        if !path.is_dir() {
            return Err(FormError::InvalidAssetDir(path.to_path_buf()));
        }
        let dir_name = published_dir_name(path);
        let target = self.web_root.join(&dir_name);
        copy_tree(path, &target)?;

        let base_url = format!("{}/{dir_name}", self.base_url.trim_end_matches('/'));
        info!(source = %path.display(), url = %base_url, "Published assets");
        Ok(base_url)
    }
}

/// Maps asset directories onto a fixed URL prefix without copying.
///
/// For setups where the asset source directory is served directly.
#[derive(Debug, Clone)]
pub struct StaticPublisher {
    base_url: String,
}

impl StaticPublisher {
    /// Creates a publisher answering with `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl AssetPublisher for StaticPublisher {
    fn publish(&self, path: &Path) -> Result<String> {
        debug!(source = %path.display(), url = %self.base_url, "Mapping assets");
        Ok(self.base_url.trim_end_matches('/').to_string())
    }
}

fn io_err(path: &Path, source: std::io::Error) -> FormError {
    FormError::AssetPublish {
        path: path.to_path_buf(),
        source,
    }
}

/// Names the published directory from the source name and a path hash.
fn published_dir_name(path: &Path) -> String {
    let name = path
        .file_name()
        .map_or_else(|| "assets".to_string(), |n| n.to_string_lossy().into_owned());
    let mut hasher = DefaultHasher::new();
    path.hash(&mut hasher);
    format!("{name}-{:08x}", hasher.finish() as u32)
}

fn copy_tree(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst).map_err(|e| io_err(dst, e))?;
    for entry in fs::read_dir(src).map_err(|e| io_err(src, e))? {
        let entry = entry.map_err(|e| io_err(src, e))?;
        let from = entry.path();
        let to = dst.join(entry.file_name());
        if entry.file_type().map_err(|e| io_err(&from, e))?.is_dir() {
            copy_tree(&from, &to)?;
        } else if !is_up_to_date(&from, &to) {
            fs::copy(&from, &to).map_err(|e| io_err(&from, e))?;
        }
    }
    Ok(())
}

fn is_up_to_date(src: &Path, dst: &Path) -> bool {
    let src_modified = fs::metadata(src).and_then(|m| m.modified());
    let dst_modified = fs::metadata(dst).and_then(|m| m.modified());
    match (src_modified, dst_modified) {
        (Ok(src_time), Ok(dst_time)) => dst_time >= src_time,
        _ => false,
    }
}
