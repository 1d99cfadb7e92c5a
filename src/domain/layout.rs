//! Object-name layout of the template store.
//!
//! ```text
//! templates/
//! └── <id>/
//!     ├── manifest.json
//!     └── template.md
//! ```

/// Fixed top-level prefix under which every template directory lives.
pub const TEMPLATES_ROOT: &str = "templates/";

/// Manifest object name within a template directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Template body object name within a template directory.
pub const TEMPLATE_FILE: &str = "template.md";

/// Directory prefix for the template with the given id.
pub fn template_prefix(id: &str) -> String {
    format!("{TEMPLATES_ROOT}{id}/")
}

/// Full object name of the manifest under `prefix`.
pub fn manifest_object_name(prefix: &str) -> String {
    format!("{prefix}{MANIFEST_FILE}")
}

/// Full object name of the template body under `prefix`.
pub fn template_object_name(prefix: &str) -> String {
    format!("{prefix}{TEMPLATE_FILE}")
}

/// Return the template prefix when `object_name` names a manifest.
///
/// Only names whose final path segment is exactly `manifest.json` qualify, so the returned
/// prefix always ends with `/`.
pub fn manifest_prefix(object_name: &str) -> Option<&str> {
    let prefix = object_name.strip_suffix(MANIFEST_FILE)?;
    prefix.ends_with('/').then_some(prefix)
}
