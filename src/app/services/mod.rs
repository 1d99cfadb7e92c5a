pub mod discovery;
pub mod selection_prompt;
pub mod template_fetch;

pub use discovery::discover_manifests;
pub use selection_prompt::resolve_interactive;
pub use template_fetch::{FetchedTemplate, fetch_template};
