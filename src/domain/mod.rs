pub mod configuration;
pub mod demo_templates;
pub mod error;
pub mod layout;
pub mod listing;
pub mod manifest;
pub mod selection;

pub use configuration::{ConnectionString, StorageConfig, StorageCredential};
pub use error::AppError;
pub use listing::format_manifest_list;
pub use manifest::Manifest;
pub use selection::{SelectionState, parse_selection, resolve_by_id};
