//! API Facade for the application.
//!
//! Each function builds a storage context from the environment, makes sure the container
//! exists, and runs one command.

use crate::adapters::{HttpBlobGateway, RetryPolicy, RetryingBlobGateway};
use crate::app::{
    AppContext,
    commands::{list, seed, show},
};
use crate::domain::StorageConfig;
use crate::ports::{BlobGateway, Console};

pub use crate::app::commands::list::ListOutcome;
pub use crate::app::commands::seed::SeedOutcome;
pub use crate::app::commands::show::ShowOutcome;
pub use crate::app::services::FetchedTemplate;
pub use crate::domain::{AppError, Manifest};

/// Connect to the configured container, creating it when absent.
pub fn connect(config: &StorageConfig) -> Result<AppContext<RetryingBlobGateway>, AppError> {
    let http = HttpBlobGateway::from_config(config)?;
    let gateway = RetryingBlobGateway::new(Box::new(http), RetryPolicy::from_config(config));
    gateway.ensure_container()?;
    Ok(AppContext::new(gateway))
}

fn create_context() -> Result<AppContext<RetryingBlobGateway>, AppError> {
    connect(&StorageConfig::from_env())
}

/// Upload the demo templates to the configured container.
pub fn seed() -> Result<SeedOutcome, AppError> {
    seed::execute(&create_context()?)
}

/// Discover all template manifests, sorted by id.
pub fn list() -> Result<ListOutcome, AppError> {
    list::execute(&create_context()?)
}

/// Resolve a template by id, or by prompting on `console`, and download its body.
pub fn show(id: Option<&str>, console: &mut impl Console) -> Result<ShowOutcome, AppError> {
    show::execute(&create_context()?, id, console)
}
