use crate::app::api;
use crate::domain::AppError;
use crate::domain::configuration::storage_config::CONTAINER_NAME;
use crate::domain::layout::TEMPLATES_ROOT;

pub fn run_seed() -> Result<(), AppError> {
    api::seed()?;
    println!("Created demo templates under container '{}/{}'.", CONTAINER_NAME, TEMPLATES_ROOT);
    Ok(())
}
