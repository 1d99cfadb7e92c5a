//! Seed command implementation.

use tracing::info;

use crate::app::AppContext;
use crate::domain::AppError;
use crate::domain::demo_templates::{DEMO_TEMPLATE_BODY, demo_manifests};
use crate::domain::layout::{manifest_object_name, template_object_name};
use crate::ports::BlobGateway;

#[derive(Debug, Default)]
pub struct SeedOutcome {
    /// Object names written, in upload order.
    pub written: Vec<String>,
}

/// Write the demo manifests and bodies, replacing any existing objects.
pub fn execute<G: BlobGateway>(ctx: &AppContext<G>) -> Result<SeedOutcome, AppError> {
    let gateway = ctx.gateway();
    let mut outcome = SeedOutcome::default();

    for manifest in demo_manifests() {
        let manifest_name = manifest_object_name(&manifest.prefix);
        gateway.upload(&manifest_name, manifest.to_json_pretty().as_bytes(), true)?;
        outcome.written.push(manifest_name);

        let template_name = template_object_name(&manifest.prefix);
        gateway.upload(&template_name, DEMO_TEMPLATE_BODY.as_bytes(), true)?;
        outcome.written.push(template_name);
    }

    info!(objects = outcome.written.len(), "seeded demo templates");
    Ok(outcome)
}
