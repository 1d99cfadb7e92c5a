//! List command implementation.

use crate::app::AppContext;
use crate::app::services::discover_manifests;
use crate::domain::{AppError, Manifest, format_manifest_list};
use crate::ports::BlobGateway;

#[derive(Debug, Default)]
pub struct ListOutcome {
    /// Discovered manifests sorted by id.
    pub manifests: Vec<Manifest>,
}

impl ListOutcome {
    pub fn is_empty(&self) -> bool {
        self.manifests.is_empty()
    }

    /// Numbered listing text, header included.
    pub fn render(&self) -> String {
        format_manifest_list(&self.manifests)
    }
}

pub fn execute<G: BlobGateway>(ctx: &AppContext<G>) -> Result<ListOutcome, AppError> {
    let manifests = discover_manifests(ctx.gateway())?;
    Ok(ListOutcome { manifests })
}
