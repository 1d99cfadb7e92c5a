//! Show command implementation.

use tracing::debug;

use crate::app::AppContext;
use crate::app::services::{FetchedTemplate, discover_manifests, fetch_template, resolve_interactive};
use crate::domain::{AppError, resolve_by_id};
use crate::ports::{BlobGateway, Console};

#[derive(Debug, PartialEq, Eq)]
pub enum ShowOutcome {
    /// The container holds no manifests.
    NoTemplates,
    /// No manifest carries the requested id.
    NotFound { id: String },
    Shown(FetchedTemplate),
}

/// Resolve a manifest by id, or interactively when `id` is `None`, and fetch its body.
pub fn execute<G: BlobGateway>(
    ctx: &AppContext<G>,
    id: Option<&str>,
    console: &mut impl Console,
) -> Result<ShowOutcome, AppError> {
    let manifests = discover_manifests(ctx.gateway())?;
    if manifests.is_empty() {
        return Ok(ShowOutcome::NoTemplates);
    }

    let selected = match id {
        Some(id) => match resolve_by_id(&manifests, id) {
            Some(manifest) => manifest.clone(),
            None => return Ok(ShowOutcome::NotFound { id: id.to_string() }),
        },
        None => match resolve_interactive(&manifests, console)? {
            Some(manifest) => manifest,
            None => return Ok(ShowOutcome::NoTemplates),
        },
    };

    debug!(id = %selected.id, prefix = %selected.prefix, "resolved template");
    let fetched = fetch_template(ctx.gateway(), &selected.prefix)?;
    Ok(ShowOutcome::Shown(fetched))
}
