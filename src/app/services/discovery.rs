//! Manifest discovery.

use tracing::debug;

use crate::domain::layout::{TEMPLATES_ROOT, manifest_prefix};
use crate::domain::{AppError, Manifest};
use crate::ports::BlobGateway;

/// Load every manifest under the templates root, sorted by id.
///
/// Downloads run one at a time. The first malformed manifest aborts discovery.
pub fn discover_manifests(gateway: &(impl BlobGateway + ?Sized)) -> Result<Vec<Manifest>, AppError> {
    let mut manifests = Vec::new();

    for object_name in gateway.list_object_names(TEMPLATES_ROOT)? {
        let Some(prefix) = manifest_prefix(&object_name) else {
            continue;
        };

        let bytes = gateway.download(&object_name)?;
        let manifest = Manifest::from_bytes(&object_name, prefix, bytes)?;
        debug!(id = %manifest.id, prefix, "discovered manifest");
        manifests.push(manifest);
    }

    // Prefix breaks id ties so the order never depends on listing order.
    manifests.sort_by(|a, b| a.id.cmp(&b.id).then_with(|| a.prefix.cmp(&b.prefix)));
    Ok(manifests)
}
