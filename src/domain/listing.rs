use crate::domain::Manifest;

pub const LISTING_HEADER: &str = "Available templates:";

/// Render manifests as a numbered list, 1-indexed in input order.
///
/// An empty slice still yields the header line.
pub fn format_manifest_list(manifests: &[Manifest]) -> String {
    let mut lines = vec![LISTING_HEADER.to_string()];
    lines.extend(manifests.iter().enumerate().map(|(index, manifest)| {
        format!(
            "  {}. {} (id={}, version={})",
            index + 1,
            manifest.name,
            manifest.id,
            manifest.version
        )
    }));
    lines.join("\n")
}
