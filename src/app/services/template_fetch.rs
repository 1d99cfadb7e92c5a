use tracing::debug;

use crate::domain::AppError;
use crate::domain::layout::template_object_name;
use crate::ports::BlobGateway;

/// A downloaded template body and the object it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedTemplate {
    pub object_name: String,
    pub body: String,
}

/// Download and decode `<prefix>template.md`.
pub fn fetch_template(
    gateway: &(impl BlobGateway + ?Sized),
    prefix: &str,
) -> Result<FetchedTemplate, AppError> {
    let object_name = template_object_name(prefix);
    let bytes = gateway.download(&object_name)?;
    let body = String::from_utf8(bytes)
        .map_err(|source| AppError::Decode { name: object_name.clone(), source })?;

    debug!(object = %object_name, len = body.len(), "fetched template");
    Ok(FetchedTemplate { object_name, body })
}
