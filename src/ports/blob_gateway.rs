//! Blob storage gateway port.
//!
//! Primitive operations against one storage container. Adapters own transport, credentials,
//! and paging; callers own object naming.

use crate::domain::AppError;

/// Port for blob container operations.
pub trait BlobGateway {
    /// Create the container if it does not exist. Succeeds when it already exists.
    fn ensure_container(&self) -> Result<(), AppError>;

    /// Names of all objects starting with `prefix`, in no guaranteed order.
    fn list_object_names(&self, prefix: &str) -> Result<Vec<String>, AppError>;

    /// Write `bytes` to `name`. Without `overwrite`, an existing object yields
    /// `AppError::AlreadyExists`.
    fn upload(&self, name: &str, bytes: &[u8], overwrite: bool) -> Result<(), AppError>;

    /// Full contents of `name`, or `AppError::NotFound`.
    fn download(&self, name: &str) -> Result<Vec<u8>, AppError>;
}
