use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::AppError;
use crate::ports::BlobGateway;

/// In-process blob container.
///
/// Clones share the same objects. Listing order is the reverse of name order so callers
/// cannot come to rely on it.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobGateway {
    objects: Arc<Mutex<BTreeMap<String, Vec<u8>>>>,
}

impl MemoryBlobGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an object directly, bypassing overwrite checks.
    pub fn insert(&self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.objects().insert(name.into(), bytes.into());
    }

    /// All object names in name order.
    pub fn object_names(&self) -> Vec<String> {
        self.objects().keys().cloned().collect()
    }

    fn objects(&self) -> MutexGuard<'_, BTreeMap<String, Vec<u8>>> {
        self.objects.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl BlobGateway for MemoryBlobGateway {
    fn ensure_container(&self) -> Result<(), AppError> {
        Ok(())
    }

    fn list_object_names(&self, prefix: &str) -> Result<Vec<String>, AppError> {
        Ok(self.objects().keys().rev().filter(|name| name.starts_with(prefix)).cloned().collect())
    }

    fn upload(&self, name: &str, bytes: &[u8], overwrite: bool) -> Result<(), AppError> {
        let mut objects = self.objects();
        if !overwrite && objects.contains_key(name) {
            return Err(AppError::AlreadyExists(name.to_string()));
        }
        objects.insert(name.to_string(), bytes.to_vec());
        Ok(())
    }

    fn download(&self, name: &str) -> Result<Vec<u8>, AppError> {
        self.objects().get(name).cloned().ok_or_else(|| AppError::NotFound(name.to_string()))
    }
}
