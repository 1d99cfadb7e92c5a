use crate::adapters::MemoryBlobGateway;
use crate::domain::AppError;
use crate::ports::BlobGateway;

/// Memory gateway whose listings replay a fixed name order.
pub struct ListingOrderGateway {
    inner: MemoryBlobGateway,
    order: Vec<String>,
}

impl ListingOrderGateway {
    /// `order` should name every stored object exactly once.
    pub fn new(inner: MemoryBlobGateway, order: Vec<String>) -> Self {
        Self { inner, order }
    }
}

impl BlobGateway for ListingOrderGateway {
    fn ensure_container(&self) -> Result<(), AppError> {
        self.inner.ensure_container()
    }

    fn list_object_names(&self, prefix: &str) -> Result<Vec<String>, AppError> {
        Ok(self.order.iter().filter(|name| name.starts_with(prefix)).cloned().collect())
    }

    fn upload(&self, name: &str, bytes: &[u8], overwrite: bool) -> Result<(), AppError> {
        self.inner.upload(name, bytes, overwrite)
    }

    fn download(&self, name: &str) -> Result<Vec<u8>, AppError> {
        self.inner.download(name)
    }
}
