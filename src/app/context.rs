use crate::ports::BlobGateway;

/// Application context holding the process-wide storage handle.
pub struct AppContext<G: BlobGateway> {
    gateway: G,
}

impl<G: BlobGateway> AppContext<G> {
    /// Create a new application context.
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Get a reference to the blob gateway.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }
}
