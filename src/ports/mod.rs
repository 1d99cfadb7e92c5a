mod blob_gateway;
mod console;

pub use blob_gateway::BlobGateway;
pub use console::Console;
