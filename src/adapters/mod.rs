pub mod blob_gateway_http;
pub mod blob_gateway_retrying;
pub mod memory_blob_gateway;
mod shared_key;
pub mod terminal_console;

pub use blob_gateway_http::HttpBlobGateway;
pub use blob_gateway_retrying::{RetryPolicy, RetryingBlobGateway};
pub use memory_blob_gateway::MemoryBlobGateway;
pub use terminal_console::TerminalConsole;
