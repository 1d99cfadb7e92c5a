pub mod connection_string;
pub mod storage_config;

pub use connection_string::{ConnectionString, StorageCredential};
pub use storage_config::{
    ALT_CONNECTION_STRING_ENV, CONNECTION_STRING_ENV, CONTAINER_NAME, DEVELOPMENT_STORAGE_SENTINEL,
    StorageConfig,
};
