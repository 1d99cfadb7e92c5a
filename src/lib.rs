//! blob-templates: seed, list, and show demo templates kept in Azure Blob Storage.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::*;
