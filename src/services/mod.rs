// Service exports
pub mod ingest;
pub mod store;

pub use ingest::{BoardSource, GreenhouseClient, IngestError};
pub use store::{JobStore, StoreError};
