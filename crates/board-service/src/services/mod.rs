//! Application services
//!
//! Enrichment of audit rows, validation of untyped records, and feed assembly.

pub mod context;
pub mod enricher;
pub mod error;
pub mod feed;
pub mod validation;

// Re-export all services for convenience
pub use context::ServiceContext;
pub use enricher::LogEnricher;
pub use error::{ServiceError, ServiceResult};
pub use feed::FeedService;
pub use validation::SchemaValidator;
