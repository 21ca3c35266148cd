//! # board-service
//!
//! Application layer: turns raw audit rows into feed entries, validates
//! untyped records into entities, and assembles project feeds.

pub mod dto;
pub mod services;

pub use services::{
    FeedService, LogEnricher, SchemaValidator, ServiceContext, ServiceError, ServiceResult,
};
