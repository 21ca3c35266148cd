//! Data transfer objects for untyped inputs and feed outputs
//!
//! This module provides:
//! - Payload DTOs with content rules for validated records
//! - Response DTOs for serialized feeds
//! - Mappers for converting payloads into domain entities

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{FilePayload, LabelPayload, MilestonePayload, UserPayload};
pub use responses::FeedResponse;
