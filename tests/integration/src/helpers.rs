//! Test helpers for integration tests

use std::sync::Arc;

use board_common::{try_init_tracing_with_config, FeedConfig, TracingConfig};
use board_core::{ChangeLogEntry, ValidationError};
use board_service::ServiceContext;
use serde_json::Value as JsonValue;

use crate::fixtures::InMemoryChangeLogSource;

/// Install a debug subscriber once; later calls are no-ops
pub fn init_test_tracing() {
    let _ = try_init_tracing_with_config(TracingConfig::development());
}

/// Service context over an in-memory source
pub fn test_context(source: Arc<InMemoryChangeLogSource>, feed: FeedConfig) -> ServiceContext {
    init_test_tracing();
    ServiceContext::new(source, feed)
}

/// Serialize an entry the way the presentation layer receives it
pub fn entry_json(entry: &ChangeLogEntry) -> anyhow::Result<JsonValue> {
    Ok(serde_json::to_value(entry)?)
}

/// Enrichment keys populated in a serialized entry
pub fn populated_payload_keys(json: &JsonValue) -> Vec<&'static str> {
    const KEYS: [&str; 8] = [
        "assignment",
        "comment",
        "milestone",
        "file",
        "projectMember",
        "task_label",
        "task",
        "user",
    ];
    KEYS.into_iter().filter(|k| json.get(k).is_some()).collect()
}

/// Sorted field names of every violation
pub fn violated_fields(err: &ValidationError) -> Vec<&str> {
    let mut fields: Vec<&str> = err.violations().iter().map(|v| v.field.as_str()).collect();
    fields.sort_unstable();
    fields
}
