//! Testing utilities for the OpenClaw MCP bridge
//!
//! Provides a scripted, recording [`MockTransport`] and assertion helpers
//! for [`CallResult`](openclaw_mcp_core::CallResult) values.

pub mod assertions;
pub mod mock;

pub use assertions::ResultAssertions;
pub use mock::{MockTransport, RecordedRequest};

use openclaw_mcp_core::JsonObject;
use serde_json::Value;

/// Build a JSON object from a `json!` literal.
///
/// Panics when the value is not an object.
pub fn args(value: Value) -> JsonObject {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {}", other),
    }
}
