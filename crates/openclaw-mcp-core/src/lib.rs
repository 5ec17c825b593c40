//! Core abstractions for the OpenClaw MCP bridge
//!
//! This crate holds everything the bridge needs that does not depend on a
//! particular MCP server implementation:
//!
//! - [`ToolDefinition`] and [`RegistryEntry`], the public and internal tool shapes
//! - [`ContentBlock`] and [`CallResult`], the uniform output of every tool call
//! - [`normalize`], which reduces heterogeneous gateway content to content blocks
//! - [`GatewayTransport`], the single capability every backend implements
//! - [`convert_tool`] and [`ToolExecutor`] for tools supplied directly in memory
//!
//! ```
//! use openclaw_mcp_core::{normalize_content, ContentBlock};
//! use serde_json::json;
//!
//! let blocks = normalize_content(vec![
//!     json!({"type": "text", "text": "hello"}),
//!     json!({"type": "image", "mimeType": "image/png"}),
//! ]);
//!
//! assert_eq!(blocks[0], ContentBlock::text("hello"));
//! assert_eq!(blocks[1], ContentBlock::text("[image: image/png]"));
//! ```

pub mod adapter;
pub mod content;
pub mod error;
pub mod executor;
pub mod normalize;
pub mod tool;
pub mod transport;

pub use adapter::{convert_tool, SCHEMA_KEYWORDS};
pub use content::{CallResult, ContentBlock, ImageSource, NO_RESPONSE};
pub use error::{ToolError, TransportError, TransportResult};
pub use executor::{call_id, ToolExecutor};
pub use normalize::{normalize_content, normalize_result, GatewayContent};
pub use tool::{
    empty_object_schema, object_schema, FnTool, JsonObject, RegistryEntry, ToolDefinition,
    ToolLike, ToolOutput, ToolOutputItem,
};
pub use transport::{methods, CatalogTool, GatewayTransport, RequestOptions, ToolCatalog};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        content::{CallResult, ContentBlock, ImageSource},
        error::{ToolError, TransportError, TransportResult},
        executor::ToolExecutor,
        tool::{JsonObject, RegistryEntry, ToolDefinition, ToolLike, ToolOutput},
        transport::{methods, GatewayTransport, RequestOptions},
    };
}
