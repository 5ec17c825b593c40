//! The gateway transport contract
//!
//! A transport performs one named remote operation with JSON parameters and
//! optional hints. The bridge uses three methods, listed in [`methods`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::error::{TransportError, TransportResult};
use crate::tool::{empty_object_schema, ToolDefinition};

/// Method names understood by gateway transports
pub mod methods {
    /// Fetch the remote tool catalog: `{} -> {tools: [...], sessionKey?}`
    pub const TOOLS_LIST: &str = "tools.list";
    /// Send a chat message: `{sessionKey, message} -> {message: {content: [...]}}`
    pub const CHAT_SEND: &str = "chat.send";
    /// Invoke a catalog tool: `{sessionKey, name, args} -> {content?: [...]}`
    pub const TOOLS_CALL: &str = "tools.call";
}

/// Hints attached to a transport request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestOptions {
    /// Wait for the final response instead of a streaming partial
    #[serde(rename = "expectFinal")]
    pub expect_final: bool,
}

impl RequestOptions {
    pub const fn expect_final() -> Self {
        Self { expect_final: true }
    }
}

/// Perform a named remote operation.
#[async_trait]
pub trait GatewayTransport: Send + Sync {
    async fn request(
        &self,
        method: &str,
        params: Value,
        options: RequestOptions,
    ) -> TransportResult<Value>;
}

#[async_trait]
impl<T: GatewayTransport + ?Sized> GatewayTransport for Arc<T> {
    async fn request(
        &self,
        method: &str,
        params: Value,
        options: RequestOptions,
    ) -> TransportResult<Value> {
        (**self).request(method, params, options).await
    }
}

/// One tool descriptor in a `tools.list` response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogTool {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parameters: Option<Value>,
}

impl CatalogTool {
    /// Use the descriptor's own schema, or an empty object schema when it
    /// has none
    pub fn into_definition(self) -> ToolDefinition {
        let input_schema = match self.parameters {
            Some(Value::Object(schema)) => schema,
            _ => empty_object_schema(),
        };
        ToolDefinition::new(self.name, self.description.unwrap_or_default(), input_schema)
    }
}

/// A `tools.list` response
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ToolCatalog {
    #[serde(default)]
    pub tools: Vec<CatalogTool>,
    #[serde(rename = "sessionKey", default)]
    pub session_key: Option<String>,
}

impl ToolCatalog {
    pub fn from_value(value: Value) -> TransportResult<Self> {
        serde_json::from_value(value)
            .map_err(|e| TransportError::invalid_response(methods::TOOLS_LIST, e.to_string()))
    }
}
