//! Tool definitions, registry entries and in-memory tool descriptors

use async_trait::async_trait;
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

use crate::error::ToolError;

/// A JSON object, as used for input schemas and tool arguments
pub type JsonObject = Map<String, Value>;

/// Tool definition in the shape MCP clients see
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: JsonObject,
}

impl ToolDefinition {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: JsonObject,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }
}

/// A tool definition plus the upstream session its calls are routed under
#[derive(Debug, Clone, PartialEq)]
pub struct RegistryEntry {
    pub definition: ToolDefinition,
    pub session_key: String,
}

impl RegistryEntry {
    pub fn new(definition: ToolDefinition, session_key: impl Into<String>) -> Self {
        Self {
            definition,
            session_key: session_key.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }
}

/// Build `{type: "object", properties, required}`
pub fn object_schema(properties: JsonObject, required: Vec<String>) -> JsonObject {
    let mut schema = JsonObject::new();
    schema.insert("type".to_string(), Value::String("object".to_string()));
    schema.insert("properties".to_string(), Value::Object(properties));
    schema.insert(
        "required".to_string(),
        Value::Array(required.into_iter().map(Value::String).collect()),
    );
    schema
}

/// The schema used for tools that declare no parameters
pub fn empty_object_schema() -> JsonObject {
    object_schema(JsonObject::new(), Vec::new())
}

/// One content item returned by an in-memory tool action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolOutputItem {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl ToolOutputItem {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: "text".to_string(),
            text: Some(text.into()),
        }
    }
}

/// Result of an in-memory tool action
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolOutput {
    pub content: Vec<ToolOutputItem>,
}

impl ToolOutput {
    pub fn new(content: Vec<ToolOutputItem>) -> Self {
        Self { content }
    }

    /// Single text item output
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(vec![ToolOutputItem::text(text)])
    }
}

/// A tool supplied directly rather than through a gateway catalog.
///
/// `parameters` is the raw schema object produced by whatever schema
/// library built the tool; [`convert_tool`](crate::convert_tool) projects it
/// down to plain JSON Schema.
#[async_trait]
pub trait ToolLike: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> Option<&str> {
        None
    }

    fn parameters(&self) -> Option<&JsonObject> {
        None
    }

    async fn execute(&self, call_id: &str, args: JsonObject) -> Result<ToolOutput, ToolError>;
}

type ToolAction =
    Arc<dyn Fn(String, JsonObject) -> BoxFuture<'static, Result<ToolOutput, ToolError>> + Send + Sync>;

/// A [`ToolLike`] backed by a closure
#[derive(Clone)]
pub struct FnTool {
    name: String,
    description: Option<String>,
    parameters: Option<JsonObject>,
    action: ToolAction,
}

impl FnTool {
    pub fn new<F>(name: impl Into<String>, action: F) -> Self
    where
        F: Fn(String, JsonObject) -> BoxFuture<'static, Result<ToolOutput, ToolError>>
            + Send
            + Sync
            + 'static,
    {
        Self {
            name: name.into(),
            description: None,
            parameters: None,
            action: Arc::new(action),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_parameters(mut self, parameters: JsonObject) -> Self {
        self.parameters = Some(parameters);
        self
    }
}

impl fmt::Debug for FnTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTool")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ToolLike for FnTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn parameters(&self) -> Option<&JsonObject> {
        self.parameters.as_ref()
    }

    async fn execute(&self, call_id: &str, args: JsonObject) -> Result<ToolOutput, ToolError> {
        (self.action)(call_id.to_string(), args).await
    }
}
