//! Execute tools supplied directly in memory

use chrono::Utc;
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::debug;

use crate::adapter::convert_tool;
use crate::content::{CallResult, ContentBlock};
use crate::tool::{JsonObject, ToolDefinition, ToolLike};

/// Correlation id for one tool call: `mcp-<unix millis>`.
///
/// Good enough for tracing; not globally unique.
pub fn call_id() -> String {
    format!("mcp-{}", Utc::now().timestamp_millis())
}

/// Dispatches calls over a fixed list of [`ToolLike`] descriptors
pub struct ToolExecutor {
    tools: Vec<Arc<dyn ToolLike>>,
    index: FxHashMap<String, usize>,
}

impl ToolExecutor {
    /// Later descriptors win when names collide
    pub fn new(tools: Vec<Arc<dyn ToolLike>>) -> Self {
        let index = tools
            .iter()
            .enumerate()
            .map(|(position, tool)| (tool.name().to_string(), position))
            .collect();
        Self { tools, index }
    }

    /// The descriptors, exactly as supplied
    pub fn list_tools(&self) -> &[Arc<dyn ToolLike>] {
        &self.tools
    }

    /// MCP definitions for every descriptor
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|tool| convert_tool(tool.as_ref())).collect()
    }

    pub async fn execute_tool(&self, name: &str, args: JsonObject) -> CallResult {
        let Some(tool) = self.index.get(name).map(|&position| &self.tools[position]) else {
            return CallResult::unknown_tool(name);
        };

        let id = call_id();
        debug!(tool = name, call_id = %id, "executing tool");

        match tool.execute(&id, args).await {
            Ok(output) => CallResult::success(
                output
                    .content
                    .into_iter()
                    .map(|item| ContentBlock::text(item.text.unwrap_or_default()))
                    .collect(),
            ),
            Err(err) => CallResult::failure(&err),
        }
    }
}
