//! RMCP-based MCP server for the OpenClaw bridge
//!
//! Exposes [`McpBridge`] over stdio using the official rmcp crate. Both
//! protocol handlers make sure the gateway catalog has been fetched before
//! answering.

use openclaw_mcp_core::{CallResult, ContentBlock, ImageSource, ToolDefinition};
use rmcp::model::{
    Annotated, CallToolRequestParam, CallToolResult, Content, Implementation, ListToolsResult,
    PaginatedRequestParam, ProtocolVersion, RawContent, RawResource, ServerCapabilities,
    ServerInfo, Tool,
};
use rmcp::service::RequestContext;
use rmcp::{serve_server, ErrorData, RoleServer, ServerHandler};
use std::borrow::Cow;
use std::sync::Arc;
use tokio::io::{stdin, stdout};
use tracing::{info, warn};

use crate::bridge::{McpBridge, LOG_TARGET};
use crate::error::{BridgeError, Result};

const OCTET_STREAM: &str = "application/octet-stream";

fn to_rmcp_tool(definition: ToolDefinition) -> Tool {
    Tool {
        name: Cow::Owned(definition.name),
        description: Some(Cow::Owned(definition.description)),
        input_schema: Arc::new(definition.input_schema),
        output_schema: None,
        annotations: None,
        title: None,
        icons: None,
    }
}

/// Convert one content block to MCP content.
///
/// Base64 images map to MCP image content. URL images have no inline bytes,
/// so they become resource links.
fn to_rmcp_content(block: ContentBlock) -> Content {
    match block {
        ContentBlock::Text { text } => Content::text(text),
        ContentBlock::Image {
            source: ImageSource::Base64 { data, media_type },
            ..
        } => Content::image(data, media_type.unwrap_or_else(|| OCTET_STREAM.to_string())),
        ContentBlock::Image {
            source: ImageSource::Url { url },
            media_type,
        } => {
            let mut resource = RawResource::new(url, "image");
            resource.mime_type = media_type;
            Annotated::new(RawContent::ResourceLink(resource), None)
        }
    }
}

fn to_rmcp_result(result: CallResult) -> CallToolResult {
    CallToolResult {
        content: result.content.into_iter().map(to_rmcp_content).collect(),
        structured_content: None,
        is_error: Some(result.is_error),
        meta: None,
    }
}

impl ServerHandler for McpBridge {
    fn get_info(&self) -> ServerInfo {
        let identity = self.server_info();
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: identity.name.clone(),
                version: identity.version.clone(),
                title: None,
                website_url: None,
                icons: None,
            },
            instructions: Some(
                "Bridge to the OpenClaw assistant. Use `chat` to talk to it; gateway tools are listed alongside."
                    .to_string(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, ErrorData> {
        self.load_gateway_tools().await;

        Ok(ListToolsResult {
            tools: McpBridge::list_tools(self)
                .into_iter()
                .map(to_rmcp_tool)
                .collect(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, ErrorData> {
        self.load_gateway_tools().await;

        let args = request.arguments.unwrap_or_default();
        let result = McpBridge::call_tool(self, &request.name, args).await;
        Ok(to_rmcp_result(result))
    }
}

/// Resolves on Ctrl-C, or SIGTERM on unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

impl McpBridge {
    /// Serve MCP over stdin/stdout until the client disconnects or the
    /// process is asked to stop.
    ///
    /// Shutdown does not wait for in-flight tool calls.
    pub async fn serve(&self) -> Result<()> {
        let running = serve_server(self.clone(), (stdin(), stdout()))
            .await
            .map_err(|e| BridgeError::Startup(format!("{:?}", e)))?;

        if self.is_verbose() {
            info!(target: LOG_TARGET, "MCP server started on stdio");
        }

        let token = running.cancellation_token();
        let signal = tokio::spawn(async move {
            shutdown_signal().await;
            token.cancel();
        });

        let quit = running.waiting().await;
        signal.abort();
        let reason = quit.map_err(|e| BridgeError::Runtime(format!("{:?}", e)))?;

        if self.is_verbose() {
            info!(target: LOG_TARGET, "MCP server stopped: {:?}", reason);
        }
        Ok(())
    }
}
