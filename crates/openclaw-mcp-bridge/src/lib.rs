//! # OpenClaw MCP Bridge
//!
//! MCP server that exposes the OpenClaw assistant to MCP clients.
//!
//! ## Features
//!
//! - **Built-in chat tool**: `chat` is always available and forwards to `chat.send`
//! - **Lazy tool catalog**: gateway tools are fetched once, on first use
//! - **Pluggable transport**: anything implementing [`GatewayTransport`]
//! - **CLI transport**: drive the `openclaw` binary when no gateway is running
//!
//! ## Quick Start
//!
//! ```no_run
//! use openclaw_mcp_bridge::start_cli_bridge;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     start_cli_bridge("openclaw").await?;
//!     Ok(())
//! }
//! ```

pub mod bridge;
pub mod builder;
pub mod cli_transport;
pub mod error;
pub mod registry;
pub mod rmcp_server;

#[cfg(test)]
mod test_support;

// Re-export main types for convenience
pub use bridge::{
    chat_tool_definition, BridgeOptions, McpBridge, ServerIdentity, CHAT_TOOL_NAME,
    DEFAULT_SESSION_KEY, LOG_TARGET,
};
pub use builder::BridgeBuilder;
pub use cli_transport::{
    parse_cli_output, CliSettings, CliTransport, CommandOutput, CommandRunner, ProcessRunner,
    RunLimits, CLI_SESSION_KEY, DEFAULT_BINARY,
};
pub use error::{BridgeError, Result};
pub use openclaw_mcp_core::GatewayTransport;
pub use registry::ToolRegistry;

/// Serve an MCP bridge backed by the `openclaw` binary at `binary`.
///
/// Loads the (empty) CLI catalog up front, then serves stdio until shutdown.
pub async fn start_cli_bridge(binary: &str) -> Result<()> {
    let bridge = BridgeBuilder::new()
        .transport(CliTransport::with_binary(binary))
        .build()?;
    bridge.load_gateway_tools().await;
    bridge.serve().await
}
