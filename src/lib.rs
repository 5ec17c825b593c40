//! # OpenClaw MCP
//!
//! Expose the OpenClaw assistant to MCP (Model Context Protocol) clients.
//!
//! ## Overview
//!
//! The bridge always offers a `chat` tool that forwards messages to the
//! assistant. On first use it also asks the gateway for its tool catalog and
//! republishes those tools, routing each call back through the gateway with
//! the right session key.
//!
//! The pieces are usable on their own:
//! - [`core`]: data model, the [`GatewayTransport`](core::GatewayTransport)
//!   contract, content normalization, and a standalone tool executor
//! - [`bridge`]: the bridge itself, its stdio MCP server and a CLI-backed
//!   transport
//!
//! ## Quick Start
//!
//! ```no_run
//! use openclaw_mcp::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let bridge = BridgeBuilder::new()
//!         .transport(CliTransport::new())
//!         .build()?;
//!
//!     bridge.load_gateway_tools().await;
//!     bridge.serve().await?;
//!     Ok(())
//! }
//! ```

// Re-export core functionality
pub use openclaw_mcp_core as core;

// Re-export the bridge
#[cfg(feature = "bridge")]
pub use openclaw_mcp_bridge as bridge;

/// Prelude module for convenient imports
pub mod prelude {
    pub use openclaw_mcp_core::prelude::*;

    #[cfg(feature = "bridge")]
    pub use openclaw_mcp_bridge::{
        BridgeBuilder, BridgeError, CliTransport, McpBridge, ServerIdentity,
    };
}
