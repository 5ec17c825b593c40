//! Builder pattern for creating and configuring MCP bridges

use openclaw_mcp_core::GatewayTransport;
use std::sync::Arc;

use crate::bridge::{BridgeOptions, McpBridge, ServerIdentity, DEFAULT_SESSION_KEY};
use crate::error::{BridgeError, Result};

/// Builder for [`McpBridge`]
///
/// # Example
///
/// ```no_run
/// use openclaw_mcp_bridge::{BridgeBuilder, CliTransport};
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let bridge = BridgeBuilder::new()
///         .transport(CliTransport::new())
///         .server_info("openclaw", "1.0.0")
///         .verbose(true)
///         .build()?;
///
///     bridge.load_gateway_tools().await;
///     bridge.serve().await?;
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BridgeBuilder {
    transport: Option<Arc<dyn GatewayTransport>>,
    server_info: ServerIdentity,
    default_session_key: String,
    verbose: bool,
}

impl Default for BridgeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BridgeBuilder {
    pub fn new() -> Self {
        Self {
            transport: None,
            server_info: ServerIdentity::default(),
            default_session_key: DEFAULT_SESSION_KEY.to_string(),
            verbose: false,
        }
    }

    /// Set the gateway transport (required)
    pub fn transport<T>(mut self, transport: T) -> Self
    where
        T: GatewayTransport + 'static,
    {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Set an already shared gateway transport
    pub fn shared_transport(mut self, transport: Arc<dyn GatewayTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Name and version reported to MCP clients
    pub fn server_info(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.server_info = ServerIdentity::new(name, version);
        self
    }

    /// Session used for chat calls without an explicit `session` argument.
    /// Empty keys are ignored.
    pub fn default_session_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        if !key.is_empty() {
            self.default_session_key = key;
        }
        self
    }

    /// Emit diagnostics through `tracing`
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn build(self) -> Result<McpBridge> {
        let transport = self.transport.ok_or(BridgeError::MissingTransport)?;

        Ok(McpBridge::new(BridgeOptions {
            transport,
            server_info: self.server_info,
            default_session_key: self.default_session_key,
            verbose: self.verbose,
        }))
    }
}
