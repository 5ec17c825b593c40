//! The bridge facade: tool registry, catalog loading and call dispatch

use openclaw_mcp_core::{
    methods, normalize_result, object_schema, CallResult, GatewayTransport,
    JsonObject, RegistryEntry, RequestOptions, ToolCatalog, ToolDefinition, NO_RESPONSE,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::watch;
use tracing::{info, warn};

use crate::registry::ToolRegistry;

/// Name of the built-in chat tool
pub const CHAT_TOOL_NAME: &str = "chat";

/// Session key used when neither the caller nor the catalog supplies one
pub const DEFAULT_SESSION_KEY: &str = "agent:main:main";

/// Tracing target for verbose bridge diagnostics
pub const LOG_TARGET: &str = "openclaw_mcp::bridge";

const MESSAGE_PREVIEW_CHARS: usize = 80;

/// Name and version the MCP server reports to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerIdentity {
    pub name: String,
    pub version: String,
}

impl ServerIdentity {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

impl Default for ServerIdentity {
    fn default() -> Self {
        Self::new("openclaw-mcp", env!("CARGO_PKG_VERSION"))
    }
}

/// Construction-time configuration for [`McpBridge`]
#[derive(Clone)]
pub struct BridgeOptions {
    pub transport: Arc<dyn GatewayTransport>,
    pub server_info: ServerIdentity,
    pub default_session_key: String,
    pub verbose: bool,
}

impl BridgeOptions {
    pub fn new(transport: Arc<dyn GatewayTransport>, server_info: ServerIdentity) -> Self {
        Self {
            transport,
            server_info,
            default_session_key: DEFAULT_SESSION_KEY.to_string(),
            verbose: false,
        }
    }
}

struct BridgeInner {
    transport: Arc<dyn GatewayTransport>,
    server_info: ServerIdentity,
    default_session_key: String,
    verbose: bool,
    registry: RwLock<ToolRegistry>,
    catalog: OnceLock<watch::Receiver<bool>>,
}

/// MCP bridge over a gateway transport.
///
/// Cloning is cheap; clones share the registry and catalog state.
#[derive(Clone)]
pub struct McpBridge {
    inner: Arc<BridgeInner>,
}

fn chat_entry(default_session_key: &str) -> RegistryEntry {
    let mut properties = JsonObject::new();
    properties.insert(
        "message".to_string(),
        json!({"type": "string", "description": "The message to send"}),
    );
    properties.insert(
        "session".to_string(),
        json!({
            "type": "string",
            "description": format!("Session key (default: {})", default_session_key)
        }),
    );

    RegistryEntry::new(
        ToolDefinition::new(
            CHAT_TOOL_NAME,
            "Send a message to the OpenClaw assistant and get a response",
            object_schema(properties, vec!["message".to_string()]),
        ),
        default_session_key,
    )
}

/// Text of the first `text` item in a `chat.send` reply
fn chat_reply_text(reply: &Value) -> Option<String> {
    reply
        .pointer("/message/content")
        .and_then(Value::as_array)?
        .iter()
        .find(|item| item.get("type").and_then(Value::as_str) == Some("text"))?
        .get("text")
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn non_empty_str<'a>(args: &'a JsonObject, key: &str) -> Option<&'a str> {
    args.get(key)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}

fn preview(message: &str) -> String {
    message.chars().take(MESSAGE_PREVIEW_CHARS).collect()
}

impl McpBridge {
    pub fn new(options: BridgeOptions) -> Self {
        let mut registry = ToolRegistry::new();
        registry.upsert(chat_entry(&options.default_session_key));

        Self {
            inner: Arc::new(BridgeInner {
                transport: options.transport,
                server_info: options.server_info,
                default_session_key: options.default_session_key,
                verbose: options.verbose,
                registry: RwLock::new(registry),
                catalog: OnceLock::new(),
            }),
        }
    }

    pub fn server_info(&self) -> &ServerIdentity {
        &self.inner.server_info
    }

    pub fn default_session_key(&self) -> &str {
        &self.inner.default_session_key
    }

    pub fn is_verbose(&self) -> bool {
        self.inner.verbose
    }

    /// Whether the catalog fetch has completed (successfully or not)
    pub fn catalog_loaded(&self) -> bool {
        self.inner
            .catalog
            .get()
            .is_some_and(|loaded| *loaded.borrow())
    }

    fn registry(&self) -> RwLockReadGuard<'_, ToolRegistry> {
        self.inner
            .registry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn registry_mut(&self) -> RwLockWriteGuard<'_, ToolRegistry> {
        self.inner
            .registry
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Every registered tool, without session routing
    pub fn list_tools(&self) -> Vec<ToolDefinition> {
        self.registry().definitions()
    }

    /// Fetch the gateway catalog once.
    ///
    /// Later and concurrent calls wait on the first fetch and never reach
    /// the transport. A failed fetch leaves the bridge chat-only. The fetch
    /// runs on its own task, so dropping a waiting caller does not restart it.
    pub async fn load_gateway_tools(&self) {
        let mut loaded = self
            .inner
            .catalog
            .get_or_init(|| self.spawn_catalog_fetch())
            .clone();
        // Err means the fetch task died; the bridge stays chat-only.
        let _ = loaded.wait_for(|done| *done).await;
    }

    fn spawn_catalog_fetch(&self) -> watch::Receiver<bool> {
        let (done, loaded) = watch::channel(false);
        let bridge = self.clone();
        tokio::spawn(async move {
            bridge.fetch_catalog().await;
            done.send_replace(true);
        });
        loaded
    }

    async fn fetch_catalog(&self) {
        let response = self
            .inner
            .transport
            .request(
                methods::TOOLS_LIST,
                Value::Object(JsonObject::new()),
                RequestOptions::default(),
            )
            .await
            .and_then(ToolCatalog::from_value);

        let catalog = match response {
            Ok(catalog) => catalog,
            Err(err) => {
                if self.inner.verbose {
                    warn!(
                        target: LOG_TARGET,
                        "tools.list not available ({}), using chat-only mode", err
                    );
                }
                return;
            }
        };

        let session_key = catalog
            .session_key
            .unwrap_or_else(|| self.inner.default_session_key.clone());
        let count = catalog.tools.len();
        {
            let mut registry = self.registry_mut();
            for tool in catalog.tools {
                registry.upsert(RegistryEntry::new(tool.into_definition(), session_key.clone()));
            }
        }

        if self.inner.verbose {
            info!(
                target: LOG_TARGET,
                "loaded {} tools from gateway (session: {})", count, session_key
            );
        }
    }

    /// Dispatch a tool call by name. Never fails; errors come back as
    /// error-flagged results.
    pub async fn call_tool(&self, name: &str, args: JsonObject) -> CallResult {
        if name == CHAT_TOOL_NAME {
            return self.execute_chat(args).await;
        }

        let entry = self.registry().get(name).cloned();
        match entry {
            Some(entry) => self.execute_gateway_tool(entry, args).await,
            None => CallResult::unknown_tool(name),
        }
    }

    async fn execute_chat(&self, args: JsonObject) -> CallResult {
        let Some(message) = non_empty_str(&args, "message") else {
            return CallResult::error_text("Error: message is required");
        };
        let session_key =
            non_empty_str(&args, "session").unwrap_or(&self.inner.default_session_key);

        if self.inner.verbose {
            info!(target: LOG_TARGET, "chat: {}: {}", session_key, preview(message));
        }

        let params = json!({"sessionKey": session_key, "message": message});
        match self
            .inner
            .transport
            .request(methods::CHAT_SEND, params, RequestOptions::expect_final())
            .await
        {
            Ok(reply) => {
                CallResult::text(chat_reply_text(&reply).unwrap_or_else(|| NO_RESPONSE.to_string()))
            }
            Err(err) => CallResult::failure(&err),
        }
    }

    async fn execute_gateway_tool(&self, entry: RegistryEntry, args: JsonObject) -> CallResult {
        if self.inner.verbose {
            info!(target: LOG_TARGET, "tool: {}", entry.name());
        }

        let params = json!({
            "sessionKey": entry.session_key,
            "name": entry.definition.name,
            "args": args,
        });
        match self
            .inner
            .transport
            .request(methods::TOOLS_CALL, params, RequestOptions::default())
            .await
        {
            Ok(result) => CallResult::success(normalize_result(result)),
            Err(err) => CallResult::failure(&err),
        }
    }
}

impl std::fmt::Debug for McpBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("McpBridge")
            .field("server_info", &self.inner.server_info)
            .field("default_session_key", &self.inner.default_session_key)
            .field("verbose", &self.inner.verbose)
            .field("catalog_loaded", &self.catalog_loaded())
            .finish_non_exhaustive()
    }
}

/// Input schema of the built-in chat tool
pub fn chat_tool_definition(default_session_key: &str) -> ToolDefinition {
    chat_entry(default_session_key).definition
}
