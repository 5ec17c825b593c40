//! Bridge error types

use thiserror::Error;

/// Errors raised while building or serving a bridge.
///
/// Tool calls never produce these; their failures are returned as
/// error-flagged results instead.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// The builder was not given a transport
    #[error("a gateway transport is required")]
    MissingTransport,

    /// The MCP service failed to start
    #[error("Failed to start server: {0}")]
    Startup(String),

    /// The MCP service stopped abnormally
    #[error("Server error: {0}")]
    Runtime(String),
}

/// Result type alias for bridge operations
pub type Result<T> = std::result::Result<T, BridgeError>;
