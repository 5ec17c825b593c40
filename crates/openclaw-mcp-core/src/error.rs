//! Error types for gateway transports and in-memory tools

use std::process::ExitStatus;
use std::time::Duration;
use thiserror::Error;

/// Failure reported by a [`GatewayTransport`](crate::GatewayTransport).
///
/// The bridge never lets these escape a tool call; they are rendered with
/// `Display` into an error-flagged [`CallResult`](crate::CallResult).
#[derive(Error, Debug)]
pub enum TransportError {
    /// The remote gateway rejected the request
    #[error("{0}")]
    Remote(String),

    /// The transport does not implement the requested method
    #[error("Unsupported method: {0}")]
    UnsupportedMethod(String),

    /// `chat.send` was issued without a message
    #[error("message is required")]
    MissingMessage,

    /// The agent binary reported an error in its JSON output
    #[error("OpenClaw: {0}")]
    Agent(String),

    /// The subprocess could not be started
    #[error("failed to spawn `{program}`: {source}")]
    Spawn {
        /// Program that was being started
        program: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The subprocess exited unsuccessfully
    #[error("`{program}` exited with {status}{}", stderr_suffix(.stderr))]
    Exit {
        /// Program that failed
        program: String,
        /// Exit status reported by the OS
        status: ExitStatus,
        /// Captured standard error, trimmed
        stderr: String,
    },

    /// The subprocess did not finish within its wall-clock limit
    #[error("`{program}` timed out after {}ms", .timeout.as_millis())]
    Timeout {
        /// Program that was killed
        program: String,
        /// Limit that was exceeded
        timeout: Duration,
    },

    /// The subprocess wrote more output than allowed
    #[error("`{program}` produced more than {limit} bytes of output")]
    OutputTooLarge {
        /// Program that was killed
        program: String,
        /// Byte limit per stream
        limit: usize,
    },

    /// Reading from or waiting on the subprocess failed
    #[error("I/O error while running `{program}`: {source}")]
    Io {
        /// Program being run
        program: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Output was not valid JSON
    #[error("invalid JSON output: {0}")]
    InvalidOutput(#[from] serde_json::Error),

    /// A response had an unexpected shape
    #[error("invalid response to {method}: {reason}")]
    InvalidResponse {
        /// Method whose response was malformed
        method: String,
        /// What was wrong with it
        reason: String,
    },
}

impl TransportError {
    /// Create a remote rejection error
    pub fn remote(msg: impl Into<String>) -> Self {
        Self::Remote(msg.into())
    }

    /// Create an invalid response error
    pub fn invalid_response(method: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            method: method.into(),
            reason: reason.into(),
        }
    }
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {}", stderr)
    }
}

/// Result type alias for transport operations
pub type TransportResult<T> = std::result::Result<T, TransportError>;

/// Failure raised by an in-memory tool action
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    /// Invalid input provided to the tool
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Operation failed for a specific reason
    #[error("Operation failed: {0}")]
    OperationFailed(String),

    /// Internal error occurred
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create an InvalidInput error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create an OperationFailed error
    pub fn operation_failed(msg: impl Into<String>) -> Self {
        Self::OperationFailed(msg.into())
    }

    /// Create an Internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
