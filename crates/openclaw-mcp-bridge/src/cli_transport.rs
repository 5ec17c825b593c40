//! Gateway transport backed by the `openclaw` command-line program
//!
//! Each `chat.send` runs `openclaw agent ... --json` as a child process and
//! reshapes its JSON output into the gateway reply shape. The CLI has no
//! tool catalog, so `tools.list` answers with an empty one.

use async_trait::async_trait;
use openclaw_mcp_core::{
    methods, GatewayTransport, RequestOptions, TransportError, TransportResult, NO_RESPONSE,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tracing::debug;

use crate::bridge::LOG_TARGET;

/// Program name looked up on `PATH` when no binary is configured
pub const DEFAULT_BINARY: &str = "openclaw";

/// Session key reported by the empty CLI catalog
pub const CLI_SESSION_KEY: &str = "cli";

const DEFAULT_AGENT: &str = "main";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_PROCESS_TIMEOUT_SECS: u64 = 35;
const DEFAULT_MAX_OUTPUT_BYTES: usize = 10 * 1024 * 1024;

/// Settings for [`CliTransport`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliSettings {
    /// Program to execute
    pub binary: String,
    /// Agent name passed as `--agent`
    pub agent: String,
    /// Timeout the agent is asked to honour, passed as `--timeout`
    pub request_timeout_secs: u64,
    /// Wall-clock limit on the child process
    pub process_timeout_secs: u64,
    /// Largest stdout or stderr accepted from the child
    pub max_output_bytes: usize,
}

impl Default for CliSettings {
    fn default() -> Self {
        Self {
            binary: DEFAULT_BINARY.to_string(),
            agent: DEFAULT_AGENT.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            process_timeout_secs: DEFAULT_PROCESS_TIMEOUT_SECS,
            max_output_bytes: DEFAULT_MAX_OUTPUT_BYTES,
        }
    }
}

/// Limits applied to one child process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunLimits {
    pub timeout: Duration,
    pub max_output_bytes: usize,
}

/// Captured output of a successful run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Runs an external program to completion
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(
        &self,
        program: &str,
        args: &[String],
        limits: RunLimits,
    ) -> TransportResult<CommandOutput>;
}

/// [`CommandRunner`] that spawns real child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

async fn read_capped<R>(stream: Option<R>, program: &str, limit: usize) -> TransportResult<String>
where
    R: AsyncRead + Unpin,
{
    let Some(stream) = stream else {
        return Ok(String::new());
    };

    let mut buf = Vec::new();
    stream
        .take(limit as u64 + 1)
        .read_to_end(&mut buf)
        .await
        .map_err(|source| TransportError::Io {
            program: program.to_string(),
            source,
        })?;

    if buf.len() > limit {
        return Err(TransportError::OutputTooLarge {
            program: program.to_string(),
            limit,
        });
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(
        &self,
        program: &str,
        args: &[String],
        limits: RunLimits,
    ) -> TransportResult<CommandOutput> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| TransportError::Spawn {
                program: program.to_string(),
                source,
            })?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        let collect = async {
            tokio::try_join!(
                read_capped(stdout, program, limits.max_output_bytes),
                read_capped(stderr, program, limits.max_output_bytes),
                async {
                    child.wait().await.map_err(|source| TransportError::Io {
                        program: program.to_string(),
                        source,
                    })
                },
            )
        };

        // On timeout the child is killed when it drops at return.
        let (stdout, stderr, status) = tokio::time::timeout(limits.timeout, collect)
            .await
            .map_err(|_| TransportError::Timeout {
                program: program.to_string(),
                timeout: limits.timeout,
            })??;

        if !status.success() {
            return Err(TransportError::Exit {
                program: program.to_string(),
                status,
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(CommandOutput { stdout, stderr })
    }
}

#[derive(Debug, Default, Deserialize)]
struct AgentOutput {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    result: Option<AgentResult>,
}

#[derive(Debug, Default, Deserialize)]
struct AgentResult {
    #[serde(default)]
    payloads: Vec<AgentPayload>,
}

#[derive(Debug, Default, Deserialize)]
struct AgentPayload {
    #[serde(default)]
    text: Option<String>,
}

/// Reshape `openclaw agent --json` output into a `chat.send` reply
pub fn parse_cli_output(stdout: &str) -> TransportResult<Value> {
    let output: AgentOutput = serde_json::from_str(stdout)?;

    if let Some(error) = output.error.filter(|e| !e.is_empty()) {
        return Err(TransportError::Agent(error));
    }

    let text = output
        .result
        .and_then(|result| result.payloads.into_iter().next())
        .and_then(|payload| payload.text)
        .unwrap_or_else(|| NO_RESPONSE.to_string());

    Ok(json!({"message": {"content": [{"type": "text", "text": text}]}}))
}

/// Gateway transport that shells out to the `openclaw` CLI
#[derive(Clone)]
pub struct CliTransport {
    settings: CliSettings,
    runner: Arc<dyn CommandRunner>,
}

impl CliTransport {
    pub fn new() -> Self {
        Self::from_settings(CliSettings::default())
    }

    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self::from_settings(CliSettings {
            binary: binary.into(),
            ..CliSettings::default()
        })
    }

    pub fn from_settings(settings: CliSettings) -> Self {
        Self {
            settings,
            runner: Arc::new(ProcessRunner),
        }
    }

    /// Replace the process runner
    pub fn with_runner(mut self, runner: Arc<dyn CommandRunner>) -> Self {
        self.runner = runner;
        self
    }

    pub fn settings(&self) -> &CliSettings {
        &self.settings
    }

    /// Arguments for one `openclaw agent` invocation
    pub fn chat_args(&self, message: &str, session_key: Option<&str>) -> Vec<String> {
        let mut args = vec![
            "agent".to_string(),
            "--agent".to_string(),
            self.settings.agent.clone(),
            "--message".to_string(),
            message.to_string(),
            "--json".to_string(),
            "--timeout".to_string(),
            self.settings.request_timeout_secs.to_string(),
        ];
        if let Some(key) = session_key.filter(|key| !key.is_empty()) {
            args.push("--session-id".to_string());
            args.push(key.to_string());
        }
        args
    }

    fn limits(&self) -> RunLimits {
        RunLimits {
            timeout: Duration::from_secs(self.settings.process_timeout_secs),
            max_output_bytes: self.settings.max_output_bytes,
        }
    }

    async fn send_chat(&self, params: &Value) -> TransportResult<Value> {
        let message = params
            .get("message")
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
            .ok_or(TransportError::MissingMessage)?;
        let session_key = params.get("sessionKey").and_then(Value::as_str);

        let args = self.chat_args(message, session_key);
        debug!(
            target: LOG_TARGET,
            "running {} agent (session: {})",
            self.settings.binary,
            session_key.unwrap_or("-")
        );
        let output = self
            .runner
            .run(&self.settings.binary, &args, self.limits())
            .await?;

        parse_cli_output(&output.stdout)
    }
}

impl Default for CliTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CliTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CliTransport")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl GatewayTransport for CliTransport {
    async fn request(
        &self,
        method: &str,
        params: Value,
        _options: RequestOptions,
    ) -> TransportResult<Value> {
        match method {
            methods::CHAT_SEND => self.send_chat(&params).await,
            methods::TOOLS_LIST => Ok(json!({"tools": [], "sessionKey": CLI_SESSION_KEY})),
            other => Err(TransportError::UnsupportedMethod(other.to_string())),
        }
    }
}
