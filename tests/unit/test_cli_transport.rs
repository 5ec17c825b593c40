//! Unit tests for the CLI-backed transport

use async_trait::async_trait;
use openclaw_mcp::bridge::{CliTransport, CommandOutput, CommandRunner, RunLimits};
use openclaw_mcp::core::{
    methods, GatewayTransport, RequestOptions, TransportError, TransportResult,
};
use serde_json::json;
use std::io;
use std::sync::{Arc, Mutex};

enum Script {
    Stdout(&'static str),
    SpawnFails(&'static str),
}

struct ScriptedRunner {
    script: Script,
    args: Mutex<Vec<Vec<String>>>,
}

impl ScriptedRunner {
    fn new(script: Script) -> Arc<Self> {
        Arc::new(Self {
            script,
            args: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run(
        &self,
        program: &str,
        args: &[String],
        _limits: RunLimits,
    ) -> TransportResult<CommandOutput> {
        self.args.lock().unwrap().push(args.to_vec());
        match self.script {
            Script::Stdout(stdout) => Ok(CommandOutput {
                stdout: stdout.to_string(),
                stderr: String::new(),
            }),
            Script::SpawnFails(reason) => Err(TransportError::Spawn {
                program: program.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, reason),
            }),
        }
    }
}

fn transport(runner: &Arc<ScriptedRunner>) -> CliTransport {
    CliTransport::new().with_runner(runner.clone())
}

#[tokio::test]
async fn test_tools_list_is_empty_cli_catalog() {
    let runner = ScriptedRunner::new(Script::Stdout("{}"));
    let result = transport(&runner)
        .request(methods::TOOLS_LIST, json!({}), RequestOptions::default())
        .await
        .unwrap();
    assert_eq!(result, json!({"tools": [], "sessionKey": "cli"}));
    assert!(runner.args.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_invalid_method() {
    let runner = ScriptedRunner::new(Script::Stdout("{}"));
    let err = transport(&runner)
        .request("invalid", json!({}), RequestOptions::default())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Unsupported method"));
}

#[tokio::test]
async fn test_chat_without_message() {
    let runner = ScriptedRunner::new(Script::Stdout("{}"));
    let err = transport(&runner)
        .request(methods::CHAT_SEND, json!({}), RequestOptions::expect_final())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("message is required"));
}

#[tokio::test]
async fn test_chat_reply_and_arguments() {
    let runner = ScriptedRunner::new(Script::Stdout(
        r#"{"result":{"payloads":[{"text":"hello from cli"}]}}"#,
    ));
    let reply = transport(&runner)
        .request(
            methods::CHAT_SEND,
            json!({"message": "hi", "sessionKey": "sess1"}),
            RequestOptions::expect_final(),
        )
        .await
        .unwrap();

    assert_eq!(reply["message"]["content"][0]["text"], "hello from cli");

    let calls = runner.args.lock().unwrap();
    let args = &calls[0];
    assert_eq!(args[0], "agent");
    let window = ["--message", "hi"];
    assert!(args.windows(2).any(|pair| pair == window));
    let window = ["--session-id", "sess1"];
    assert!(args.windows(2).any(|pair| pair == window));
}

#[tokio::test]
async fn test_cli_error_field() {
    let runner = ScriptedRunner::new(Script::Stdout(r#"{"error":"CLI Crashed"}"#));
    let err = transport(&runner)
        .request(methods::CHAT_SEND, json!({"message": "hi"}), RequestOptions::default())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "OpenClaw: CLI Crashed");
}

#[tokio::test]
async fn test_spawn_failure_keeps_cause() {
    let runner = ScriptedRunner::new(Script::SpawnFails("Spawn failed"));
    let err = transport(&runner)
        .request(methods::CHAT_SEND, json!({"message": "hi"}), RequestOptions::default())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Spawn failed"));
}

#[tokio::test]
async fn test_empty_payloads() {
    let runner = ScriptedRunner::new(Script::Stdout(r#"{"result":{"payloads":[]}}"#));
    let reply = transport(&runner)
        .request(methods::CHAT_SEND, json!({"message": "hi"}), RequestOptions::default())
        .await
        .unwrap();
    assert_eq!(reply["message"]["content"][0]["text"], "(no response)");
}
