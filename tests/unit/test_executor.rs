//! Unit tests for the standalone tool executor

use openclaw_mcp::core::{
    call_id, FnTool, ToolError, ToolExecutor, ToolLike, ToolOutput, ToolOutputItem,
};
use openclaw_mcp_test::{args, ResultAssertions};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

fn echo_tool() -> FnTool {
    FnTool::new("echo", |_, args| {
        Box::pin(async move {
            let text = args
                .get("text")
                .and_then(Value::as_str)
                .ok_or_else(|| ToolError::invalid_input("text is required"))?
                .to_string();
            Ok(ToolOutput::text(text))
        })
    })
    .with_description("Echo the input")
}

#[tokio::test]
async fn test_executes_by_name() {
    let executor = ToolExecutor::new(vec![Arc::new(echo_tool())]);

    let result = executor
        .execute_tool("echo", args(json!({"text": "hello"})))
        .await;
    ResultAssertions::new(&result)
        .assert_success()
        .assert_len(1)
        .assert_text("hello");
}

#[tokio::test]
async fn test_tool_failure_becomes_error_result() {
    let executor = ToolExecutor::new(vec![Arc::new(echo_tool())]);

    let result = executor.execute_tool("echo", args(json!({}))).await;
    ResultAssertions::new(&result)
        .assert_error()
        .assert_text_contains("text is required");
}

#[tokio::test]
async fn test_unknown_tool() {
    let executor = ToolExecutor::new(vec![]);
    let result = executor.execute_tool("missing", args(json!({}))).await;
    ResultAssertions::new(&result)
        .assert_error()
        .assert_text("Unknown tool: missing");
}

#[tokio::test]
async fn test_output_items_map_to_text_blocks() {
    let tool = FnTool::new("multi", |_, _| {
        Box::pin(async {
            Ok(ToolOutput::new(vec![
                ToolOutputItem::text("one"),
                ToolOutputItem {
                    kind: "text".to_string(),
                    text: None,
                },
            ]))
        })
    });
    let executor = ToolExecutor::new(vec![Arc::new(tool)]);

    let result = executor.execute_tool("multi", args(json!({}))).await;
    assert_eq!(result.content.len(), 2);
    assert_eq!(result.content[0].as_text(), Some("one"));
    assert_eq!(result.content[1].as_text(), Some(""));
}

#[tokio::test]
async fn test_each_call_gets_a_call_id() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let recorder = seen.clone();
    let tool = FnTool::new("record", move |id, _| {
        recorder.lock().unwrap().push(id);
        Box::pin(async { Ok(ToolOutput::default()) })
    });
    let executor = ToolExecutor::new(vec![Arc::new(tool)]);

    executor.execute_tool("record", args(json!({}))).await;

    let ids = seen.lock().unwrap().clone();
    assert_eq!(ids.len(), 1);
    assert!(ids[0].starts_with("mcp-"));
    assert!(ids[0][4..].chars().all(|c| c.is_ascii_digit()));
    assert!(call_id().starts_with("mcp-"));
}

#[test]
fn test_definitions_follow_descriptors() {
    let tools: Vec<Arc<dyn ToolLike>> = vec![
        Arc::new(echo_tool()),
        Arc::new(FnTool::new("noop", |_, _| {
            Box::pin(async { Ok(ToolOutput::default()) })
        })),
    ];
    let executor = ToolExecutor::new(tools);

    assert_eq!(executor.list_tools().len(), 2);
    let defs = executor.definitions();
    assert_eq!(defs[0].name, "echo");
    assert_eq!(defs[0].description, "Echo the input");
    assert_eq!(defs[1].input_schema["type"], "object");
}
