//! Unit tests for the tool-descriptor adapter

use openclaw_mcp::core::{convert_tool, empty_object_schema, FnTool, JsonObject, ToolOutput};
use serde_json::{json, Value};

fn tool_with(parameters: Value) -> FnTool {
    let parameters = match parameters {
        Value::Object(map) => map,
        other => panic!("parameters must be an object, got {}", other),
    };
    FnTool::new("lookup", |_, _| Box::pin(async { Ok(ToolOutput::text("ok")) }))
        .with_description("Look something up")
        .with_parameters(parameters)
}

#[test]
fn test_library_markers_are_stripped() {
    let tool = tool_with(json!({
        "type": "object",
        "[Kind]": "Object",
        "properties": {
            "query": {
                "type": "string",
                "description": "Search terms",
                "[Kind]": "String",
                "x-internal-id": 7
            },
            "limit": {"type": "integer", "minimum": 1, "maximum": 50, "[Optional]": "Optional"}
        },
        "required": ["query"]
    }));

    let def = convert_tool(&tool);
    assert_eq!(def.name, "lookup");
    assert_eq!(def.description, "Look something up");
    assert_eq!(
        Value::Object(def.input_schema),
        json!({
            "type": "object",
            "properties": {
                "query": {"type": "string", "description": "Search terms"},
                "limit": {"type": "integer", "minimum": 1, "maximum": 50}
            },
            "required": ["query"]
        })
    );
}

#[test]
fn test_non_list_required_is_empty() {
    let tool = tool_with(json!({
        "properties": {"a": {"type": "string"}},
        "required": "a"
    }));
    assert_eq!(convert_tool(&tool).input_schema["required"], json!([]));
}

#[test]
fn test_missing_schema_gets_empty_object() {
    let bare = FnTool::new("noop", |_, _| Box::pin(async { Ok(ToolOutput::default()) }));
    let def = convert_tool(&bare);
    assert_eq!(def.description, "");
    assert_eq!(def.input_schema, empty_object_schema());

    let no_properties = tool_with(json!({"type": "object"}));
    assert_eq!(convert_tool(&no_properties).input_schema, empty_object_schema());
}

#[test]
fn test_definition_serializes_camel_case() {
    let def = convert_tool(&tool_with(json!({"properties": {}})));
    let value = serde_json::to_value(&def).unwrap();
    assert!(value.get("inputSchema").is_some());
    assert!(value.get("input_schema").is_none());
    assert_eq!(value["inputSchema"]["properties"], Value::Object(JsonObject::new()));
}
