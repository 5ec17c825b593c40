//! Convert in-memory tool descriptors into MCP tool definitions
//!
//! Schema libraries attach their own bookkeeping to the objects they build.
//! Only plain JSON Schema keywords cross the protocol boundary, so each
//! property is copied key by key through [`SCHEMA_KEYWORDS`].

use serde_json::Value;

use crate::tool::{object_schema, JsonObject, ToolDefinition, ToolLike};

/// JSON Schema keywords kept when copying a property schema
pub const SCHEMA_KEYWORDS: &[&str] = &[
    "type",
    "description",
    "title",
    "default",
    "enum",
    "const",
    "format",
    "items",
    "properties",
    "required",
    "additionalProperties",
    "patternProperties",
    "minimum",
    "maximum",
    "exclusiveMinimum",
    "exclusiveMaximum",
    "multipleOf",
    "minLength",
    "maxLength",
    "pattern",
    "minItems",
    "maxItems",
    "uniqueItems",
    "minProperties",
    "maxProperties",
    "anyOf",
    "oneOf",
    "allOf",
    "not",
    "examples",
    "nullable",
    "deprecated",
    "readOnly",
    "writeOnly",
    "contentMediaType",
    "contentEncoding",
    "$ref",
    "$defs",
];

fn copy_property(property: &JsonObject) -> JsonObject {
    property
        .iter()
        .filter(|(key, _)| SCHEMA_KEYWORDS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

fn copy_required(schema: &JsonObject) -> Vec<String> {
    match schema.get("required") {
        Some(Value::Array(names)) => names
            .iter()
            .filter_map(|name| name.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

/// Project a tool's parameter schema into `{type: "object", properties, required}`.
///
/// A schema without `properties` is treated as no schema at all. A
/// `required` that is not a list is treated as empty.
pub fn convert_tool(tool: &dyn ToolLike) -> ToolDefinition {
    let input_schema = match tool.parameters() {
        Some(schema) if schema.contains_key("properties") => {
            let properties = schema
                .get("properties")
                .and_then(Value::as_object)
                .map(|props| {
                    props
                        .iter()
                        .filter_map(|(name, prop)| {
                            prop.as_object()
                                .map(|prop| (name.clone(), Value::Object(copy_property(prop))))
                        })
                        .collect()
                })
                .unwrap_or_default();
            object_schema(properties, copy_required(schema))
        }
        _ => object_schema(JsonObject::new(), Vec::new()),
    };

    ToolDefinition::new(
        tool.name(),
        tool.description().unwrap_or_default(),
        input_schema,
    )
}
