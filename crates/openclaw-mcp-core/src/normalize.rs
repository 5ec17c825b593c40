//! Content normalization
//!
//! Gateways answer tool calls with a list of loosely typed content items.
//! Each item is classified into a [`GatewayContent`] variant and then
//! lowered into a [`ContentBlock`]. Items the bridge does not understand are
//! never dropped; they degrade to a text block holding their JSON dump.

use serde_json::Value;

use crate::content::ContentBlock;

/// One content item as received from a gateway
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayContent {
    Text {
        text: Option<String>,
    },
    Image {
        data: Option<String>,
        url: Option<String>,
        mime_type: Option<String>,
    },
    /// Anything else, kept verbatim for the JSON dump
    Other(Value),
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

fn non_empty_field(value: &Value, key: &str) -> Option<String> {
    string_field(value, key).filter(|s| !s.is_empty())
}

impl GatewayContent {
    /// Classify a raw item by its `type` discriminator
    pub fn from_value(value: Value) -> Self {
        match value.get("type").and_then(Value::as_str) {
            Some("text") => Self::Text {
                text: string_field(&value, "text"),
            },
            Some("image") => Self::Image {
                data: non_empty_field(&value, "data"),
                url: non_empty_field(&value, "url"),
                mime_type: string_field(&value, "mimeType"),
            },
            _ => Self::Other(value),
        }
    }

    pub fn into_block(self) -> ContentBlock {
        match self {
            Self::Text { text } => ContentBlock::text(text.unwrap_or_default()),
            Self::Image {
                data: Some(data),
                mime_type,
                ..
            } => ContentBlock::base64_image(data, mime_type),
            Self::Image {
                url: Some(url),
                mime_type,
                ..
            } => ContentBlock::url_image(url, mime_type),
            Self::Image { mime_type, .. } => ContentBlock::text(format!(
                "[image: {}]",
                mime_type.as_deref().unwrap_or("unknown")
            )),
            Self::Other(value) => ContentBlock::text(value.to_string()),
        }
    }
}

/// Normalize a list of gateway content items, preserving order
pub fn normalize_content<I>(items: I) -> Vec<ContentBlock>
where
    I: IntoIterator<Item = Value>,
{
    items
        .into_iter()
        .map(|item| GatewayContent::from_value(item).into_block())
        .collect()
}

/// Normalize the optional `content` list of a `tools.call` response.
///
/// A missing, null or non-list `content` yields an empty list.
pub fn normalize_result(result: Value) -> Vec<ContentBlock> {
    match result {
        Value::Object(mut fields) => match fields.remove("content") {
            Some(Value::Array(items)) => normalize_content(items),
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}
