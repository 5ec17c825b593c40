//! Uniform tool-call output: content blocks and call results

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Text returned when a backend answers without any text content
pub const NO_RESPONSE: &str = "(no response)";

/// One block of tool output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Text {
        text: String,
    },
    Image {
        source: ImageSource,
        /// Declared media type for URL-sourced images
        #[serde(rename = "mediaType", default, skip_serializing_if = "Option::is_none")]
        media_type: Option<String>,
    },
}

/// Where an image block's bytes come from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ImageSource {
    Base64 {
        data: String,
        #[serde(rename = "mediaType", default, skip_serializing_if = "Option::is_none")]
        media_type: Option<String>,
    },
    Url {
        url: String,
    },
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn base64_image(data: impl Into<String>, media_type: Option<String>) -> Self {
        Self::Image {
            source: ImageSource::Base64 {
                data: data.into(),
                media_type,
            },
            media_type: None,
        }
    }

    pub fn url_image(url: impl Into<String>, media_type: Option<String>) -> Self {
        Self::Image {
            source: ImageSource::Url { url: url.into() },
            media_type,
        }
    }

    /// The text of a text block
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text),
            Self::Image { .. } => None,
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Result of a tool call. Always carries a content list, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallResult {
    pub content: Vec<ContentBlock>,
    #[serde(rename = "isError", default, skip_serializing_if = "is_false")]
    pub is_error: bool,
}

impl CallResult {
    pub fn success(content: Vec<ContentBlock>) -> Self {
        Self {
            content,
            is_error: false,
        }
    }

    /// Successful single text block
    pub fn text(text: impl Into<String>) -> Self {
        Self::success(vec![ContentBlock::text(text)])
    }

    /// Error-flagged single text block
    pub fn error_text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentBlock::text(text)],
            is_error: true,
        }
    }

    /// `Error: <err>` as an error-flagged result
    pub fn failure(err: &dyn Display) -> Self {
        Self::error_text(format!("Error: {}", err))
    }

    pub fn unknown_tool(name: &str) -> Self {
        Self::error_text(format!("Unknown tool: {}", name))
    }

    /// Text of the first text block, if any
    pub fn first_text(&self) -> Option<&str> {
        self.content.iter().find_map(ContentBlock::as_text)
    }
}
