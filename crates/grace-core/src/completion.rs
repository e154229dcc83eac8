//! Completion request and response model.
//!
//! The request serializes directly into the Messages API body. The response
//! content arrives in one of a few shapes, modelled by [`ResponseContent`].

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::chat::Message;

/// A single completion call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionRequest {
    /// Model identifier.
    pub model: String,

    /// Output token cap.
    pub max_tokens: u32,

    /// System prompt prepended by the provider.
    pub system: String,

    /// Conversation, oldest first, ending with the current user message.
    pub messages: Vec<Message>,
}

impl CompletionRequest {
    pub fn new(
        model: impl Into<String>,
        max_tokens: u32,
        system: impl Into<String>,
        messages: Vec<Message>,
    ) -> Self {
        Self {
            model: model.into(),
            max_tokens,
            system: system.into(),
            messages,
        }
    }
}

/// Token usage statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub input_tokens: u32,
    #[serde(default)]
    pub output_tokens: u32,
}

/// Response to a completion call.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub model: Option<String>,

    #[serde(default)]
    pub content: ResponseContent,

    #[serde(default)]
    pub stop_reason: Option<String>,

    #[serde(default)]
    pub usage: Option<Usage>,
}

impl CompletionResponse {
    /// Response carrying only the given content.
    pub fn from_content(content: ResponseContent) -> Self {
        Self {
            id: None,
            model: None,
            content,
            stop_reason: None,
            usage: None,
        }
    }

    /// Plain text of the reply. See [`ResponseContent::extract_text`].
    pub fn text(&self) -> String {
        self.content.extract_text()
    }
}

/// One content block, e.g. `{"type": "text", "text": "..."}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    #[serde(
        rename = "type",
        default,
        deserialize_with = "string_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub block_type: Option<String>,

    #[serde(
        default,
        deserialize_with = "string_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub text: Option<String>,

    /// Remaining fields, kept so the block can be shown as it arrived.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Non-string values read as absent.
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        _ => None,
    })
}

impl ContentBlock {
    /// A `text` block.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            block_type: Some("text".to_string()),
            text: Some(text.into()),
            extra: Map::new(),
        }
    }
}

/// The shapes a response's content can take.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseContent {
    /// Bare string.
    Text(String),
    /// Ordered list of content blocks.
    Blocks(Vec<ContentBlock>),
    /// A single content block.
    Block(ContentBlock),
    /// Anything else.
    Other(Value),
}

impl Default for ResponseContent {
    fn default() -> Self {
        ResponseContent::Other(Value::Null)
    }
}

impl ResponseContent {
    /// Classify a raw JSON value.
    ///
    /// An array is a block list when its first element is an object; later
    /// elements that are not blocks are dropped.
    pub fn from_value(value: Value) -> Self {
        match &value {
            Value::String(text) => ResponseContent::Text(text.clone()),
            Value::Array(items) => match items.first().map(ContentBlock::deserialize) {
                Some(Ok(_)) => ResponseContent::Blocks(
                    items
                        .iter()
                        .filter_map(|item| ContentBlock::deserialize(item).ok())
                        .collect(),
                ),
                _ => ResponseContent::Other(value),
            },
            Value::Object(_) => match ContentBlock::deserialize(&value) {
                Ok(block) => ResponseContent::Block(block),
                Err(_) => ResponseContent::Other(value),
            },
            _ => ResponseContent::Other(value),
        }
    }

    /// Name of the shape, for diagnostics.
    pub fn shape(&self) -> &'static str {
        match self {
            ResponseContent::Text(_) => "text",
            ResponseContent::Blocks(_) => "block list",
            ResponseContent::Block(_) => "content block",
            ResponseContent::Other(Value::Null) => "null",
            ResponseContent::Other(Value::Bool(_)) => "boolean",
            ResponseContent::Other(Value::Number(_)) => "number",
            ResponseContent::Other(Value::String(_)) => "string",
            ResponseContent::Other(Value::Array(_)) => "array",
            ResponseContent::Other(Value::Object(_)) => "object",
        }
    }

    /// Plain text of the content.
    ///
    /// Strings are returned as-is, a non-empty block list yields its first
    /// block's text and a single block its own text. Every other shape falls
    /// back to its JSON form, with a warning.
    pub fn extract_text(&self) -> String {
        match self {
            ResponseContent::Text(text) => text.clone(),
            ResponseContent::Blocks(blocks) if !blocks.is_empty() => match &blocks[0].text {
                Some(text) => text.clone(),
                None => {
                    let block_type = blocks[0].block_type.as_deref().unwrap_or("unknown");
                    warn!(block_type, "First content block carries no text");
                    format!("Unable to extract text from content block of type {block_type}")
                }
            },
            ResponseContent::Block(ContentBlock {
                text: Some(text), ..
            }) => text.clone(),
            other => other.display_fallback(),
        }
    }

    fn display_fallback(&self) -> String {
        warn!(
            shape = self.shape(),
            "Unrecognized response content, returning its JSON form"
        );
        serde_json::to_string(self)
            .unwrap_or_else(|_| format!("Unable to extract text from {}", self.shape()))
    }
}

impl<'de> Deserialize<'de> for ResponseContent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_text_content() {
        let content = ResponseContent::from_value(json!("Peace be with you."));
        assert_eq!(content, ResponseContent::Text("Peace be with you.".to_string()));
        assert_eq!(content.extract_text(), "Peace be with you.");
    }

    #[test]
    fn test_block_list_returns_first_text() {
        let content = ResponseContent::from_value(json!([
            {"text": "Be still."},
            {"type": "text", "text": "And know."}
        ]));
        assert!(matches!(content, ResponseContent::Blocks(ref blocks) if blocks.len() == 2));
        assert_eq!(content.extract_text(), "Be still.");
    }

    #[test]
    fn test_block_list_ignores_malformed_trailing_items() {
        let content = ResponseContent::from_value(json!([{"text": "Be still."}, "trailing", 7]));
        assert!(matches!(content, ResponseContent::Blocks(ref blocks) if blocks.len() == 1));
        assert_eq!(content.extract_text(), "Be still.");
    }

    #[test]
    fn test_non_string_block_fields_read_as_absent() {
        let content = ResponseContent::from_value(json!([{"type": 1, "text": "Be still."}]));
        assert_eq!(content.extract_text(), "Be still.");

        let content = ResponseContent::from_value(json!([{"type": "text", "text": 5}]));
        assert_eq!(
            content.extract_text(),
            "Unable to extract text from content block of type text"
        );
    }

    #[test]
    fn test_single_block() {
        let content = ResponseContent::from_value(json!({"type": "text", "text": "Grace and peace."}));
        assert_eq!(content.extract_text(), "Grace and peace.");
    }

    #[test]
    fn test_first_block_without_text() {
        let content = ResponseContent::from_value(json!([
            {"type": "tool_use", "id": "toolu_1", "name": "lookup", "input": {}}
        ]));
        assert_eq!(
            content.extract_text(),
            "Unable to extract text from content block of type tool_use"
        );
    }

    #[test]
    fn test_empty_list_falls_back_to_json() {
        let content = ResponseContent::from_value(json!([]));
        assert_eq!(content.extract_text(), "[]");
    }

    #[test]
    fn test_block_without_text_falls_back_to_json() {
        let content = ResponseContent::from_value(json!({"type": "image"}));
        assert_eq!(content.extract_text(), r#"{"type":"image"}"#);
    }

    #[test]
    fn test_other_shapes_fall_back_to_json() {
        let number = ResponseContent::from_value(json!(42));
        assert_eq!(number.shape(), "number");
        assert_eq!(number.extract_text(), "42");

        let strings = ResponseContent::from_value(json!(["a", "b"]));
        assert_eq!(strings.shape(), "array");
        assert_eq!(strings.extract_text(), r#"["a","b"]"#);
    }

    #[test]
    fn test_messages_api_response_parsing() {
        let json = r#"{
            "id": "msg_01",
            "type": "message",
            "role": "assistant",
            "model": "claude-3-5-sonnet-20240620",
            "content": [{"type": "text", "text": "The Lord is my shepherd."}],
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 12, "output_tokens": 7}
        }"#;
        let response: CompletionResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.id.as_deref(), Some("msg_01"));
        assert_eq!(response.stop_reason.as_deref(), Some("end_turn"));
        assert_eq!(response.usage.as_ref().map(|u| u.output_tokens), Some(7));
        assert_eq!(response.text(), "The Lord is my shepherd.");
    }

    #[test]
    fn test_missing_content_is_null_fallback() {
        let response: CompletionResponse = serde_json::from_str(r#"{"id": "msg_02"}"#).unwrap();
        assert_eq!(response.content, ResponseContent::Other(Value::Null));
        assert_eq!(response.text(), "null");
    }

    #[test]
    fn test_request_serializes_to_messages_body() {
        let request = CompletionRequest::new(
            "claude-3-5-sonnet-20240620",
            400,
            "You are Grace.",
            vec![Message::user("Hello")],
        );
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            json!({
                "model": "claude-3-5-sonnet-20240620",
                "max_tokens": 400,
                "system": "You are Grace.",
                "messages": [{"role": "user", "content": "Hello"}]
            })
        );
    }
}
