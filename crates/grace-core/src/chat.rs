//! Chat message types for conversation history.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Content of the synthetic first turn added by the opening greeting.
pub const OPENING_GREETING: &str = "Hello";

/// Role of a message sent to the completion provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// User message (input/prompt).
    User,
    /// Assistant message (response).
    Assistant,
}

/// A role-tagged message in the provider conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Role of this message.
    pub role: Role,
    /// Message content.
    pub content: String,
}

impl Message {
    /// Create a new message.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// One round of prior conversation. Either side may be missing.
///
/// Deserializes from a `[user, assistant]` pair. Anything that does not look
/// like a pair becomes an empty turn instead of failing the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatTurn {
    pub user: Option<String>,
    pub assistant: Option<String>,
}

impl ChatTurn {
    /// Create a turn from both sides.
    pub fn pair(user: impl Into<String>, assistant: impl Into<String>) -> Self {
        Self {
            user: Some(user.into()),
            assistant: Some(assistant.into()),
        }
    }

    /// Build a turn from a JSON value, coercing each side with [`text_from_value`].
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Array(sides) => Self {
                user: sides.first().and_then(text_from_value),
                assistant: sides.get(1).and_then(text_from_value),
            },
            _ => Self::default(),
        }
    }

    /// User text, if present and non-empty.
    pub fn user_text(&self) -> Option<&str> {
        self.user.as_deref().filter(|text| !text.is_empty())
    }

    /// Assistant text, if present and non-empty.
    pub fn assistant_text(&self) -> Option<&str> {
        self.assistant.as_deref().filter(|text| !text.is_empty())
    }
}

impl<'de> Deserialize<'de> for ChatTurn {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

/// Ordered conversation history, oldest turn first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationHistory(Vec<ChatTurn>);

impl ConversationHistory {
    pub fn new(turns: Vec<ChatTurn>) -> Self {
        Self(turns)
    }

    /// Build a history from a JSON value. Non-arrays yield an empty history.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Array(turns) => Self(turns.iter().map(ChatTurn::from_value).collect()),
            _ => Self::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&ChatTurn> {
        self.0.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChatTurn> {
        self.0.iter()
    }
}

impl From<Vec<ChatTurn>> for ConversationHistory {
    fn from(turns: Vec<ChatTurn>) -> Self {
        Self(turns)
    }
}

impl<'de> Deserialize<'de> for ConversationHistory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

/// Coerce a loosely typed JSON value into message text.
///
/// Returns `None` for values that count as empty: `null`, `""`, `false`,
/// zero, and empty arrays or objects. Strings are kept as-is, other scalars
/// use their display form and containers their JSON encoding.
pub fn text_from_value(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        Value::Number(number) if number.as_f64() == Some(0.0) => None,
        Value::Number(number) => Some(number.to_string()),
        Value::Array(items) if items.is_empty() => None,
        Value::Object(fields) if fields.is_empty() => None,
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

/// Turns a current message plus history into the provider message sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageNormalizer {
    opening_greeting: bool,
}

impl MessageNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a synthetic `"Hello"` user message when the history is empty
    /// or its first turn has no user side.
    pub fn with_opening_greeting(mut self, enabled: bool) -> Self {
        self.opening_greeting = enabled;
        self
    }

    pub fn opening_greeting(&self) -> bool {
        self.opening_greeting
    }

    /// Build the message sequence. The current message is always last.
    pub fn normalize(&self, current_message: &str, history: &ConversationHistory) -> Vec<Message> {
        let mut messages = Vec::with_capacity(history.len() * 2 + 2);

        if self.opening_greeting
            && history
                .first()
                .map_or(true, |turn| turn.user_text().is_none())
        {
            messages.push(Message::user(OPENING_GREETING));
        }

        for turn in history.iter() {
            if let Some(text) = turn.user_text() {
                messages.push(Message::user(text));
            }
            if let Some(text) = turn.assistant_text() {
                messages.push(Message::assistant(text));
            }
        }

        messages.push(Message::user(current_message));
        messages
    }
}

/// Normalize with the default settings (no opening greeting).
pub fn normalize(current_message: &str, history: &ConversationHistory) -> Vec<Message> {
    MessageNormalizer::default().normalize(current_message, history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_interleaves_history_and_appends_current() {
        let history = ConversationHistory::new(vec![ChatTurn::pair("Hi", "Peace to you")]);
        let messages = normalize("Hello", &history);

        assert_eq!(
            messages,
            vec![
                Message::user("Hi"),
                Message::assistant("Peace to you"),
                Message::user("Hello"),
            ]
        );
    }

    #[test]
    fn test_normalize_skips_empty_sides() {
        let history = ConversationHistory::new(vec![
            ChatTurn {
                user: None,
                assistant: Some("Welcome".to_string()),
            },
            ChatTurn {
                user: Some("I feel lost".to_string()),
                assistant: Some(String::new()),
            },
            ChatTurn::default(),
        ]);
        let messages = normalize("Can you help?", &history);

        assert_eq!(
            messages,
            vec![
                Message::assistant("Welcome"),
                Message::user("I feel lost"),
                Message::user("Can you help?"),
            ]
        );
    }

    #[test]
    fn test_normalize_empty_history() {
        let messages = normalize("Hello", &ConversationHistory::default());
        assert_eq!(messages, vec![Message::user("Hello")]);
    }

    #[test]
    fn test_current_message_is_always_last() {
        let histories = [
            json!([]),
            json!([["a", "b"], ["c", null]]),
            json!([[null, "only assistant"]]),
            json!([["x", "y"], "garbage", 42]),
        ];

        for raw in histories {
            let history = ConversationHistory::from_value(&raw);
            let messages = normalize("current", &history);
            assert_eq!(messages.last(), Some(&Message::user("current")));
        }
    }

    #[test]
    fn test_opening_greeting_when_history_empty() {
        let normalizer = MessageNormalizer::new().with_opening_greeting(true);
        assert!(normalizer.opening_greeting());
        assert!(!MessageNormalizer::default().opening_greeting());
        let messages = normalizer.normalize("How are you?", &ConversationHistory::default());

        assert_eq!(
            messages,
            vec![Message::user(OPENING_GREETING), Message::user("How are you?")]
        );
    }

    #[test]
    fn test_opening_greeting_when_first_turn_has_no_user() {
        let normalizer = MessageNormalizer::new().with_opening_greeting(true);
        let history = ConversationHistory::from_value(&json!([[null, "Hi, I'm Grace."]]));
        let messages = normalizer.normalize("Hello Grace", &history);

        assert_eq!(messages[0], Message::user(OPENING_GREETING));
        assert_eq!(messages[1], Message::assistant("Hi, I'm Grace."));
    }

    #[test]
    fn test_opening_greeting_skipped_when_first_turn_has_user() {
        let normalizer = MessageNormalizer::new().with_opening_greeting(true);
        let history = ConversationHistory::new(vec![ChatTurn::pair("Hi", "Peace to you")]);
        let messages = normalizer.normalize("Hello", &history);

        assert_eq!(messages[0], Message::user("Hi"));
        assert_eq!(messages.len(), 3);
    }

    #[test]
    fn test_history_deserialization_is_lenient() {
        let history: ConversationHistory =
            serde_json::from_value(json!([["Hi", null], [null, "Hello"], "oops", [7]])).unwrap();

        assert_eq!(history.len(), 4);
        assert_eq!(history.first().unwrap().user_text(), Some("Hi"));
        assert_eq!(history.iter().nth(2), Some(&ChatTurn::default()));
        assert_eq!(history.iter().nth(3).unwrap().user_text(), Some("7"));

        let missing: ConversationHistory = serde_json::from_value(json!(null)).unwrap();
        assert!(missing.is_empty());
    }

    #[test]
    fn test_text_from_value() {
        assert_eq!(text_from_value(&json!("Hello")), Some("Hello".to_string()));
        assert_eq!(text_from_value(&json!(42)), Some("42".to_string()));
        assert_eq!(text_from_value(&json!(true)), Some("true".to_string()));
        assert_eq!(text_from_value(&json!("")), None);
        assert_eq!(text_from_value(&json!(null)), None);
        assert_eq!(text_from_value(&json!(false)), None);
        assert_eq!(text_from_value(&json!(0)), None);
        assert_eq!(text_from_value(&json!([])), None);
        assert_eq!(text_from_value(&json!({})), None);
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_value(Message::assistant("Be still.")).unwrap();
        assert_eq!(json, json!({"role": "assistant", "content": "Be still."}));
    }
}
