use crate::domain::common::{AggregateId, AggregateRoot};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Time-derived message id (milliseconds since the Unix epoch)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct MessageId(pub i64);

impl MessageId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Next id at `now`, strictly greater than `previous`
    pub fn next_after(previous: Option<MessageId>, now: DateTime<Utc>) -> Self {
        let millis = now.timestamp_millis();
        match previous {
            Some(MessageId(prev)) if prev >= millis => MessageId(prev + 1),
            _ => MessageId(millis),
        }
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for MessageId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i64>()
            .map(MessageId::new)
            .map_err(|e| format!("Invalid message id: {}", e))
    }
}

impl From<MessageId> for String {
    fn from(id: MessageId) -> Self {
        id.as_string()
    }
}

impl TryFrom<String> for MessageId {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        MessageId::from_string(&s)
    }
}

/// Author of a chat message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "user" => Ok(ChatRole::User),
            "assistant" => Ok(ChatRole::Assistant),
            _ => Err(format!("Unknown chat role: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// Single chat message. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(id: MessageId, role: ChatRole, content: String, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            role,
            content,
            timestamp,
        }
    }

    /// User message
    pub fn user(id: MessageId, content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self::new(id, ChatRole::User, content.into(), timestamp)
    }

    /// Assistant message
    pub fn assistant(id: MessageId, content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self::new(id, ChatRole::Assistant, content.into(), timestamp)
    }

    pub fn is_user(&self) -> bool {
        self.role == ChatRole::User
    }
}

impl AggregateRoot for ChatMessage {
    type Id = MessageId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn element_name() -> &'static str {
        "Message"
    }

    fn list_name() -> &'static str {
        "Messages"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_next_id_is_strictly_increasing() {
        let now = Utc.timestamp_millis_opt(1_000).unwrap();
        let first = MessageId::next_after(None, now);
        assert_eq!(first.value(), 1_000);

        // same millisecond
        let second = MessageId::next_after(Some(first), now);
        assert_eq!(second.value(), 1_001);

        // clock went backwards
        let earlier = Utc.timestamp_millis_opt(500).unwrap();
        assert_eq!(MessageId::next_after(Some(second), earlier).value(), 1_002);

        let later = Utc.timestamp_millis_opt(5_000).unwrap();
        assert_eq!(MessageId::next_after(Some(second), later).value(), 5_000);
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&ChatRole::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
        assert_eq!(ChatRole::from_str("user"), Ok(ChatRole::User));
        assert!(ChatRole::from_str("system").is_err());
        for role in [ChatRole::User, ChatRole::Assistant] {
            assert_eq!(ChatRole::from_str(role.as_str()), Ok(role));
        }
    }

    #[test]
    fn test_id_serializes_as_string() {
        let now = Utc.timestamp_millis_opt(42).unwrap();
        let msg = ChatMessage::user(MessageId::new(42), "hi", now);
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["id"], "42");
        assert_eq!(json["role"], "user");
        assert!(msg.is_user());
    }
}
