use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

#[cfg(feature = "message_format")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "message_format", derive(Serialize, Deserialize))]
pub struct MessageId(Uuid);

impl MessageId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single entry in a conversation. Messages are immutable once built; the only
/// way to get one is through [`Message::from_user`] or [`Message::reply`], each of
/// which assigns a fresh id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "message_format", derive(Serialize, Deserialize))]
pub struct Message {
    id: MessageId,
    text: String,
    is_from_current_user: bool,
    sent_at: DateTime<Utc>,
}

impl Message {
    pub fn from_user(text: impl Into<String>) -> Self {
        Self::new(text.into(), true)
    }

    pub fn reply(text: impl Into<String>) -> Self {
        Self::new(text.into(), false)
    }

    fn new(text: String, is_from_current_user: bool) -> Self {
        Self {
            id: MessageId::new(),
            text,
            is_from_current_user,
            sent_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &MessageId {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_from_current_user(&self) -> bool {
        self.is_from_current_user
    }

    pub fn sent_at(&self) -> &DateTime<Utc> {
        &self.sent_at
    }
}

#[cfg(feature = "message_format")]
impl Message {
    pub fn from_json(json_str: &str) -> Result<Self, String> {
        serde_json::from_str(json_str).map_err(|e| e.to_string())
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| e.to_string())
    }
}
