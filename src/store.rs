use crate::{Message, MessageId};
use std::slice::Iter;

/// Append-only log of messages in arrival order. Entries are never removed or
/// edited once appended.
#[derive(Debug, Clone, Default)]
pub struct MessageStore {
    messages: Vec<Message>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    pub fn append(&mut self, message: Message) -> &Message {
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn get(&self, id: &MessageId) -> Option<&Message> {
        self.messages.iter().find(|m| m.id() == id)
    }

    pub fn iter(&self) -> Iter<'_, Message> {
        self.messages.iter()
    }
}

impl<'a> IntoIterator for &'a MessageStore {
    type Item = &'a Message;
    type IntoIter = Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "message_format")]
impl MessageStore {
    /// Exports the whole transcript as a JSON array, oldest first.
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(&self.messages).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_keeps_insertion_order() {
        // given
        let mut store = MessageStore::new();

        // when
        store.append(Message::from_user("first"));
        store.append(Message::reply("second"));
        store.append(Message::from_user("third"));

        // then
        let texts: Vec<&str> = store.iter().map(Message::text).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
        assert_eq!(store.len(), 3);
        assert_eq!(store.last().unwrap().text(), "third");
    }

    #[test]
    fn test_append_returns_stored_message() {
        // given
        let mut store = MessageStore::new();
        let msg = Message::from_user("hi");
        let id = *msg.id();

        // when
        let stored = store.append(msg);

        // then
        assert_eq!(stored.id(), &id);
        assert_eq!(store.get(&id).unwrap().text(), "hi");
    }

    #[test]
    fn test_get_unknown_id() {
        let mut store = MessageStore::new();
        store.append(Message::from_user("hi"));
        let stranger = Message::reply("nope");
        assert!(store.get(stranger.id()).is_none());
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = MessageStore::default();
        assert!(store.is_empty());
        assert!(store.last().is_none());
        assert_eq!((&store).into_iter().count(), 0);
    }

    #[cfg(feature = "message_format")]
    #[test]
    fn test_transcript_export() {
        // given
        let mut store = MessageStore::new();
        store.append(Message::from_user("ab"));
        store.append(Message::reply("ba"));

        // when
        let json = store.to_json().unwrap();
        let parsed: Vec<Message> = serde_json::from_str(&json).unwrap();

        // then
        assert_eq!(parsed.as_slice(), store.messages());
    }
}
