use crate::{reverse, Message, MessageObserver, Responder};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

pub(crate) struct RecordingObserver {
    seen: Mutex<Vec<Message>>,
}

impl RecordingObserver {
    pub(crate) fn new() -> Self {
        Self {
            seen: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn seen(&self) -> Vec<Message> {
        self.seen.lock().unwrap().clone()
    }

    pub(crate) fn texts(&self) -> Vec<String> {
        self.seen
            .lock()
            .unwrap()
            .iter()
            .map(|m| m.text().to_string())
            .collect()
    }
}

impl MessageObserver for RecordingObserver {
    fn on_message_appended(&self, message: &Message) {
        self.seen.lock().unwrap().push(message.clone());
    }
}

// Reverses like the echo responder, but each input can be given its own latency so
// tests can force replies to complete in a chosen order.
pub(crate) struct ScriptedResponder {
    delays: HashMap<String, Duration>,
    default_delay: Duration,
}

impl ScriptedResponder {
    pub(crate) fn new(default_delay: Duration) -> Self {
        Self {
            delays: HashMap::new(),
            default_delay,
        }
    }

    pub(crate) fn delay_for(mut self, text: impl Into<String>, delay: Duration) -> Self {
        self.delays.insert(text.into(), delay);
        self
    }
}

#[async_trait]
impl Responder for ScriptedResponder {
    async fn respond(&self, text: &str) -> String {
        let delay = self.delays.get(text).copied().unwrap_or(self.default_delay);
        tokio::time::sleep(delay).await;
        reverse(text)
    }
}
