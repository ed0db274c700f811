use crate::Message;

/// Gets told about every message the conversation appends, user messages and
/// replies alike, right after the append.
pub trait MessageObserver: Send + Sync {
    fn on_message_appended(&self, message: &Message);
}

impl<F> MessageObserver for F
where
    F: Fn(&Message) + Send + Sync,
{
    fn on_message_appended(&self, message: &Message) {
        self(message)
    }
}
