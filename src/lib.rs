mod conversation;
mod error;
mod message;
mod observer;
mod responder;
mod store;

#[cfg(test)]
mod test_utils;

pub use conversation::{Conversation, ConversationHandle};
pub use error::{ConversationError, ValidationError};
pub use message::{Message, MessageId};
pub use observer::MessageObserver;
pub use responder::{reverse, EchoResponder, Responder, DEFAULT_ECHO_DELAY};
pub use store::MessageStore;
