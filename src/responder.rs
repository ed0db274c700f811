use async_trait::async_trait;
use std::time::Duration;
use unicode_segmentation::UnicodeSegmentation;

pub const DEFAULT_ECHO_DELAY: Duration = Duration::from_millis(500);

/// Reverses `text` by user-perceived characters (extended grapheme clusters), so
/// combining marks, flags and joined emoji come out intact. Reversing twice gives
/// back the input unless the reversed text segments differently, e.g. a combining
/// mark with no base in front of it.
pub fn reverse(text: &str) -> String {
    text.graphemes(true).rev().collect()
}

// Stand-in for whatever produces the other side of the conversation. Responding
// cannot fail: implementations that talk to something fallible have to decide
// what text to answer with on their own.
#[async_trait]
pub trait Responder: Send + Sync {
    async fn respond(&self, text: &str) -> String;
}

/// Answers every message with its reversal after a fixed simulated latency.
#[derive(Debug, Clone)]
pub struct EchoResponder {
    delay: Duration,
}

impl EchoResponder {
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_ECHO_DELAY,
        }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for EchoResponder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Responder for EchoResponder {
    async fn respond(&self, text: &str) -> String {
        tokio::time::sleep(self.delay).await;
        reverse(text)
    }
}
