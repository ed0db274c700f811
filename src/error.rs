use std::fmt;

/// Why a submission was turned away. Replies have no error type: the echo path
/// always produces text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty, // nothing but whitespace, or nothing at all
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Empty => write!(f, "message is empty"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversationError {
    Rejected(ValidationError),
    Closed, // the owner loop is gone, so nothing would ever be appended
}

impl From<ValidationError> for ConversationError {
    fn from(value: ValidationError) -> Self {
        ConversationError::Rejected(value)
    }
}

impl fmt::Display for ConversationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversationError::Rejected(e) => write!(f, "submission rejected: {e}"),
            ConversationError::Closed => write!(f, "conversation is closed"),
        }
    }
}

impl std::error::Error for ConversationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConversationError::Rejected(e) => Some(e),
            ConversationError::Closed => None,
        }
    }
}
