use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChatId(i64);

impl ChatId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Placeholder chat message that progress and completion updates are edited into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageTarget {
    pub chat_id: ChatId,
    pub message_id: i64,
}

impl MessageTarget {
    pub fn new(chat_id: ChatId, message_id: i64) -> Self {
        Self {
            chat_id,
            message_id,
        }
    }
}
