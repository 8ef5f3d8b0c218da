//! Message Log
//!
//! Append-only, insertion-ordered sequence of messages.

use crate::domain::entities::Message;

use super::visibility::is_visible;

#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    messages: Vec<Message>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_messages(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Messages visible to `identity`, in insertion order.
    ///
    /// With a positive `limit`, only the last `limit` visible messages are
    /// returned. `Some(0)` behaves like `None`.
    pub fn visible_to(&self, identity: &str, limit: Option<usize>) -> Vec<Message> {
        let visible: Vec<&Message> = self
            .messages
            .iter()
            .filter(|m| is_visible(m, identity))
            .collect();

        let skip = limit
            .filter(|limit| *limit > 0)
            .map_or(0, |limit| visible.len().saturating_sub(limit));

        visible.into_iter().skip(skip).cloned().collect()
    }
}
