//! Message Visibility
//!
//! Decides which messages a requesting identity may read.

use crate::domain::entities::{Message, MessageKind};

/// Whether `message` is visible to `identity`.
///
/// Public and status messages are visible to everyone. Private messages are
/// visible only to their sender and their receiver.
pub fn is_visible(message: &Message, identity: &str) -> bool {
    match message.kind {
        MessageKind::Public | MessageKind::Status => true,
        MessageKind::Private => message.from == identity || message.to == identity,
    }
}
