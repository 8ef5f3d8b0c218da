//! Input Validation
//!
//! Explicit constraint checks for participant names and posted messages.
//! Message checks collect every violated constraint instead of stopping at the first.

use serde::Serialize;

use crate::domain::entities::{MessageKind, BROADCAST_TARGET};

/// A single violated constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: &'static str,
    pub message: String,
}

impl Violation {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Unvalidated message fields as received from a participant.
#[derive(Debug, Clone, Copy)]
pub struct MessageDraft<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub text: &'a str,
    pub kind: &'a str,
}

/// Trim a requested participant name and check that it is usable.
pub fn validate_name(raw: &str) -> Result<String, Violation> {
    let name = raw.trim();

    if name.is_empty() {
        return Err(Violation::new("name", "name must not be empty"));
    }

    if name == BROADCAST_TARGET {
        return Err(Violation::new(
            "name",
            format!("name '{}' is reserved", BROADCAST_TARGET),
        ));
    }

    Ok(name.to_string())
}

/// Check the shape of a posted message and return its kind.
///
/// Existence of sender and receiver is checked separately against the directory.
pub fn validate_message(draft: &MessageDraft<'_>) -> Result<MessageKind, Vec<Violation>> {
    let mut violations = Vec::new();

    if draft.from.is_empty() {
        violations.push(Violation::new("from", "sender must not be empty"));
    }

    if draft.to.is_empty() {
        violations.push(Violation::new("to", "receiver must not be empty"));
    } else if draft.to == draft.from {
        violations.push(Violation::new("to", "receiver must differ from sender"));
    }

    if draft.text.trim().is_empty() {
        violations.push(Violation::new("text", "text must not be empty"));
    }

    let kind = match MessageKind::parse(draft.kind) {
        Some(kind) if !kind.is_system() => Some(kind),
        _ => {
            violations.push(Violation::new(
                "type",
                "type must be 'message' or 'private_message'",
            ));
            None
        }
    };

    match kind {
        Some(kind) if violations.is_empty() => Ok(kind),
        _ => Err(violations),
    }
}
