//! Message Repository Implementation
//!
//! PostgreSQL implementation of the append-only `messages` collection.
//! Insertion order is preserved through the `seq` column.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{Message, MessageKind, MessageRepository};
use crate::shared::error::StoreError;

/// PostgreSQL message repository implementation.
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    /// Creates a new PgMessageRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for message queries.
/// Maps to the messages table schema defined in the migration.
#[derive(Debug, sqlx::FromRow)]
struct MessageRow {
    id: Uuid,
    from_name: String,
    to_name: String,
    text: String,
    kind: String,
    time: String,
}

impl MessageRow {
    /// Converts database row to domain Message entity.
    fn into_message(self) -> Result<Message, StoreError> {
        let kind = MessageKind::parse(&self.kind).ok_or_else(|| {
            StoreError::Corrupt(format!("message {} has unknown kind '{}'", self.id, self.kind))
        })?;

        Ok(Message {
            id: self.id,
            from: self.from_name,
            to: self.to_name,
            text: self.text,
            kind,
            time: self.time,
        })
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    async fn insert(&self, message: &Message) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO messages (id, from_name, to_name, text, kind, time)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(message.id)
        .bind(&message.from)
        .bind(&message.to)
        .bind(&message.text)
        .bind(message.kind.as_str())
        .bind(&message.time)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Message>, StoreError> {
        let rows = sqlx::query_as::<_, MessageRow>(
            r#"
            SELECT id, from_name, to_name, text, kind, time
            FROM messages
            ORDER BY seq ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(MessageRow::into_message).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(kind: &str) -> MessageRow {
        MessageRow {
            id: Uuid::now_v7(),
            from_name: "Ana".into(),
            to_name: "Todos".into(),
            text: "entered the room...".into(),
            kind: kind.into(),
            time: "09:15:00".into(),
        }
    }

    #[test]
    fn test_row_conversion() {
        let message = row("status").into_message().unwrap();
        assert_eq!(message.kind, MessageKind::Status);
        assert_eq!(message.from, "Ana");
    }

    #[test]
    fn test_unknown_kind_is_corrupt() {
        assert!(matches!(
            row("shout").into_message(),
            Err(StoreError::Corrupt(_))
        ));
    }
}
