//! Participant Repository Implementation
//!
//! PostgreSQL implementation of the `participants` collection.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Participant, ParticipantRepository};
use crate::shared::error::StoreError;

/// PostgreSQL participant repository implementation.
pub struct PgParticipantRepository {
    pool: PgPool,
}

impl PgParticipantRepository {
    /// Creates a new PgParticipantRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for participant queries.
#[derive(Debug, sqlx::FromRow)]
struct ParticipantRow {
    name: String,
    last_seen: DateTime<Utc>,
}

impl ParticipantRow {
    fn into_participant(self) -> Participant {
        Participant {
            name: self.name,
            last_seen: self.last_seen,
        }
    }
}

#[async_trait]
impl ParticipantRepository for PgParticipantRepository {
    async fn insert(&self, participant: &Participant) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO participants (name, last_seen)
            VALUES ($1, $2)
            "#,
        )
        .bind(&participant.name)
        .bind(participant.last_seen)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Participants ordered by registration sequence.
    async fn find_all(&self) -> Result<Vec<Participant>, StoreError> {
        let rows = sqlx::query_as::<_, ParticipantRow>(
            r#"
            SELECT name, last_seen
            FROM participants
            ORDER BY seq ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_participant()).collect())
    }

    async fn update_last_seen(&self, name: &str, last_seen: DateTime<Utc>) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            UPDATE participants
            SET last_seen = $2
            WHERE name = $1
            "#,
        )
        .bind(name)
        .bind(last_seen)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM participants WHERE name = $1")
            .bind(name)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
