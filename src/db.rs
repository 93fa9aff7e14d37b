// src/db.rs
use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::config::DatabaseConfig;
use crate::errors::StoreError;
use crate::models::{NewPoll, Poll, Vote};
use crate::store::PollStore;

pub async fn create_pool(config: &DatabaseConfig) -> Result<Pool<Postgres>, StoreError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect(&config.url)
        .await?;
    Ok(pool)
}

/// Poll store backed by PostgreSQL
#[derive(Debug, Clone)]
pub struct PgPollStore {
    pool: Pool<Postgres>,
}

impl PgPollStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Connect and bring the schema up to date
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let pool = create_pool(config).await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("database migrations applied");
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl PollStore for PgPollStore {
    async fn insert_poll(&self, poll: NewPoll) -> Result<Poll, StoreError> {
        let poll = sqlx::query_as::<_, Poll>(
            r#"
            INSERT INTO polls (title, choices)
            VALUES ($1, $2)
            RETURNING id, title, choices, created_at
            "#,
        )
        .bind(&poll.title)
        .bind(&poll.choices)
        .fetch_one(&self.pool)
        .await?;

        Ok(poll)
    }

    async fn get_poll(&self, id: Uuid) -> Result<Option<Poll>, StoreError> {
        let poll = sqlx::query_as::<_, Poll>(
            "SELECT id, title, choices, created_at FROM polls WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(poll)
    }

    async fn insert_vote(&self, poll_id: Uuid, choice: &str) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO votes (poll_id, choice) VALUES ($1, $2)")
            .bind(poll_id)
            .bind(choice)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn list_votes(&self, poll_id: Uuid) -> Result<Vec<Vote>, StoreError> {
        let votes = sqlx::query_as::<_, Vote>(
            "SELECT poll_id, choice, created_at FROM votes WHERE poll_id = $1 ORDER BY id",
        )
        .bind(poll_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(votes)
    }
}
