// src/store.rs
use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::StoreError;
use crate::models::{NewPoll, Poll, Vote};

/// What the service needs from persistence. Implementations own id
/// assignment and durability; votes are append-only.
#[async_trait]
pub trait PollStore: Send + Sync {
    /// Persist a poll under a freshly assigned, unique id
    async fn insert_poll(&self, poll: NewPoll) -> Result<Poll, StoreError>;

    async fn get_poll(&self, id: Uuid) -> Result<Option<Poll>, StoreError>;

    async fn insert_vote(&self, poll_id: Uuid, choice: &str) -> Result<(), StoreError>;

    /// All votes for a poll, oldest first
    async fn list_votes(&self, poll_id: Uuid) -> Result<Vec<Vote>, StoreError>;
}

/// Process-local store, used when no database is configured and in tests
#[derive(Debug, Default)]
pub struct InMemoryPollStore {
    polls: RwLock<HashMap<Uuid, Poll>>,
    votes: RwLock<HashMap<Uuid, Vec<Vote>>>,
}

impl InMemoryPollStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PollStore for InMemoryPollStore {
    async fn insert_poll(&self, poll: NewPoll) -> Result<Poll, StoreError> {
        let mut polls = self.polls.write().await;

        let mut id = Uuid::new_v4();
        while polls.contains_key(&id) {
            id = Uuid::new_v4();
        }

        let poll = Poll {
            id,
            title: poll.title,
            choices: poll.choices,
            created_at: Utc::now(),
        };
        polls.insert(id, poll.clone());
        Ok(poll)
    }

    async fn get_poll(&self, id: Uuid) -> Result<Option<Poll>, StoreError> {
        Ok(self.polls.read().await.get(&id).cloned())
    }

    async fn insert_vote(&self, poll_id: Uuid, choice: &str) -> Result<(), StoreError> {
        if !self.polls.read().await.contains_key(&poll_id) {
            return Err(StoreError::unavailable(format!(
                "vote references unknown poll {poll_id}"
            )));
        }

        self.votes
            .write()
            .await
            .entry(poll_id)
            .or_default()
            .push(Vote {
                poll_id,
                choice: choice.to_string(),
                created_at: Utc::now(),
            });
        Ok(())
    }

    async fn list_votes(&self, poll_id: Uuid) -> Result<Vec<Vote>, StoreError> {
        Ok(self
            .votes
            .read()
            .await
            .get(&poll_id)
            .cloned()
            .unwrap_or_default())
    }
}
