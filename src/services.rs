// src/services.rs
use std::sync::Arc;

use uuid::Uuid;

use crate::errors::{Error, Result};
use crate::models::{AggregateResult, NewPoll, Poll, PollDetails};
use crate::poll::aggregate;
use crate::store::PollStore;
use crate::validation::{validate_create, validate_vote};

/// Poll lifecycle and vote casting. Holds nothing but the store handle.
#[derive(Clone)]
pub struct PollService {
    store: Arc<dyn PollStore>,
}

impl PollService {
    pub fn new(store: Arc<dyn PollStore>) -> Self {
        Self { store }
    }

    #[tracing::instrument(skip(self, choices), fields(choices = choices.len()))]
    pub async fn create_poll(&self, title: String, choices: Vec<String>) -> Result<Poll> {
        validate_create(&title, &choices)?;

        let poll = self.store.insert_poll(NewPoll { title, choices }).await?;
        tracing::info!(poll_id = %poll.id, "poll created");
        Ok(poll)
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_poll(&self, id: &str) -> Result<PollDetails> {
        let poll = self.find_poll(id).await?;
        let votes = self.store.list_votes(poll.id).await?;
        let aggregate = aggregate(&poll.choices, &votes);

        tracing::debug!(total = aggregate.total, "poll fetched");
        Ok(PollDetails {
            poll,
            votes,
            aggregate,
        })
    }

    /// Append a vote and return the tally recomputed from every stored vote.
    /// Repeat votes are accepted; nothing here identifies the voter.
    #[tracing::instrument(skip(self))]
    pub async fn cast_vote(&self, poll_id: &str, option: &str) -> Result<AggregateResult> {
        let poll = self.find_poll(poll_id).await?;
        validate_vote(&poll.choices, option)?;

        self.store.insert_vote(poll.id, option).await?;

        let votes = self.store.list_votes(poll.id).await?;
        let aggregate = aggregate(&poll.choices, &votes);
        tracing::info!(poll_id = %poll.id, total = aggregate.total, "vote recorded");
        Ok(aggregate)
    }

    async fn find_poll(&self, id: &str) -> Result<Poll> {
        // A malformed id cannot name any poll
        let id = Uuid::parse_str(id.trim()).map_err(|_| Error::NotFound)?;
        self.store.get_poll(id).await?.ok_or(Error::NotFound)
    }
}
