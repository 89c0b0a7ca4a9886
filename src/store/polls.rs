//! In-memory poll store.
//!
//! Polls keep insertion order; an id index gives constant-time lookup.

use std::collections::HashMap;
use std::sync::Arc;

use super::ids::{IdGenerator, UuidGenerator};
use crate::errors::AppError;
use crate::models::{Poll, PollOption, PollResults, PollVote};

/// Owns every poll and is the only mutator of vote counts.
pub struct PollStore {
    polls: Vec<Poll>,
    index: HashMap<String, usize>,
    ids: Arc<dyn IdGenerator>,
    revision: u64,
}

impl Default for PollStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PollStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PollStore")
            .field("polls", &self.polls.len())
            .field("revision", &self.revision)
            .finish()
    }
}

impl PollStore {
    /// Create an empty store with random UUID identifiers.
    pub fn new() -> Self {
        Self::with_id_generator(Arc::new(UuidGenerator))
    }

    /// Create an empty store that draws identifiers from `ids`.
    pub fn with_id_generator(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            polls: Vec::new(),
            index: HashMap::new(),
            ids,
            revision: 0,
        }
    }

    /// Create a poll with one zero-vote option per label.
    ///
    /// An empty label list yields a poll nobody can vote on.
    pub fn create_poll<S: AsRef<str>>(&mut self, question: &str, option_texts: &[S]) -> Poll {
        let id = self.ids.next_id();
        let options = option_texts
            .iter()
            .map(|text| PollOption {
                id: self.ids.next_id(),
                text: text.as_ref().to_string(),
                votes: 0,
            })
            .collect();

        let poll = Poll {
            id,
            question: question.to_string(),
            options,
            total_votes: 0,
        };

        self.index.insert(poll.id.clone(), self.polls.len());
        self.polls.push(poll.clone());
        self.revision += 1;

        tracing::debug!(
            poll_id = %poll.id,
            options = poll.options.len(),
            "Created poll"
        );

        poll
    }

    /// Record one vote for the option at `option_index`.
    pub fn submit_response(
        &mut self,
        poll_id: &str,
        option_index: usize,
    ) -> Result<&Poll, AppError> {
        let Some(&position) = self.index.get(poll_id) else {
            tracing::warn!(poll_id, "Vote rejected: unknown poll");
            return Err(AppError::NotFound(format!("Poll {} not found", poll_id)));
        };

        let poll = &mut self.polls[position];
        let len = poll.options.len();
        let Some(option) = poll.options.get_mut(option_index) else {
            tracing::warn!(poll_id, option_index, len, "Vote rejected: index out of range");
            return Err(AppError::InvalidIndex {
                poll_id: poll_id.to_string(),
                index: option_index,
                len,
            });
        };

        option.votes += 1;
        poll.total_votes += 1;
        self.revision += 1;

        tracing::debug!(
            poll_id,
            option_index,
            total_votes = poll.total_votes,
            "Recorded vote"
        );

        Ok(&self.polls[position])
    }

    /// Record one vote for the option named by `vote.option_id`.
    pub fn cast_vote(&mut self, vote: &PollVote) -> Result<&Poll, AppError> {
        let poll = self
            .get_poll(&vote.poll_id)
            .ok_or_else(|| AppError::NotFound(format!("Poll {} not found", vote.poll_id)))?;

        let option_index = poll.option_index(&vote.option_id).ok_or_else(|| {
            tracing::warn!(
                poll_id = %vote.poll_id,
                option_id = %vote.option_id,
                "Vote rejected: unknown option"
            );
            AppError::InvalidReference(format!(
                "Option {} does not belong to poll {}",
                vote.option_id, vote.poll_id
            ))
        })?;

        self.submit_response(&vote.poll_id, option_index)
    }

    pub fn get_poll(&self, id: &str) -> Option<&Poll> {
        self.index.get(id).map(|&position| &self.polls[position])
    }

    /// All polls in insertion order.
    pub fn get_all_polls(&self) -> &[Poll] {
        &self.polls
    }

    /// Vote shares and leading option for a poll.
    pub fn results(&self, id: &str) -> Option<PollResults> {
        self.get_poll(id).map(PollResults::from)
    }

    pub fn len(&self) -> usize {
        self.polls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polls.is_empty()
    }

    /// Number of successful mutations so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
