//! Poll model matching the frontend Poll interface.

use serde::{Deserialize, Serialize};

/// A single voteable choice inside a poll.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PollOption {
    pub id: String,
    pub text: String,
    pub votes: u64,
}

/// A question with a fixed, ordered set of mutually exclusive options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Poll {
    pub id: String,
    pub question: String,
    pub options: Vec<PollOption>,
    /// Always equal to the sum of `votes` across `options`
    pub total_votes: u64,
}

impl Poll {
    /// Position of the option with the given identifier.
    pub fn option_index(&self, option_id: &str) -> Option<usize> {
        self.options.iter().position(|o| o.id == option_id)
    }
}

/// A vote addressed by option identifier rather than position.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollVote {
    pub poll_id: String,
    pub option_id: String,
}

/// Vote tally for one option.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OptionResult {
    pub option_id: String,
    pub text: String,
    pub votes: u64,
    /// Share of the poll's total votes, 0.0 to 100.0
    pub percentage: f64,
}

/// Computed results for a poll.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PollResults {
    pub poll_id: String,
    pub total_votes: u64,
    pub options: Vec<OptionResult>,
    /// Index of the option with the most votes; lowest index wins ties
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leading_option: Option<usize>,
}

impl From<&Poll> for PollResults {
    fn from(poll: &Poll) -> Self {
        let options = poll
            .options
            .iter()
            .map(|option| {
                let percentage = if poll.total_votes > 0 {
                    (option.votes as f64 / poll.total_votes as f64) * 100.0
                } else {
                    0.0
                };
                OptionResult {
                    option_id: option.id.clone(),
                    text: option.text.clone(),
                    votes: option.votes,
                    percentage,
                }
            })
            .collect();

        let leading_option = if poll.total_votes > 0 {
            poll.options
                .iter()
                .enumerate()
                .fold(None, |best: Option<(usize, u64)>, (index, option)| match best {
                    Some((_, votes)) if votes >= option.votes => best,
                    _ => Some((index, option.votes)),
                })
                .map(|(index, _)| index)
        } else {
            None
        };

        Self {
            poll_id: poll.id.clone(),
            total_votes: poll.total_votes,
            options,
            leading_option,
        }
    }
}
