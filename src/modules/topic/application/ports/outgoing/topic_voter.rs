use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::topic::application::domain::entities::VoteDirection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteOutcome {
    /// Vote the user holds after the transition.
    pub current: Option<VoteDirection>,
    pub vote_count: i32,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicVoterError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Applies a vote request atomically: the vote row and the topic counter
/// change together or not at all.
#[async_trait]
pub trait TopicVoter: Send + Sync {
    async fn vote(
        &self,
        voter: UserId,
        topic_id: Uuid,
        direction: VoteDirection,
    ) -> Result<VoteOutcome, TopicVoterError>;
}
