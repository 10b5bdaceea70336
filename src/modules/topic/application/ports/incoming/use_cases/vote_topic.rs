use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::UserId,
    topic::application::{domain::entities::VoteDirection, ports::outgoing::VoteOutcome},
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum VoteTopicError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Vote failed: {0}")]
    VoteFailed(String),
}

#[async_trait]
pub trait VoteTopicUseCase: Send + Sync {
    async fn execute(
        &self,
        voter: UserId,
        topic_id: Uuid,
        direction: VoteDirection,
    ) -> Result<VoteOutcome, VoteTopicError>;
}
