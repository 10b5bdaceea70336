use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::UserId,
    topic::application::{
        domain::entities::VoteDirection,
        ports::incoming::use_cases::{VoteTopicError, VoteTopicUseCase},
        ports::outgoing::{TopicVoter, TopicVoterError, VoteOutcome},
    },
};

#[derive(Debug, Clone)]
pub struct VoteTopicService<V>
where
    V: TopicVoter + Send + Sync,
{
    voter: V,
}

impl<V> VoteTopicService<V>
where
    V: TopicVoter + Send + Sync,
{
    pub fn new(voter: V) -> Self {
        Self { voter }
    }
}

#[async_trait]
impl<V> VoteTopicUseCase for VoteTopicService<V>
where
    V: TopicVoter + Send + Sync,
{
    async fn execute(
        &self,
        voter: UserId,
        topic_id: Uuid,
        direction: VoteDirection,
    ) -> Result<VoteOutcome, VoteTopicError> {
        let outcome = self
            .voter
            .vote(voter, topic_id, direction)
            .await
            .map_err(|e| match e {
                TopicVoterError::TopicNotFound => VoteTopicError::TopicNotFound,
                TopicVoterError::DatabaseError(msg) => VoteTopicError::VoteFailed(msg),
            })?;

        tracing::debug!(
            "User {} voted {} on topic {}: now {:?}, count {}",
            voter,
            direction.as_str(),
            topic_id,
            outcome.current,
            outcome.vote_count
        );

        Ok(outcome)
    }
}
