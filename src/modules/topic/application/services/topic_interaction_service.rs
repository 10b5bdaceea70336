use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::UserId,
    topic::application::{
        domain::entities::{InteractionKind, InteractionToggle},
        ports::incoming::use_cases::{TopicInteractionError, TopicInteractionUseCase},
        ports::outgoing::{TopicInteractionRepository, TopicInteractionRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct TopicInteractionService<R>
where
    R: TopicInteractionRepository + Send + Sync,
{
    repository: R,
}

impl<R> TopicInteractionService<R>
where
    R: TopicInteractionRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> TopicInteractionUseCase for TopicInteractionService<R>
where
    R: TopicInteractionRepository + Send + Sync,
{
    async fn execute(
        &self,
        user: UserId,
        topic_id: Uuid,
        kind: InteractionKind,
        toggle: InteractionToggle,
    ) -> Result<(), TopicInteractionError> {
        let result = match toggle {
            InteractionToggle::On => self.repository.add(user, topic_id, kind).await,
            InteractionToggle::Off => self.repository.remove(user, topic_id, kind).await,
        };

        result.map_err(|e| match e {
            TopicInteractionRepositoryError::TopicNotFound => TopicInteractionError::TopicNotFound,
            TopicInteractionRepositoryError::DatabaseError(msg) => {
                TopicInteractionError::RepositoryError(msg)
            }
        })
    }
}
