use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::UserId,
    topic::application::domain::entities::{InteractionKind, InteractionToggle},
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicInteractionError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Favorite / unfavorite / attention / unattention.
#[async_trait]
pub trait TopicInteractionUseCase: Send + Sync {
    async fn execute(
        &self,
        user: UserId,
        topic_id: Uuid,
        kind: InteractionKind,
        toggle: InteractionToggle,
    ) -> Result<(), TopicInteractionError>;
}
