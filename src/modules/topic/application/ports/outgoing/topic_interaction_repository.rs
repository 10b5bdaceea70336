use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::topic::application::domain::entities::InteractionKind;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicInteractionRepositoryError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Favorite and attention pivot rows. Both operations are idempotent.
#[async_trait]
pub trait TopicInteractionRepository: Send + Sync {
    async fn add(
        &self,
        user: UserId,
        topic_id: Uuid,
        kind: InteractionKind,
    ) -> Result<(), TopicInteractionRepositoryError>;

    async fn remove(
        &self,
        user: UserId,
        topic_id: Uuid,
        kind: InteractionKind,
    ) -> Result<(), TopicInteractionRepositoryError>;
}
