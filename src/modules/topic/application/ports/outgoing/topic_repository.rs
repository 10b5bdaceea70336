use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

use super::TopicQueryResult;

// Input DTO for creating a topic; already validated.
#[derive(Debug, Clone)]
pub struct CreateTopicData {
    pub owner: UserId,
    pub node_id: Uuid,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Topic not found")]
    TopicNotFound,
}

#[async_trait]
pub trait TopicRepository: Send + Sync {
    async fn create_topic(
        &self,
        data: CreateTopicData,
    ) -> Result<TopicQueryResult, TopicRepositoryError>;

    /// Marks a live topic deleted; `TopicNotFound` if no live row matched.
    async fn soft_delete_topic(&self, topic_id: Uuid) -> Result<(), TopicRepositoryError>;
}
