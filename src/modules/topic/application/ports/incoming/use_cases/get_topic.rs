use async_trait::async_trait;
use uuid::Uuid;

use crate::topic::application::ports::outgoing::TopicWithAuthor;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTopicError {
    #[error("Topic not found")]
    NotFound,

    #[error("Failed to fetch topic: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetTopicUseCase: Send + Sync {
    async fn execute(&self, topic_id: Uuid) -> Result<TopicWithAuthor, GetTopicError>;
}
