use async_trait::async_trait;
use uuid::Uuid;

use crate::topic::application::{
    ports::incoming::use_cases::{GetTopicError, GetTopicUseCase},
    ports::outgoing::{TopicQuery, TopicWithAuthor},
};

#[derive(Debug, Clone)]
pub struct GetTopicService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetTopicService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetTopicUseCase for GetTopicService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    async fn execute(&self, topic_id: Uuid) -> Result<TopicWithAuthor, GetTopicError> {
        self.query
            .find_with_author(topic_id)
            .await
            .map_err(|e| GetTopicError::QueryFailed(e.to_string()))?
            .ok_or(GetTopicError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::{sample_topic_with_author, FakeTopicQuery};

    #[tokio::test]
    async fn get_topic_returns_topic_with_author() {
        // Arrange
        let topic = sample_topic_with_author("Lifetimes");
        let topic_id = topic.topic.id;
        let service = GetTopicService::new(FakeTopicQuery::with_author(topic));

        // Act
        let result = service.execute(topic_id).await;

        // Assert
        let found = result.unwrap();
        assert_eq!(found.topic.title, "Lifetimes");
        assert_eq!(found.author.unwrap().username, "alice");
    }

    #[tokio::test]
    async fn get_topic_missing_is_not_found() {
        let service = GetTopicService::new(FakeTopicQuery::default());

        let result = service.execute(Uuid::new_v4()).await;

        assert!(matches!(result, Err(GetTopicError::NotFound)));
    }

    #[tokio::test]
    async fn get_topic_query_failure_is_mapped() {
        let service = GetTopicService::new(FakeTopicQuery::failing());

        let result = service.execute(Uuid::new_v4()).await;

        assert!(matches!(result, Err(GetTopicError::QueryFailed(_))));
    }
}
