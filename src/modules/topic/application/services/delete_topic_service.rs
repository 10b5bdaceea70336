use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::application::{domain::entities::UserId, ports::outgoing::UserQuery},
    topic::application::{
        domain::policy::TopicPolicy,
        ports::incoming::use_cases::{DeleteTopicError, DeleteTopicUseCase},
        ports::outgoing::{TopicQuery, TopicRepository, TopicRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct DeleteTopicService<Q, R, U>
where
    Q: TopicQuery,
    R: TopicRepository,
    U: UserQuery,
{
    query: Q,
    repository: R,
    users: U,
}

impl<Q, R, U> DeleteTopicService<Q, R, U>
where
    Q: TopicQuery,
    R: TopicRepository,
    U: UserQuery,
{
    pub fn new(query: Q, repository: R, users: U) -> Self {
        Self {
            query,
            repository,
            users,
        }
    }
}

#[async_trait]
impl<Q, R, U> DeleteTopicUseCase for DeleteTopicService<Q, R, U>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(&self, actor: UserId, topic_id: Uuid) -> Result<(), DeleteTopicError> {
        // 1. Load the live topic
        let topic = self
            .query
            .find_by_id(topic_id)
            .await
            .map_err(|e| DeleteTopicError::DatabaseError(e.to_string()))?
            .ok_or(DeleteTopicError::TopicNotFound)?;

        // 2. Check the delete policy
        let is_moderator = self
            .users
            .find_by_id(actor.value())
            .await
            .map_err(|e| DeleteTopicError::DatabaseError(e.to_string()))?
            .map(|u| u.is_moderator)
            .unwrap_or(false);

        if !TopicPolicy::can_delete(actor, is_moderator, topic.owner.value()) {
            return Err(DeleteTopicError::Forbidden);
        }

        // 3. Soft delete
        self.repository
            .soft_delete_topic(topic_id)
            .await
            .map_err(|e| match e {
                TopicRepositoryError::TopicNotFound => DeleteTopicError::TopicNotFound,
                TopicRepositoryError::DatabaseError(msg) => DeleteTopicError::DatabaseError(msg),
            })
    }
}
