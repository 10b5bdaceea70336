use async_trait::async_trait;
use uuid::Uuid;

use crate::topic::application::{
    ports::incoming::use_cases::{ListNodeTopicsUseCase, ListTopicsError, ListTopicsUseCase},
    ports::outgoing::{PageRequest, PageResult, TopicFilter, TopicQuery, TopicQueryResult},
};

#[derive(Debug, Clone)]
pub struct ListTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListTopicsUseCase for ListTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: TopicFilter,
        page: PageRequest,
    ) -> Result<PageResult<TopicQueryResult>, ListTopicsError> {
        self.query
            .list(filter, None, page)
            .await
            .map_err(|e| ListTopicsError::QueryFailed(e.to_string()))
    }
}

/// Node pages always use the default ordering.
#[derive(Debug, Clone)]
pub struct ListNodeTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListNodeTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListNodeTopicsUseCase for ListNodeTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    async fn execute(
        &self,
        node_id: Uuid,
        page: PageRequest,
    ) -> Result<PageResult<TopicQueryResult>, ListTopicsError> {
        self.query
            .list(TopicFilter::Default, Some(node_id), page)
            .await
            .map_err(|e| ListTopicsError::QueryFailed(e.to_string()))
    }
}
