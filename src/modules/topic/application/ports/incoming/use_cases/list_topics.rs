use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::UserId,
    topic::application::domain::entities::InteractionKind,
    topic::application::ports::outgoing::{PageRequest, PageResult, TopicFilter, TopicQueryResult},
};

//
// ──────────────────────────────────────────────────────────
// Public listing (optionally node-scoped)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListTopicsError {
    #[error("Failed to fetch topics: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListTopicsUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: TopicFilter,
        page: PageRequest,
    ) -> Result<PageResult<TopicQueryResult>, ListTopicsError>;
}

#[async_trait]
pub trait ListNodeTopicsUseCase: Send + Sync {
    async fn execute(
        &self,
        node_id: Uuid,
        page: PageRequest,
    ) -> Result<PageResult<TopicQueryResult>, ListTopicsError>;
}

//
// ──────────────────────────────────────────────────────────
// Per-user listings
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListUserTopicsError {
    #[error("User not found")]
    UserNotFound,

    #[error("Failed to fetch topics: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListUserTopicsUseCase: Send + Sync {
    async fn execute(
        &self,
        user: UserId,
        page: PageRequest,
    ) -> Result<PageResult<TopicQueryResult>, ListUserTopicsError>;
}

#[async_trait]
pub trait ListUserInteractionTopicsUseCase: Send + Sync {
    async fn execute(
        &self,
        user: UserId,
        kind: InteractionKind,
        page: PageRequest,
    ) -> Result<PageResult<TopicQueryResult>, ListUserTopicsError>;
}
