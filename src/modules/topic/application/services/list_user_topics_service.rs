use async_trait::async_trait;

use crate::{
    auth::application::{domain::entities::UserId, ports::outgoing::UserQuery},
    topic::application::{
        domain::entities::InteractionKind,
        ports::incoming::use_cases::{
            ListUserInteractionTopicsUseCase, ListUserTopicsError, ListUserTopicsUseCase,
        },
        ports::outgoing::{PageRequest, PageResult, TopicQuery, TopicQueryResult},
    },
};

async fn ensure_user_exists<U>(users: &U, user: UserId) -> Result<(), ListUserTopicsError>
where
    U: UserQuery + Send + Sync,
{
    users
        .find_by_id(user.value())
        .await
        .map_err(|e| ListUserTopicsError::QueryFailed(e.to_string()))?
        .map(|_| ())
        .ok_or(ListUserTopicsError::UserNotFound)
}

//
// ──────────────────────────────────────────────────────────
// Topics written by a user
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct ListUserTopicsService<Q, U>
where
    Q: TopicQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    query: Q,
    users: U,
}

impl<Q, U> ListUserTopicsService<Q, U>
where
    Q: TopicQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    pub fn new(query: Q, users: U) -> Self {
        Self { query, users }
    }
}

#[async_trait]
impl<Q, U> ListUserTopicsUseCase for ListUserTopicsService<Q, U>
where
    Q: TopicQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        user: UserId,
        page: PageRequest,
    ) -> Result<PageResult<TopicQueryResult>, ListUserTopicsError> {
        ensure_user_exists(&self.users, user).await?;

        self.query
            .list_by_owner(user, page)
            .await
            .map_err(|e| ListUserTopicsError::QueryFailed(e.to_string()))
    }
}

//
// ──────────────────────────────────────────────────────────
// Topics a user favorited / follows
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct ListUserInteractionTopicsService<Q, U>
where
    Q: TopicQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    query: Q,
    users: U,
}

impl<Q, U> ListUserInteractionTopicsService<Q, U>
where
    Q: TopicQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    pub fn new(query: Q, users: U) -> Self {
        Self { query, users }
    }
}

#[async_trait]
impl<Q, U> ListUserInteractionTopicsUseCase for ListUserInteractionTopicsService<Q, U>
where
    Q: TopicQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        user: UserId,
        kind: InteractionKind,
        page: PageRequest,
    ) -> Result<PageResult<TopicQueryResult>, ListUserTopicsError> {
        ensure_user_exists(&self.users, user).await?;

        self.query
            .list_by_interaction(user, kind, page)
            .await
            .map_err(|e| ListUserTopicsError::QueryFailed(e.to_string()))
    }
}
