use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::topic::application::domain::entities::InteractionKind;

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

/// Read-only DTO for topic queries
/// Contains all persisted fields except `is_deleted`
#[derive(Debug, Clone, PartialEq)]
pub struct TopicQueryResult {
    pub id: Uuid,
    pub owner: UserId,
    pub node_id: Uuid,
    pub title: String,
    pub body: String,
    pub vote_count: i32,
    pub reply_count: i32,
    pub is_excellent: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopicAuthor {
    pub id: Uuid,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopicWithAuthor {
    pub topic: TopicQueryResult,
    /// `None` when the owning account has been removed.
    pub author: Option<TopicAuthor>,
}

//
// ──────────────────────────────────────────────────────────
// Filters & Pagination
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TopicFilter {
    /// Most recently updated first.
    #[default]
    Default,
    /// Newest first.
    Recent,
    /// Highest vote count first.
    Vote,
    /// Editor's picks only.
    Excellent,
    /// Topics nobody has replied to yet.
    NoReply,
}

impl TopicFilter {
    /// Maps the public `filters` query value, including its aliases.
    /// Unknown names fall back to `Default`.
    pub fn from_api_name(name: Option<&str>) -> Self {
        match name.map(str::trim) {
            Some("recent") | Some("newest") => TopicFilter::Recent,
            Some("vote") | Some("hottest") => TopicFilter::Vote,
            Some("excellent") => TopicFilter::Excellent,
            Some("noreply") | Some("nobody") => TopicFilter::NoReply,
            _ => TopicFilter::Default,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl PageRequest {
    pub const DEFAULT_PER_PAGE: u32 = 15;
    pub const MAX_PER_PAGE: u32 = 100;

    /// Normalizes raw query values: page starts at 1, per_page is clamped.
    pub fn new(page: Option<u32>, per_page: Option<u32>) -> Self {
        let page = page.unwrap_or(1).max(1);
        let per_page = per_page
            .unwrap_or(Self::DEFAULT_PER_PAGE)
            .clamp(1, Self::MAX_PER_PAGE);

        Self { page, per_page }
    }

    pub fn offset(&self) -> u64 {
        (self.page.saturating_sub(1) as u64) * self.per_page as u64
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
}

impl<T> PageResult<T> {
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> PageResult<U> {
        PageResult {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total: self.total,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read side, live topics only)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait TopicQuery: Send + Sync {
    /// Filtered listing, optionally scoped to one node.
    async fn list(
        &self,
        filter: TopicFilter,
        node_id: Option<Uuid>,
        page: PageRequest,
    ) -> Result<PageResult<TopicQueryResult>, TopicQueryError>;

    /// One user's topics, newest first.
    async fn list_by_owner(
        &self,
        owner: UserId,
        page: PageRequest,
    ) -> Result<PageResult<TopicQueryResult>, TopicQueryError>;

    /// Topics a user favorited or follows, most recent interaction first.
    async fn list_by_interaction(
        &self,
        user: UserId,
        kind: InteractionKind,
        page: PageRequest,
    ) -> Result<PageResult<TopicQueryResult>, TopicQueryError>;

    async fn find_by_id(&self, topic_id: Uuid)
        -> Result<Option<TopicQueryResult>, TopicQueryError>;

    async fn find_with_author(
        &self,
        topic_id: Uuid,
    ) -> Result<Option<TopicWithAuthor>, TopicQueryError>;
}
