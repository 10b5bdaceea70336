use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::topic::application::ports::outgoing::{
    PageResult, TopicAuthor, TopicQueryResult, TopicWithAuthor,
};

/// Public shape of a topic.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TopicView {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: Uuid,
    #[schema(example = "How do lifetimes work?")]
    pub title: String,
    pub body: String,
    pub user_id: Uuid,
    pub node_id: Uuid,
    #[schema(example = 3)]
    pub vote_count: i32,
    #[schema(example = 0)]
    pub reply_count: i32,
    pub is_excellent: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TopicQueryResult> for TopicView {
    fn from(topic: TopicQueryResult) -> Self {
        Self {
            id: topic.id,
            title: topic.title,
            body: topic.body,
            user_id: topic.owner.into(),
            node_id: topic.node_id,
            vote_count: topic.vote_count,
            reply_count: topic.reply_count,
            is_excellent: topic.is_excellent,
            created_at: topic.created_at,
            updated_at: topic.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TopicAuthorView {
    pub id: Uuid,
    #[schema(example = "alice")]
    pub username: String,
}

impl From<TopicAuthor> for TopicAuthorView {
    fn from(author: TopicAuthor) -> Self {
        Self {
            id: author.id,
            username: author.username,
        }
    }
}

/// A topic together with its owner; `user` is null once the account is gone.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TopicDetailView {
    #[serde(flatten)]
    pub topic: TopicView,
    pub user: Option<TopicAuthorView>,
}

impl From<TopicWithAuthor> for TopicDetailView {
    fn from(value: TopicWithAuthor) -> Self {
        Self {
            topic: value.topic.into(),
            user: value.author.map(Into::into),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TopicPageView {
    pub items: Vec<TopicView>,
    #[schema(example = 1)]
    pub page: u32,
    #[schema(example = 15)]
    pub per_page: u32,
    #[schema(example = 42)]
    pub total: u64,
}

impl From<PageResult<TopicQueryResult>> for TopicPageView {
    fn from(page: PageResult<TopicQueryResult>) -> Self {
        let page = page.map(TopicView::from);
        Self {
            items: page.items,
            page: page.page,
            per_page: page.per_page,
            total: page.total,
        }
    }
}
