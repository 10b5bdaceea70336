use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{UserQuery, UserQueryError, UserQueryResult};
use crate::topic::application::domain::entities::InteractionKind;
use crate::topic::application::ports::outgoing::{
    PageRequest, PageResult, TopicAuthor, TopicFilter, TopicQuery, TopicQueryError,
    TopicQueryResult, TopicWithAuthor,
};

// ============================================================
// Sample data
// ============================================================

pub fn sample_topic(owner: UserId, title: &str) -> TopicQueryResult {
    let now = Utc::now();
    TopicQueryResult {
        id: Uuid::new_v4(),
        owner,
        node_id: Uuid::new_v4(),
        title: title.to_string(),
        body: format!("Body of {}", title),
        vote_count: 0,
        reply_count: 0,
        is_excellent: false,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_topic_with_author(title: &str) -> TopicWithAuthor {
    let author_id = Uuid::new_v4();
    TopicWithAuthor {
        topic: sample_topic(UserId::from(author_id), title),
        author: Some(TopicAuthor {
            id: author_id,
            username: "alice".to_string(),
        }),
    }
}

pub fn sample_user(id: Uuid, is_verified: bool, is_moderator: bool) -> UserQueryResult {
    let now = Utc::now();
    UserQueryResult {
        id,
        username: "alice".to_string(),
        email: "alice@example.com".to_string(),
        is_verified,
        is_moderator,
        is_deleted: false,
        created_at: now,
        updated_at: now,
    }
}

pub fn page_of<T>(items: Vec<T>, page: PageRequest) -> PageResult<T> {
    PageResult {
        total: items.len() as u64,
        items,
        page: page.page,
        per_page: page.per_page,
    }
}

// ============================================================
// FakeUserQuery
// ============================================================

#[derive(Clone, Default)]
pub struct FakeUserQuery {
    user: Option<UserQueryResult>,
    fail: bool,
}

impl FakeUserQuery {
    pub fn found(user: UserQueryResult) -> Self {
        Self {
            user: Some(user),
            fail: false,
        }
    }

    pub fn missing() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            user: None,
            fail: true,
        }
    }
}

#[async_trait]
impl UserQuery for FakeUserQuery {
    async fn find_by_id(&self, _user_id: Uuid) -> Result<Option<UserQueryResult>, UserQueryError> {
        if self.fail {
            return Err(UserQueryError::DatabaseError("connection lost".to_string()));
        }
        Ok(self.user.clone())
    }
}

// ============================================================
// FakeTopicQuery
// ============================================================

/// Serves a fixed set of topics for every listing and looks topics up by id.
#[derive(Clone, Default)]
pub struct FakeTopicQuery {
    topics: Vec<TopicQueryResult>,
    with_author: Option<TopicWithAuthor>,
    fail: bool,
    last_kind: Arc<Mutex<Option<InteractionKind>>>,
}

impl FakeTopicQuery {
    pub fn with_topics(topics: Vec<TopicQueryResult>) -> Self {
        Self {
            topics,
            ..Default::default()
        }
    }

    pub fn with_author(topic: TopicWithAuthor) -> Self {
        Self {
            topics: vec![topic.topic.clone()],
            with_author: Some(topic),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn last_interaction_kind(&self) -> Option<InteractionKind> {
        *self.last_kind.lock().unwrap()
    }

    fn check(&self) -> Result<(), TopicQueryError> {
        if self.fail {
            return Err(TopicQueryError::DatabaseError("db down".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl TopicQuery for FakeTopicQuery {
    async fn list(
        &self,
        _filter: TopicFilter,
        _node_id: Option<Uuid>,
        page: PageRequest,
    ) -> Result<PageResult<TopicQueryResult>, TopicQueryError> {
        self.check()?;
        Ok(page_of(self.topics.clone(), page))
    }

    async fn list_by_owner(
        &self,
        _owner: UserId,
        page: PageRequest,
    ) -> Result<PageResult<TopicQueryResult>, TopicQueryError> {
        self.check()?;
        Ok(page_of(self.topics.clone(), page))
    }

    async fn list_by_interaction(
        &self,
        _user: UserId,
        kind: InteractionKind,
        page: PageRequest,
    ) -> Result<PageResult<TopicQueryResult>, TopicQueryError> {
        self.check()?;
        *self.last_kind.lock().unwrap() = Some(kind);
        Ok(page_of(self.topics.clone(), page))
    }

    async fn find_by_id(
        &self,
        topic_id: Uuid,
    ) -> Result<Option<TopicQueryResult>, TopicQueryError> {
        self.check()?;
        Ok(self.topics.iter().find(|t| t.id == topic_id).cloned())
    }

    async fn find_with_author(
        &self,
        topic_id: Uuid,
    ) -> Result<Option<TopicWithAuthor>, TopicQueryError> {
        self.check()?;
        Ok(self
            .with_author
            .clone()
            .filter(|t| t.topic.id == topic_id))
    }
}
