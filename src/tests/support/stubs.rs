use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::topic::application::domain::entities::{
    InteractionKind, InteractionToggle, VoteDirection,
};
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicCommand, CreateTopicError, CreateTopicUseCase, DeleteTopicError,
    DeleteTopicUseCase, GetTopicError, GetTopicUseCase, ListNodeTopicsUseCase, ListTopicsError,
    ListTopicsUseCase, ListUserInteractionTopicsUseCase, ListUserTopicsError,
    ListUserTopicsUseCase, TopicInteractionError, TopicInteractionUseCase, VoteTopicError,
    VoteTopicUseCase,
};
use crate::topic::application::ports::outgoing::{
    PageRequest, PageResult, TopicFilter, TopicQueryResult, TopicWithAuthor, VoteOutcome,
};

use super::fixtures::page_of;

// ============================================================
// Listings
// ============================================================

#[derive(Clone)]
pub struct StubListTopicsUseCase {
    result: Result<Vec<TopicQueryResult>, ListTopicsError>,
    pub last_call: Arc<Mutex<Option<(TopicFilter, PageRequest)>>>,
}

impl StubListTopicsUseCase {
    pub fn success(items: Vec<TopicQueryResult>) -> Self {
        Self {
            result: Ok(items),
            last_call: Arc::default(),
        }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(ListTopicsError::QueryFailed(msg.to_string())),
            last_call: Arc::default(),
        }
    }
}

#[async_trait]
impl ListTopicsUseCase for StubListTopicsUseCase {
    async fn execute(
        &self,
        filter: TopicFilter,
        page: PageRequest,
    ) -> Result<PageResult<TopicQueryResult>, ListTopicsError> {
        *self.last_call.lock().unwrap() = Some((filter, page));
        self.result.clone().map(|items| page_of(items, page))
    }
}

#[derive(Clone)]
pub struct StubListNodeTopicsUseCase {
    result: Result<Vec<TopicQueryResult>, ListTopicsError>,
    pub last_node: Arc<Mutex<Option<Uuid>>>,
}

impl StubListNodeTopicsUseCase {
    pub fn success(items: Vec<TopicQueryResult>) -> Self {
        Self {
            result: Ok(items),
            last_node: Arc::default(),
        }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(ListTopicsError::QueryFailed(msg.to_string())),
            last_node: Arc::default(),
        }
    }
}

#[async_trait]
impl ListNodeTopicsUseCase for StubListNodeTopicsUseCase {
    async fn execute(
        &self,
        node_id: Uuid,
        page: PageRequest,
    ) -> Result<PageResult<TopicQueryResult>, ListTopicsError> {
        *self.last_node.lock().unwrap() = Some(node_id);
        self.result.clone().map(|items| page_of(items, page))
    }
}

#[derive(Clone)]
pub struct StubListUserTopicsUseCase {
    result: Result<Vec<TopicQueryResult>, ListUserTopicsError>,
}

impl StubListUserTopicsUseCase {
    pub fn success(items: Vec<TopicQueryResult>) -> Self {
        Self { result: Ok(items) }
    }

    pub fn user_not_found() -> Self {
        Self {
            result: Err(ListUserTopicsError::UserNotFound),
        }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(ListUserTopicsError::QueryFailed(msg.to_string())),
        }
    }
}

#[async_trait]
impl ListUserTopicsUseCase for StubListUserTopicsUseCase {
    async fn execute(
        &self,
        _user: UserId,
        page: PageRequest,
    ) -> Result<PageResult<TopicQueryResult>, ListUserTopicsError> {
        self.result.clone().map(|items| page_of(items, page))
    }
}

#[derive(Clone)]
pub struct StubListUserInteractionTopicsUseCase {
    result: Result<Vec<TopicQueryResult>, ListUserTopicsError>,
    pub last_kind: Arc<Mutex<Option<InteractionKind>>>,
}

impl StubListUserInteractionTopicsUseCase {
    pub fn success(items: Vec<TopicQueryResult>) -> Self {
        Self {
            result: Ok(items),
            last_kind: Arc::default(),
        }
    }

    pub fn user_not_found() -> Self {
        Self {
            result: Err(ListUserTopicsError::UserNotFound),
            last_kind: Arc::default(),
        }
    }
}

#[async_trait]
impl ListUserInteractionTopicsUseCase for StubListUserInteractionTopicsUseCase {
    async fn execute(
        &self,
        _user: UserId,
        kind: InteractionKind,
        page: PageRequest,
    ) -> Result<PageResult<TopicQueryResult>, ListUserTopicsError> {
        *self.last_kind.lock().unwrap() = Some(kind);
        self.result.clone().map(|items| page_of(items, page))
    }
}

// ============================================================
// Create / Get / Delete
// ============================================================

#[derive(Clone)]
pub struct StubCreateTopicUseCase {
    result: Result<TopicQueryResult, CreateTopicError>,
    pub last_command: Arc<Mutex<Option<CreateTopicCommand>>>,
}

impl StubCreateTopicUseCase {
    pub fn success(topic: TopicQueryResult) -> Self {
        Self {
            result: Ok(topic),
            last_command: Arc::default(),
        }
    }

    pub fn error(err: CreateTopicError) -> Self {
        Self {
            result: Err(err),
            last_command: Arc::default(),
        }
    }
}

#[async_trait]
impl CreateTopicUseCase for StubCreateTopicUseCase {
    async fn execute(
        &self,
        command: CreateTopicCommand,
    ) -> Result<TopicQueryResult, CreateTopicError> {
        *self.last_command.lock().unwrap() = Some(command);
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetTopicUseCase {
    result: Result<TopicWithAuthor, GetTopicError>,
}

impl StubGetTopicUseCase {
    pub fn found(topic: TopicWithAuthor) -> Self {
        Self { result: Ok(topic) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(GetTopicError::NotFound),
        }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetTopicError::QueryFailed(msg.to_string())),
        }
    }
}

#[async_trait]
impl GetTopicUseCase for StubGetTopicUseCase {
    async fn execute(&self, _topic_id: Uuid) -> Result<TopicWithAuthor, GetTopicError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubDeleteTopicUseCase {
    result: Result<(), DeleteTopicError>,
}

impl StubDeleteTopicUseCase {
    pub fn success() -> Self {
        Self { result: Ok(()) }
    }

    pub fn error(err: DeleteTopicError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl DeleteTopicUseCase for StubDeleteTopicUseCase {
    async fn execute(&self, _actor: UserId, _topic_id: Uuid) -> Result<(), DeleteTopicError> {
        self.result.clone()
    }
}

// ============================================================
// Vote / Interaction
// ============================================================

#[derive(Clone)]
pub struct StubVoteTopicUseCase {
    result: Result<VoteOutcome, VoteTopicError>,
    pub last_direction: Arc<Mutex<Option<VoteDirection>>>,
}

impl StubVoteTopicUseCase {
    pub fn outcome(current: Option<VoteDirection>, vote_count: i32) -> Self {
        Self {
            result: Ok(VoteOutcome {
                current,
                vote_count,
            }),
            last_direction: Arc::default(),
        }
    }

    pub fn error(err: VoteTopicError) -> Self {
        Self {
            result: Err(err),
            last_direction: Arc::default(),
        }
    }
}

#[async_trait]
impl VoteTopicUseCase for StubVoteTopicUseCase {
    async fn execute(
        &self,
        _voter: UserId,
        _topic_id: Uuid,
        direction: VoteDirection,
    ) -> Result<VoteOutcome, VoteTopicError> {
        *self.last_direction.lock().unwrap() = Some(direction);
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubTopicInteractionUseCase {
    result: Result<(), TopicInteractionError>,
    pub calls: Arc<Mutex<Vec<(InteractionKind, InteractionToggle)>>>,
}

impl StubTopicInteractionUseCase {
    pub fn success() -> Self {
        Self {
            result: Ok(()),
            calls: Arc::default(),
        }
    }

    pub fn error(err: TopicInteractionError) -> Self {
        Self {
            result: Err(err),
            calls: Arc::default(),
        }
    }
}

#[async_trait]
impl TopicInteractionUseCase for StubTopicInteractionUseCase {
    async fn execute(
        &self,
        _user: UserId,
        _topic_id: Uuid,
        kind: InteractionKind,
        toggle: InteractionToggle,
    ) -> Result<(), TopicInteractionError> {
        self.calls.lock().unwrap().push((kind, toggle));
        self.result.clone()
    }
}
