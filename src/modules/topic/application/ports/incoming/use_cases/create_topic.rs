use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    topic::application::ports::outgoing::TopicQueryResult,
};

//
// ──────────────────────────────────────────────────────────
// Create Topic Command
// ──────────────────────────────────────────────────────────
//

/// Raw submission. Field rules are checked by the use case so that every
/// failing rule can be reported at once. `node_id` stays textual until then.
#[derive(Debug, Clone)]
pub struct CreateTopicCommand {
    pub author: UserId,
    pub title: Option<String>,
    pub body: Option<String>,
    pub node_id: Option<String>,
}

pub const TITLE_MIN_CHARS: usize = 2;
pub const TITLE_MAX_CHARS: usize = 100;
pub const BODY_MIN_CHARS: usize = 2;

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateTopicError {
    #[error("Email address is not verified")]
    UnverifiedAuthor,

    #[error("Author not found")]
    AuthorNotFound,

    #[error("Could not create new topic.")]
    Validation(Vec<String>),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateTopicUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateTopicCommand,
    ) -> Result<TopicQueryResult, CreateTopicError>;
}
