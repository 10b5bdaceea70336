use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::application::ports::outgoing::UserQuery,
    topic::application::ports::{
        incoming::use_cases::{
            CreateTopicCommand, CreateTopicError, CreateTopicUseCase, BODY_MIN_CHARS,
            TITLE_MAX_CHARS, TITLE_MIN_CHARS,
        },
        outgoing::{CreateTopicData, NodeQuery, TopicQueryResult, TopicRepository},
    },
};

#[derive(Debug, Clone)]
pub struct CreateTopicService<R, N, U>
where
    R: TopicRepository + Send + Sync,
    N: NodeQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    repository: R,
    nodes: N,
    users: U,
}

impl<R, N, U> CreateTopicService<R, N, U>
where
    R: TopicRepository + Send + Sync,
    N: NodeQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    pub fn new(repository: R, nodes: N, users: U) -> Self {
        Self {
            repository,
            nodes,
            users,
        }
    }

    /// Collects every broken rule instead of stopping at the first one.
    async fn validate(
        &self,
        command: CreateTopicCommand,
    ) -> Result<CreateTopicData, CreateTopicError> {
        let mut errors = Vec::new();

        let title = command.title.as_deref().map(str::trim).unwrap_or_default();
        let title_len = title.chars().count();
        if title.is_empty() {
            errors.push("The title field is required.".to_string());
        } else if title_len < TITLE_MIN_CHARS {
            errors.push(format!(
                "The title must be at least {} characters.",
                TITLE_MIN_CHARS
            ));
        } else if title_len > TITLE_MAX_CHARS {
            errors.push(format!(
                "The title may not be greater than {} characters.",
                TITLE_MAX_CHARS
            ));
        }

        let body = command.body.as_deref().map(str::trim).unwrap_or_default();
        if body.is_empty() {
            errors.push("The body field is required.".to_string());
        } else if body.chars().count() < BODY_MIN_CHARS {
            errors.push(format!(
                "The body must be at least {} characters.",
                BODY_MIN_CHARS
            ));
        }

        let node_id = match command.node_id.as_deref().map(str::trim) {
            None | Some("") => {
                errors.push("The node id field is required.".to_string());
                None
            }
            Some(raw) => match Uuid::parse_str(raw) {
                Ok(node_id) => {
                    let exists = self
                        .nodes
                        .exists(node_id)
                        .await
                        .map_err(|e| CreateTopicError::RepositoryError(e.to_string()))?;
                    if !exists {
                        errors.push("The selected node id is invalid.".to_string());
                    }
                    Some(node_id)
                }
                Err(_) => {
                    errors.push("The selected node id is invalid.".to_string());
                    None
                }
            },
        };

        match node_id {
            Some(node_id) if errors.is_empty() => Ok(CreateTopicData {
                owner: command.author,
                node_id,
                title: title.to_string(),
                body: body.to_string(),
            }),
            _ => Err(CreateTopicError::Validation(errors)),
        }
    }
}

#[async_trait]
impl<R, N, U> CreateTopicUseCase for CreateTopicService<R, N, U>
where
    R: TopicRepository + Send + Sync,
    N: NodeQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateTopicCommand,
    ) -> Result<TopicQueryResult, CreateTopicError> {
        // Verified flag comes from the stored account, not the token claim.
        let author = self
            .users
            .find_by_id(command.author.value())
            .await
            .map_err(|e| CreateTopicError::RepositoryError(e.to_string()))?
            .ok_or(CreateTopicError::AuthorNotFound)?;

        if !author.is_verified {
            return Err(CreateTopicError::UnverifiedAuthor);
        }

        let data = self.validate(command).await?;

        self.repository
            .create_topic(data)
            .await
            .map_err(|e| CreateTopicError::RepositoryError(e.to_string()))
    }
}
