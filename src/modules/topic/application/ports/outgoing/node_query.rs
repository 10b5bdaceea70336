use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum NodeQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait NodeQuery: Send + Sync {
    async fn exists(&self, node_id: Uuid) -> Result<bool, NodeQueryError>;
}
