use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use std::sync::Arc;
use uuid::Uuid;

use crate::topic::application::ports::outgoing::{NodeQuery, NodeQueryError};

use super::sea_orm_entity::nodes;

#[derive(Debug, Clone)]
pub struct NodeQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl NodeQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl NodeQuery for NodeQueryPostgres {
    async fn exists(&self, node_id: Uuid) -> Result<bool, NodeQueryError> {
        let count = nodes::Entity::find_by_id(node_id)
            .count(&*self.db)
            .await
            .map_err(|e| NodeQueryError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::sea_query::Value;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
    use std::collections::BTreeMap;

    fn count_row(n: i64) -> BTreeMap<String, Value> {
        BTreeMap::from([("num_items".to_string(), Value::BigInt(Some(n)))])
    }

    #[tokio::test]
    async fn test_exists_true() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(1)]])
            .into_connection();

        let query = NodeQueryPostgres::new(Arc::new(db));

        assert!(query.exists(Uuid::new_v4()).await.unwrap());
    }

    #[tokio::test]
    async fn test_exists_false() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(0)]])
            .into_connection();

        let query = NodeQueryPostgres::new(Arc::new(db));

        assert!(!query.exists(Uuid::new_v4()).await.unwrap());
    }

    #[tokio::test]
    async fn test_exists_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection error".to_string())])
            .into_connection();

        let query = NodeQueryPostgres::new(Arc::new(db));

        assert!(matches!(
            query.exists(Uuid::new_v4()).await,
            Err(NodeQueryError::DatabaseError(_))
        ));
    }
}
