use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, Statement};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::topic::application::domain::entities::InteractionKind;
use crate::topic::application::ports::outgoing::{
    TopicInteractionRepository, TopicInteractionRepositoryError,
};

#[derive(Debug, Clone)]
pub struct TopicInteractionRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicInteractionRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    // =====================================================
    // SQL builders
    // =====================================================

    /// Guarded, idempotent insert:
    /// - topic must exist and not be deleted
    /// - on conflict (user_id, topic_id, kind) do nothing
    fn guarded_insert_stmt(user_id: Uuid, topic_id: Uuid, kind: InteractionKind) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            INSERT INTO topic_interactions (user_id, topic_id, kind)
            SELECT $1::uuid, t.id, $3::varchar
            FROM topics t
            WHERE t.id = $2
              AND t.is_deleted = false
            ON CONFLICT (user_id, topic_id, kind) DO NOTHING
            "#,
            vec![user_id.into(), topic_id.into(), kind.as_str().into()],
        )
    }

    fn delete_stmt(user_id: Uuid, topic_id: Uuid, kind: InteractionKind) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            DELETE FROM topic_interactions
            WHERE user_id = $1
              AND topic_id = $2
              AND kind = $3
            "#,
            vec![user_id.into(), topic_id.into(), kind.as_str().into()],
        )
    }

    fn map_db_err(e: DbErr) -> TopicInteractionRepositoryError {
        TopicInteractionRepositoryError::DatabaseError(e.to_string())
    }

    /// A statement touched no rows: either the topic is gone, or the pivot
    /// row was already in the requested state.
    async fn ensure_topic_live<C>(
        conn: &C,
        topic_id: Uuid,
    ) -> Result<(), TopicInteractionRepositoryError>
    where
        C: ConnectionTrait,
    {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT EXISTS(
                SELECT 1
                FROM topics t
                WHERE t.id = $1
                  AND t.is_deleted = false
            ) AS topic_ok
            "#,
            vec![topic_id.into()],
        );

        let row = conn
            .query_one(stmt)
            .await
            .map_err(Self::map_db_err)?
            .ok_or_else(|| {
                TopicInteractionRepositoryError::DatabaseError(
                    "Topic existence check returned no rows".to_string(),
                )
            })?;

        let topic_ok: bool = row.try_get("", "topic_ok").unwrap_or(false);
        if !topic_ok {
            return Err(TopicInteractionRepositoryError::TopicNotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl TopicInteractionRepository for TopicInteractionRepositoryPostgres {
    async fn add(
        &self,
        user: UserId,
        topic_id: Uuid,
        kind: InteractionKind,
    ) -> Result<(), TopicInteractionRepositoryError> {
        let user_id: Uuid = user.into();

        let result = self
            .db
            .execute(Self::guarded_insert_stmt(user_id, topic_id, kind))
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected() == 1 {
            return Ok(());
        }

        Self::ensure_topic_live(&*self.db, topic_id).await
    }

    async fn remove(
        &self,
        user: UserId,
        topic_id: Uuid,
        kind: InteractionKind,
    ) -> Result<(), TopicInteractionRepositoryError> {
        let user_id: Uuid = user.into();

        let result = self
            .db
            .execute(Self::delete_stmt(user_id, topic_id, kind))
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected() > 0 {
            return Ok(());
        }

        Self::ensure_topic_live(&*self.db, topic_id).await
    }
}
