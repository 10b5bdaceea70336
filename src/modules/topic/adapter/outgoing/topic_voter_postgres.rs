use async_trait::async_trait;
use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, Statement, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::topic::application::domain::entities::VoteDirection;
use crate::topic::application::domain::vote::VoteTransition;
use crate::topic::application::ports::outgoing::{TopicVoter, TopicVoterError, VoteOutcome};

#[derive(Debug, Clone)]
pub struct TopicVoterPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicVoterPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> TopicVoterError {
        TopicVoterError::DatabaseError(e.to_string())
    }

    /// Row lock on the topic serializes concurrent votes on it.
    fn lock_topic_stmt(topic_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT vote_count
            FROM topics
            WHERE id = $1
              AND is_deleted = false
            FOR UPDATE
            "#,
            vec![topic_id.into()],
        )
    }

    fn existing_vote_stmt(user_id: Uuid, topic_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT direction
            FROM topic_votes
            WHERE user_id = $1
              AND topic_id = $2
            "#,
            vec![user_id.into(), topic_id.into()],
        )
    }

    /// Brings the vote row in line with the transition's target state.
    fn vote_row_stmt(
        user_id: Uuid,
        topic_id: Uuid,
        existing: Option<VoteDirection>,
        next: Option<VoteDirection>,
    ) -> Option<Statement> {
        let stmt = match (existing, next) {
            (None, Some(direction)) => Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"
                INSERT INTO topic_votes (id, user_id, topic_id, direction)
                VALUES ($3, $1, $2, $4)
                "#,
                vec![
                    user_id.into(),
                    topic_id.into(),
                    Uuid::new_v4().into(),
                    direction.as_str().into(),
                ],
            ),
            (Some(_), Some(direction)) => Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"
                UPDATE topic_votes
                SET direction = $3
                WHERE user_id = $1
                  AND topic_id = $2
                "#,
                vec![user_id.into(), topic_id.into(), direction.as_str().into()],
            ),
            (Some(_), None) => Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"
                DELETE FROM topic_votes
                WHERE user_id = $1
                  AND topic_id = $2
                "#,
                vec![user_id.into(), topic_id.into()],
            ),
            (None, None) => return None,
        };

        Some(stmt)
    }

    fn bump_counter_stmt(topic_id: Uuid, delta: i32) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            UPDATE topics
            SET vote_count = vote_count + $2
            WHERE id = $1
            RETURNING vote_count
            "#,
            vec![topic_id.into(), delta.into()],
        )
    }

    async fn apply<C>(
        conn: &C,
        user_id: Uuid,
        topic_id: Uuid,
        direction: VoteDirection,
    ) -> Result<VoteOutcome, TopicVoterError>
    where
        C: ConnectionTrait,
    {
        conn.query_one(Self::lock_topic_stmt(topic_id))
            .await
            .map_err(Self::map_db_err)?
            .ok_or(TopicVoterError::TopicNotFound)?;

        let existing = match conn
            .query_one(Self::existing_vote_stmt(user_id, topic_id))
            .await
            .map_err(Self::map_db_err)?
        {
            Some(row) => {
                let raw: String = row.try_get("", "direction").map_err(Self::map_db_err)?;
                let parsed = VoteDirection::parse(&raw).ok_or_else(|| {
                    TopicVoterError::DatabaseError(format!("Unknown vote direction '{}'", raw))
                })?;
                Some(parsed)
            }
            None => None,
        };

        let transition = VoteTransition::resolve(existing, direction);

        if let Some(stmt) = Self::vote_row_stmt(user_id, topic_id, existing, transition.next) {
            conn.execute(stmt).await.map_err(Self::map_db_err)?;
        }

        let row = conn
            .query_one(Self::bump_counter_stmt(topic_id, transition.delta))
            .await
            .map_err(Self::map_db_err)?
            .ok_or(TopicVoterError::TopicNotFound)?;

        let vote_count: i32 = row.try_get("", "vote_count").map_err(Self::map_db_err)?;

        Ok(VoteOutcome {
            current: transition.next,
            vote_count,
        })
    }
}

#[async_trait]
impl TopicVoter for TopicVoterPostgres {
    async fn vote(
        &self,
        voter: UserId,
        topic_id: Uuid,
        direction: VoteDirection,
    ) -> Result<VoteOutcome, TopicVoterError> {
        let user_id: Uuid = voter.into();
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        match Self::apply(&txn, user_id, topic_id, direction).await {
            Ok(outcome) => {
                txn.commit().await.map_err(Self::map_db_err)?;
                Ok(outcome)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::warn!(
                        topic_id = %topic_id,
                        error = %rollback_err,
                        "Failed to roll back vote transaction"
                    );
                }
                Err(e)
            }
        }
    }
}
