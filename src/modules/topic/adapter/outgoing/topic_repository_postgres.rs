use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::topic::application::ports::outgoing::{
    CreateTopicData, TopicQueryResult, TopicRepository, TopicRepositoryError,
};

use super::sea_orm_entity::topics::{
    ActiveModel as TopicActiveModel, Column as TopicColumn, Entity as TopicEntity,
    Model as TopicModel,
};

#[derive(Debug, Clone)]
pub struct TopicRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TopicRepository for TopicRepositoryPostgres {
    async fn create_topic(
        &self,
        data: CreateTopicData,
    ) -> Result<TopicQueryResult, TopicRepositoryError> {
        let active = TopicActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.owner.into()),
            node_id: Set(data.node_id),
            title: Set(data.title),
            body: Set(data.body),
            vote_count: Set(0),
            reply_count: Set(0),
            is_excellent: Set(false),
            is_deleted: Set(false),
            ..Default::default()
        };

        let inserted: TopicModel = active
            .insert(&*self.db)
            .await
            .map_err(|e| TopicRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_query_result())
    }

    async fn soft_delete_topic(&self, topic_id: Uuid) -> Result<(), TopicRepositoryError> {
        let result = TopicEntity::update_many()
            .col_expr(TopicColumn::IsDeleted, Expr::value(true))
            .col_expr(TopicColumn::UpdatedAt, Expr::current_timestamp().into())
            .filter(TopicColumn::Id.eq(topic_id))
            .filter(TopicColumn::IsDeleted.eq(false))
            .exec(&*self.db)
            .await
            .map_err(|e| TopicRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(TopicRepositoryError::TopicNotFound);
        }

        Ok(())
    }
}
