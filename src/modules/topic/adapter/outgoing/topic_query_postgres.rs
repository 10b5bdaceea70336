use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Select,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::auth::application::domain::entities::UserId;
use crate::topic::application::domain::entities::InteractionKind;
use crate::topic::application::ports::outgoing::{
    PageRequest, PageResult, TopicFilter, TopicQuery, TopicQueryError, TopicQueryResult,
    TopicWithAuthor,
};

use super::sea_orm_entity::topic_interactions;
use super::sea_orm_entity::topics::{self, Column, Entity};

#[derive(Debug, Clone)]
pub struct TopicQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn live() -> Select<Entity> {
        Entity::find().filter(Column::IsDeleted.eq(false))
    }

    /// Count first, then fetch one page with the same conditions.
    async fn paginate(
        &self,
        query: Select<Entity>,
        page: PageRequest,
    ) -> Result<PageResult<TopicQueryResult>, TopicQueryError> {
        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models = query
            .offset(page.offset())
            .limit(page.per_page as u64)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(PageResult {
            items: models.iter().map(topics::Model::to_query_result).collect(),
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }
}

fn apply_filter(query: Select<Entity>, filter: TopicFilter) -> Select<Entity> {
    match filter {
        TopicFilter::Default => query.order_by_desc(Column::UpdatedAt),
        TopicFilter::Recent => query.order_by_desc(Column::CreatedAt),
        TopicFilter::Vote => query
            .order_by_desc(Column::VoteCount)
            .order_by_desc(Column::CreatedAt),
        TopicFilter::Excellent => query
            .filter(Column::IsExcellent.eq(true))
            .order_by_desc(Column::CreatedAt),
        TopicFilter::NoReply => query
            .filter(Column::ReplyCount.eq(0))
            .order_by_desc(Column::CreatedAt),
    }
}

fn map_db_err(e: DbErr) -> TopicQueryError {
    TopicQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl TopicQuery for TopicQueryPostgres {
    async fn list(
        &self,
        filter: TopicFilter,
        node_id: Option<Uuid>,
        page: PageRequest,
    ) -> Result<PageResult<TopicQueryResult>, TopicQueryError> {
        let mut query = Self::live();
        if let Some(node_id) = node_id {
            query = query.filter(Column::NodeId.eq(node_id));
        }

        self.paginate(apply_filter(query, filter), page).await
    }

    async fn list_by_owner(
        &self,
        owner: UserId,
        page: PageRequest,
    ) -> Result<PageResult<TopicQueryResult>, TopicQueryError> {
        let query = Self::live()
            .filter(Column::UserId.eq(owner.value()))
            .order_by_desc(Column::CreatedAt);

        self.paginate(query, page).await
    }

    async fn list_by_interaction(
        &self,
        user: UserId,
        kind: InteractionKind,
        page: PageRequest,
    ) -> Result<PageResult<TopicQueryResult>, TopicQueryError> {
        let query = Self::live()
            .join(JoinType::InnerJoin, topics::Relation::Interactions.def())
            .filter(topic_interactions::Column::UserId.eq(user.value()))
            .filter(topic_interactions::Column::Kind.eq(kind.as_str()))
            .order_by_desc(topic_interactions::Column::CreatedAt);

        self.paginate(query, page).await
    }

    async fn find_by_id(
        &self,
        topic_id: Uuid,
    ) -> Result<Option<TopicQueryResult>, TopicQueryError> {
        let model = Self::live()
            .filter(Column::Id.eq(topic_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.as_ref().map(topics::Model::to_query_result))
    }

    async fn find_with_author(
        &self,
        topic_id: Uuid,
    ) -> Result<Option<TopicWithAuthor>, TopicQueryError> {
        let row = Self::live()
            .filter(Column::Id.eq(topic_id))
            .find_also_related(users::Entity)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(|(topic, user)| TopicWithAuthor {
            topic: topic.to_query_result(),
            author: topics::to_author(user),
        }))
    }
}
