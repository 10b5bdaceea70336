use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create topic_votes table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(TopicVotes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TopicVotes::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(TopicVotes::UserId).uuid().not_null())
                    .col(ColumnDef::new(TopicVotes::TopicId).uuid().not_null())
                    .col(ColumnDef::new(TopicVotes::Direction).string_len(8).not_null())
                    .col(
                        ColumnDef::new(TopicVotes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_topic_votes_user_id")
                            .from(TopicVotes::Table, TopicVotes::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_topic_votes_topic_id")
                            .from(TopicVotes::Table, TopicVotes::TopicId)
                            .to(Topics::Table, Topics::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One vote per user per topic
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_topic_votes_user_topic
                ON topic_votes (user_id, topic_id);

                ALTER TABLE topic_votes
                ADD CONSTRAINT chk_topic_votes_direction
                CHECK (direction IN ('up', 'down'));
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_topic_votes_user_topic;")
            .await?;

        manager
            .drop_table(Table::drop().table(TopicVotes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TopicVotes {
    Table,
    Id,
    UserId,
    TopicId,
    Direction,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Topics {
    Table,
    Id,
}
