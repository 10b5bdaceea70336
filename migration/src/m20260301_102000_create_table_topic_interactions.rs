use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create topic_interactions table
        // (favorite / attention pivot rows)
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(TopicInteractions::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TopicInteractions::UserId).uuid().not_null())
                    .col(ColumnDef::new(TopicInteractions::TopicId).uuid().not_null())
                    .col(
                        ColumnDef::new(TopicInteractions::Kind)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TopicInteractions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // Composite primary key
                    .primary_key(
                        Index::create()
                            .col(TopicInteractions::UserId)
                            .col(TopicInteractions::TopicId)
                            .col(TopicInteractions::Kind),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_topic_interactions_user_id")
                            .from(TopicInteractions::Table, TopicInteractions::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_topic_interactions_topic_id")
                            .from(TopicInteractions::Table, TopicInteractions::TopicId)
                            .to(Topics::Table, Topics::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing a user's favorites / attentions, newest first
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_topic_interactions_user_kind
                ON topic_interactions (user_id, kind, created_at DESC);

                ALTER TABLE topic_interactions
                ADD CONSTRAINT chk_topic_interactions_kind
                CHECK (kind IN ('favorite', 'attention'));
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_topic_interactions_user_kind;")
            .await?;

        manager
            .drop_table(Table::drop().table(TopicInteractions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TopicInteractions {
    Table,
    UserId,
    TopicId,
    Kind,
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
