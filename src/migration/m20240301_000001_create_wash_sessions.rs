use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WashSessions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WashSessions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WashSessions::LocationId).string().not_null())
                    .col(
                        ColumnDef::new(WashSessions::Token)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(WashSessions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WashSessions::ExpiresAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WashSessions::UsedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Consumption looks sessions up by (location_id, token).
        manager
            .create_index(
                Index::create()
                    .name("idx_wash_sessions_location_token")
                    .table(WashSessions::Table)
                    .col(WashSessions::LocationId)
                    .col(WashSessions::Token)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WashSessions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum WashSessions {
    Table,
    Id,
    LocationId,
    Token,
    CreatedAt,
    ExpiresAt,
    UsedAt,
}
