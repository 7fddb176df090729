//! Create `airport` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Airport::Table)
                    .if_not_exists()
                    .col(uuid(Airport::Id).primary_key())
                    .col(string_len(Airport::Name, 128).not_null())
                    .col(string_len(Airport::Code, 16).not_null())
                    .col(string_len(Airport::Country, 128).not_null())
                    .col(string_len(Airport::City, 128).not_null())
                    .col(timestamp_with_time_zone(Airport::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Airport::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Airport::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Airport { Table, Id, Name, Code, Country, City, CreatedAt, UpdatedAt }
