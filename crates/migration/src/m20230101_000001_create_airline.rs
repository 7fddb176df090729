//! Create `airline` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Airline::Table)
                    .if_not_exists()
                    .col(uuid(Airline::Id).primary_key())
                    .col(string_len(Airline::Name, 128).not_null())
                    .col(string_len(Airline::Description, 512).not_null())
                    .col(date(Airline::FoundedDate).not_null())
                    .col(string_len(Airline::Webpage, 256).not_null())
                    .col(timestamp_with_time_zone(Airline::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Airline::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Airline::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Airline { Table, Id, Name, Description, FoundedDate, Webpage, CreatedAt, UpdatedAt }
