//! Create `airline_airport` join table.
//!
//! One row per association edge; composite primary key keeps an airport
//! linked to an airline at most once. Deleting either side cascades into
//! the join rows, so detaching on entity delete needs no application code.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AirlineAirport::Table)
                    .if_not_exists()
                    .col(uuid(AirlineAirport::AirlineId).not_null())
                    .col(uuid(AirlineAirport::AirportId).not_null())
                    .primary_key(
                        Index::create()
                            .col(AirlineAirport::AirlineId)
                            .col(AirlineAirport::AirportId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_airline_airport_airline")
                            .from(AirlineAirport::Table, AirlineAirport::AirlineId)
                            .to(Airline::Table, Airline::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_airline_airport_airport")
                            .from(AirlineAirport::Table, AirlineAirport::AirportId)
                            .to(Airport::Table, Airport::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(AirlineAirport::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum AirlineAirport { Table, AirlineId, AirportId }

#[derive(DeriveIden)]
enum Airline { Table, Id }

#[derive(DeriveIden)]
enum Airport { Table, Id }
