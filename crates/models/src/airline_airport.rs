//! Join entity recording which airports are covered by which airlines.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{airline, airport};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "airline_airport")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub airline_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub airport_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Airline,
    Airport,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Airline => Entity::belongs_to(airline::Entity)
                .from(Column::AirlineId)
                .to(airline::Column::Id)
                .into(),
            Relation::Airport => Entity::belongs_to(airport::Entity)
                .from(Column::AirportId)
                .to(airport::Column::Id)
                .into(),
        }
    }
}

impl Related<airline::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Airline.def()
    }
}

impl Related<airport::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Airport.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
