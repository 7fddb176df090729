use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{airline_airport, airport, errors};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "airline")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub founded_date: Date,
    pub webpage: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        // All relations go through the join entity
        panic!("No RelationDef")
    }
}

impl Related<airport::Entity> for Entity {
    fn to() -> RelationDef {
        airline_airport::Relation::Airport.def()
    }

    fn via() -> Option<RelationDef> {
        Some(airline_airport::Relation::Airline.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_fields(
    name: &str,
    description: &str,
    webpage: &str,
) -> Result<(), errors::ModelError> {
    errors::require("name", name)?;
    errors::require("description", description)?;
    errors::require("webpage", webpage)?;
    Ok(())
}

pub async fn create(
    db: &DatabaseConnection,
    name: &str,
    description: &str,
    founded_date: Date,
    webpage: &str,
) -> Result<Model, errors::ModelError> {
    validate_fields(name, description, webpage)?;
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        description: Set(description.to_string()),
        founded_date: Set(founded_date),
        webpage: Set(webpage.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
