use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{airline, airline_airport, errors};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "airport")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub country: String,
    pub city: String,
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

impl Related<airline::Entity> for Entity {
    fn to() -> RelationDef {
        airline_airport::Relation::Airline.def()
    }

    fn via() -> Option<RelationDef> {
        Some(airline_airport::Relation::Airport.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_fields(
    name: &str,
    code: &str,
    country: &str,
    city: &str,
) -> Result<(), errors::ModelError> {
    errors::require("name", name)?;
    errors::require("code", code)?;
    errors::require("country", country)?;
    errors::require("city", city)?;
    Ok(())
}

pub async fn create(
    db: &DatabaseConnection,
    name: &str,
    code: &str,
    country: &str,
    city: &str,
) -> Result<Model, errors::ModelError> {
    validate_fields(name, code, country, city)?;
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        code: Set(code.trim().to_string()),
        country: Set(country.to_string()),
        city: Set(city.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
