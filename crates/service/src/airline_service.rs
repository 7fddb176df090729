use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use uuid::Uuid;

use crate::errors::ServiceError;
use models::airline::{self, Entity as AirlineEntity};

/// List all airlines, unfiltered.
pub async fn list_airlines(db: &DatabaseConnection) -> Result<Vec<airline::Model>, ServiceError> {
    let rows = AirlineEntity::find().all(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows)
}

/// Get an airline by id, failing when the id does not resolve.
pub async fn get_airline(db: &DatabaseConnection, id: Uuid) -> Result<airline::Model, ServiceError> {
    AirlineEntity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("airline"))
}

/// Create an airline after field validation.
pub async fn create_airline(
    db: &DatabaseConnection,
    name: &str,
    description: &str,
    founded_date: chrono::NaiveDate,
    webpage: &str,
) -> Result<airline::Model, ServiceError> {
    let created = airline::create(db, name, description, founded_date, webpage).await?;
    Ok(created)
}

/// Full-record update; every field is overwritten.
pub async fn update_airline(
    db: &DatabaseConnection,
    id: Uuid,
    name: &str,
    description: &str,
    founded_date: chrono::NaiveDate,
    webpage: &str,
) -> Result<airline::Model, ServiceError> {
    airline::validate_fields(name, description, webpage)?;
    let mut am: airline::ActiveModel = AirlineEntity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("airline"))?
        .into();
    am.name = Set(name.to_string());
    am.description = Set(description.to_string());
    am.founded_date = Set(founded_date);
    am.webpage = Set(webpage.to_string());
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(updated)
}

/// Delete an airline. Join rows are removed by the FK cascade.
pub async fn delete_airline(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    let res = AirlineEntity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("airline"));
    }
    Ok(())
}
