use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use uuid::Uuid;

use crate::errors::ServiceError;
use models::airport::{self, Entity as AirportEntity};

/// List all airports, unfiltered.
pub async fn list_airports(db: &DatabaseConnection) -> Result<Vec<airport::Model>, ServiceError> {
    let rows = AirportEntity::find().all(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows)
}

/// Get an airport by id, failing when the id does not resolve.
pub async fn get_airport(db: &DatabaseConnection, id: Uuid) -> Result<airport::Model, ServiceError> {
    AirportEntity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("airport"))
}

/// Create an airport after field validation.
pub async fn create_airport(
    db: &DatabaseConnection,
    name: &str,
    code: &str,
    country: &str,
    city: &str,
) -> Result<airport::Model, ServiceError> {
    let created = airport::create(db, name, code, country, city).await?;
    Ok(created)
}

/// Full-record update; every field is overwritten.
pub async fn update_airport(
    db: &DatabaseConnection,
    id: Uuid,
    name: &str,
    code: &str,
    country: &str,
    city: &str,
) -> Result<airport::Model, ServiceError> {
    airport::validate_fields(name, code, country, city)?;
    let mut am: airport::ActiveModel = AirportEntity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("airport"))?
        .into();
    am.name = Set(name.to_string());
    am.code = Set(code.trim().to_string());
    am.country = Set(country.to_string());
    am.city = Set(city.to_string());
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(updated)
}

/// Delete an airport. Join rows are removed by the FK cascade.
pub async fn delete_airport(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
    let res = AirportEntity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("airport"));
    }
    Ok(())
}
