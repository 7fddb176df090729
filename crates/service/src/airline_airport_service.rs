//! Association operations between airlines and airports.
//!
//! Every operation validates that the referenced entities exist before
//! touching the join table. Membership errors (`NotAssociated`) are distinct
//! from missing-entity errors so callers can map them to different HTTP
//! statuses. Add and remove are idempotent set operations on the join table;
//! replace is a diff-and-sync inside a transaction.
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, Set,
    TransactionTrait,
};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::ServiceError;
use models::{
    airline::{self, Entity as AirlineEntity},
    airline_airport::{self, Entity as LinkEntity},
    airport::{self, Entity as AirportEntity},
};

/// An airline together with its full association set.
#[derive(Debug, Clone, Serialize)]
pub struct AirlineWithAirports {
    #[serde(flatten)]
    pub airline: airline::Model,
    pub airports: Vec<airport::Model>,
}

fn db_err(e: sea_orm::DbErr) -> ServiceError {
    ServiceError::Db(e.to_string())
}

async fn find_airline(db: &DatabaseConnection, id: Uuid) -> Result<airline::Model, ServiceError> {
    AirlineEntity::find_by_id(id)
        .one(db)
        .await
        .map_err(db_err)?
        .ok_or_else(|| ServiceError::not_found("airline"))
}

async fn find_airport(db: &DatabaseConnection, id: Uuid) -> Result<airport::Model, ServiceError> {
    AirportEntity::find_by_id(id)
        .one(db)
        .await
        .map_err(db_err)?
        .ok_or_else(|| ServiceError::not_found("airport"))
}

async fn with_airports(
    db: &DatabaseConnection,
    airline: airline::Model,
) -> Result<AirlineWithAirports, ServiceError> {
    let airports = airline.find_related(AirportEntity).all(db).await.map_err(db_err)?;
    Ok(AirlineWithAirports { airline, airports })
}

/// Link an airport to an airline. Linking an already-linked pair is a no-op.
/// Returns the airline with its updated association set.
pub async fn add_airport_to_airline(
    db: &DatabaseConnection,
    airport_id: Uuid,
    airline_id: Uuid,
) -> Result<AirlineWithAirports, ServiceError> {
    let airline = find_airline(db, airline_id).await?;
    let airport = find_airport(db, airport_id).await?;

    let existing = LinkEntity::find_by_id((airline_id, airport_id))
        .one(db)
        .await
        .map_err(db_err)?;
    if existing.is_none() {
        let link = airline_airport::ActiveModel {
            airline_id: Set(airline.id),
            airport_id: Set(airport.id),
        };
        link.insert(db).await.map_err(db_err)?;
    }

    with_airports(db, airline).await
}

/// All airports linked to the given airline.
pub async fn find_airports_from_airline(
    db: &DatabaseConnection,
    airline_id: Uuid,
) -> Result<Vec<airport::Model>, ServiceError> {
    let airline = find_airline(db, airline_id).await?;
    airline.find_related(AirportEntity).all(db).await.map_err(db_err)
}

/// A single airport from the airline's association set. Both entities must
/// exist, and a link row must connect them.
pub async fn find_airport_from_airline(
    db: &DatabaseConnection,
    airline_id: Uuid,
    airport_id: Uuid,
) -> Result<airport::Model, ServiceError> {
    find_airline(db, airline_id).await?;
    let airport = find_airport(db, airport_id).await?;

    LinkEntity::find_by_id((airline_id, airport_id))
        .one(db)
        .await
        .map_err(db_err)?
        .ok_or_else(ServiceError::not_associated)?;

    Ok(airport)
}

/// Replace the airline's entire association set with the given airports.
/// Every input id must resolve; duplicates in the input collapse to one edge.
pub async fn update_airports_from_airline(
    db: &DatabaseConnection,
    airline_id: Uuid,
    airport_ids: &[Uuid],
) -> Result<AirlineWithAirports, ServiceError> {
    let airline = find_airline(db, airline_id).await?;

    let mut wanted: Vec<Uuid> = Vec::with_capacity(airport_ids.len());
    for id in airport_ids {
        find_airport(db, *id).await?;
        if !wanted.contains(id) {
            wanted.push(*id);
        }
    }

    // Diff-and-sync so untouched edges survive the replace
    let txn = db.begin().await.map_err(db_err)?;
    let current: Vec<airline_airport::Model> = LinkEntity::find()
        .filter(airline_airport::Column::AirlineId.eq(airline_id))
        .all(&txn)
        .await
        .map_err(db_err)?;

    for link in &current {
        if !wanted.contains(&link.airport_id) {
            LinkEntity::delete_by_id((airline_id, link.airport_id))
                .exec(&txn)
                .await
                .map_err(db_err)?;
        }
    }
    for id in &wanted {
        if !current.iter().any(|l| l.airport_id == *id) {
            let link = airline_airport::ActiveModel {
                airline_id: Set(airline_id),
                airport_id: Set(*id),
            };
            link.insert(&txn).await.map_err(db_err)?;
        }
    }
    txn.commit().await.map_err(db_err)?;

    with_airports(db, airline).await
}

/// Remove one association edge. The entities themselves are untouched.
pub async fn delete_airport_from_airline(
    db: &DatabaseConnection,
    airport_id: Uuid,
    airline_id: Uuid,
) -> Result<(), ServiceError> {
    find_airline(db, airline_id).await?;
    find_airport(db, airport_id).await?;

    LinkEntity::find_by_id((airline_id, airport_id))
        .one(db)
        .await
        .map_err(db_err)?
        .ok_or_else(ServiceError::not_associated)?;

    LinkEntity::delete_by_id((airline_id, airport_id))
        .exec(db)
        .await
        .map_err(db_err)?;
    Ok(())
}
