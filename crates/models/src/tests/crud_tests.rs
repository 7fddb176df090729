use crate::db::connect;
use crate::{airline, airline_airport, airport, errors};
use anyhow::Result;
use chrono::NaiveDate;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set};
use uuid::Uuid;

/// Setup test database with migrations
async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

fn founded() -> NaiveDate {
    NaiveDate::from_ymd_opt(1993, 5, 4).unwrap()
}

#[tokio::test]
async fn test_airline_crud() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }

    let db = setup_test_db().await?;

    let name = format!("test_airline_{}", Uuid::new_v4());
    let created = airline::create(&db, &name, "low-cost carrier", founded(), "example.com").await?;
    assert_eq!(created.name, name);
    assert_eq!(created.founded_date, founded());

    let found = airline::Entity::find_by_id(created.id).one(&db).await?;
    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.webpage, "example.com");

    airline::Entity::delete_by_id(created.id).exec(&db).await?;
    let after = airline::Entity::find_by_id(created.id).one(&db).await?;
    assert!(after.is_none());
    Ok(())
}

#[tokio::test]
async fn test_airport_crud() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }

    let db = setup_test_db().await?;

    let name = format!("test_airport_{}", Uuid::new_v4());
    let created = airport::create(&db, &name, " BOG ", "Colombia", "Bogota").await?;
    // code is stored trimmed
    assert_eq!(created.code, "BOG");

    let found = airport::Entity::find_by_id(created.id).one(&db).await?.unwrap();
    assert_eq!(found.city, "Bogota");

    airport::Entity::delete_by_id(created.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_join_rows_cascade_on_airline_delete() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }

    let db = setup_test_db().await?;

    let al = airline::create(&db, &format!("cascade_{}", Uuid::new_v4()), "d", founded(), "w.io").await?;
    let ap = airport::create(&db, &format!("cascade_{}", Uuid::new_v4()), "MDE", "Colombia", "Medellin").await?;

    let link = airline_airport::ActiveModel { airline_id: Set(al.id), airport_id: Set(ap.id) };
    link.insert(&db).await?;

    let related = al.find_related(airport::Entity).all(&db).await?;
    assert_eq!(related.len(), 1);
    assert_eq!(related[0].id, ap.id);

    // Deleting the airline must remove the edge but not the airport
    airline::Entity::delete_by_id(al.id).exec(&db).await?;
    let leftover = airline_airport::Entity::find_by_id((al.id, ap.id)).one(&db).await?;
    assert!(leftover.is_none());
    let airport_still_there = airport::Entity::find_by_id(ap.id).one(&db).await?;
    assert!(airport_still_there.is_some());

    airport::Entity::delete_by_id(ap.id).exec(&db).await?;
    Ok(())
}

#[test]
fn validation_rejects_blank_fields() {
    assert!(matches!(
        airline::validate_fields("", "d", "w"),
        Err(errors::ModelError::Validation(_))
    ));
    assert!(matches!(
        airport::validate_fields("El Dorado", "BOG", "  ", "Bogota"),
        Err(errors::ModelError::Validation(_))
    ));
    assert!(airline::validate_fields("Avianca", "flag carrier", "avianca.com").is_ok());
    assert!(airport::validate_fields("El Dorado", "BOG", "Colombia", "Bogota").is_ok());
}
