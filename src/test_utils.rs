//! Shared test utilities for rental-buddy.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use crate::{
    core::{rental, vehicle},
    entities,
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, EntityTrait};
use tracing_subscriber::EnvFilter;

/// Routes tracing output through the test harness so it shows up with `--nocapture`.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    init_test_tracing();
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Shorthand for a calendar date in tests.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Creates a test vehicle with sensible defaults.
///
/// # Defaults
/// * `make`: "Toyota"
/// * `model`: "Avanza"
/// * `daily_rate`: 300000
pub async fn create_test_vehicle(
    db: &DatabaseConnection,
    plate: &str,
) -> Result<entities::vehicle::Model> {
    vehicle::create_vehicle(db, plate, "Toyota", "Avanza", "300000").await
}

/// Creates a test vehicle with a custom daily rate.
pub async fn create_custom_vehicle(
    db: &DatabaseConnection,
    plate: &str,
    daily_rate: i64,
) -> Result<entities::vehicle::Model> {
    vehicle::create_vehicle(db, plate, "Toyota", "Avanza", &daily_rate.to_string()).await
}

/// Starts a three-day rental (2024-01-01 to 2024-01-04) for "Test Renter".
pub async fn create_test_rental(
    db: &DatabaseConnection,
    vehicle_id: i64,
) -> Result<entities::transaction::Model> {
    rental::start_rental(
        db,
        vehicle_id,
        "Test Renter",
        date(2024, 1, 1),
        date(2024, 1, 4),
    )
    .await
}

/// Fetches a transaction by id, in any state, for verifying stored rows.
pub async fn get_transaction_by_id(
    db: &DatabaseConnection,
    transaction_id: i64,
) -> Result<Option<entities::transaction::Model>> {
    entities::Transaction::find_by_id(transaction_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Sets up a complete test environment with one available vehicle.
/// Returns (db, vehicle) for common test scenarios.
pub async fn setup_with_vehicle() -> Result<(DatabaseConnection, entities::vehicle::Model)> {
    let db = setup_test_db().await?;
    let vehicle = create_test_vehicle(&db, "B 1234 XY").await?;
    Ok((db, vehicle))
}
