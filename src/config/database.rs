//! Database configuration module for rental-buddy.
//!
//! This module handles the `SQLite` connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with
//! `Schema::create_table_from_entity`, so the schema always matches the Rust models,
//! and are created only when missing so an existing fleet survives restarts.

use crate::entities::{Transaction, Vehicle};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::{debug, info, instrument};

/// Default `SQLite` location, created on first use.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://rental_buddy.sqlite?mode=rwc";

/// Gets the database URL from the `DATABASE_URL` environment variable,
/// falling back to [`DEFAULT_DATABASE_URL`].
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Connects to the given database URL and ensures all tables exist.
///
/// This is the single place the store handle is created; the handle is then passed
/// explicitly to [`crate::core::RentalManager`].
#[instrument]
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    debug!("Connecting to database");
    let db = Database::connect(database_url).await?;
    create_tables(&db).await?;
    info!("Database ready");
    Ok(db)
}

/// Creates the `vehicles` and `transactions` tables if they do not exist yet.
///
/// The statements come from the `DeriveEntityModel` definitions, including the
/// `UNIQUE` plate constraint and the `vehicle_id` foreign key.
pub async fn create_tables<C>(db: &C) -> Result<()>
where
    C: ConnectionTrait,
{
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut vehicle_table = schema.create_table_from_entity(Vehicle);
    vehicle_table.if_not_exists();
    let mut transaction_table = schema.create_table_from_entity(Transaction);
    transaction_table.if_not_exists();

    // vehicles first: transactions references it
    db.execute(builder.build(&vehicle_table)).await?;
    db.execute(builder.build(&transaction_table)).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{TransactionModel, VehicleModel};
    use sea_orm::{EntityTrait, QuerySelect};

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Test that tables exist by querying them
        let _: Vec<VehicleModel> = Vehicle::find().limit(1).all(&db).await?;
        let _: Vec<TransactionModel> = Transaction::find().limit(1).all(&db).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_is_idempotent() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;
        create_tables(&db).await?;

        let vehicles: Vec<VehicleModel> = Vehicle::find().all(&db).await?;
        assert!(vehicles.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_create_connection_in_memory() -> Result<()> {
        let db = create_connection("sqlite::memory:").await?;
        let _: Vec<VehicleModel> = Vehicle::find().limit(1).all(&db).await?;
        Ok(())
    }
}
