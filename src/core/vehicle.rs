//! Vehicle business logic - Fleet registration and lookups.
//!
//! Vehicles are only ever created here. Their `status` is never written by this module
//! after creation; the rental lifecycle in [`super::rental`] owns that column.

use crate::{
    config::settings::VehicleConfig,
    entities::{Vehicle, VehicleStatus, vehicle},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, SqlErr, TransactionTrait, prelude::*};
use tracing::{debug, info, instrument};

/// Parses operator-entered daily rate text into a non-negative integer amount.
///
/// Surrounding whitespace is ignored. Anything else that is not a plain whole number,
/// or is negative, is rejected.
///
/// # Errors
/// Returns `Error::InvalidDailyRate` carrying the raw input.
pub fn parse_daily_rate(input: &str) -> Result<i64> {
    match input.trim().parse::<i64>() {
        Ok(rate) if rate >= 0 => Ok(rate),
        _ => Err(Error::InvalidDailyRate {
            input: input.to_string(),
        }),
    }
}

/// Registers a new vehicle in the fleet with status `AVAILABLE`.
///
/// The plate is trimmed and must be non-empty and not already registered. The daily
/// rate arrives as raw text and goes through [`parse_daily_rate`]. Nothing is
/// written unless every check passes.
///
/// # Errors
/// Returns an error if:
/// - The plate is empty or whitespace-only (`Error::Validation`)
/// - The daily rate is not a non-negative whole number (`Error::InvalidDailyRate`)
/// - Another vehicle already has this plate (`Error::DuplicatePlate`)
/// - The database insert fails
#[instrument(skip(db))]
pub async fn create_vehicle<C>(
    db: &C,
    plate: &str,
    make: &str,
    model: &str,
    daily_rate: &str,
) -> Result<vehicle::Model>
where
    C: ConnectionTrait,
{
    let plate = plate.trim();
    if plate.is_empty() {
        return Err(Error::validation("Plate cannot be empty"));
    }
    let daily_rate = parse_daily_rate(daily_rate)?;

    if get_vehicle_by_plate(db, plate).await?.is_some() {
        return Err(Error::DuplicatePlate {
            plate: plate.to_string(),
        });
    }

    let vehicle = vehicle::ActiveModel {
        plate: Set(plate.to_string()),
        make: Set(make.trim().to_string()),
        model: Set(model.trim().to_string()),
        daily_rate: Set(daily_rate),
        status: Set(VehicleStatus::Available),
        ..Default::default()
    };

    // The UNIQUE index is the final word if the pre-check raced with another writer
    let created = vehicle.insert(db).await.map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => Error::DuplicatePlate {
            plate: plate.to_string(),
        },
        _ => Error::from(e),
    })?;

    info!(vehicle_id = created.id, plate = %created.plate, "Vehicle registered");
    Ok(created)
}

/// Retrieves a vehicle by its unique ID.
pub async fn get_vehicle_by_id<C>(db: &C, vehicle_id: i64) -> Result<Option<vehicle::Model>>
where
    C: ConnectionTrait,
{
    Vehicle::find_by_id(vehicle_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a vehicle by its exact plate.
pub async fn get_vehicle_by_plate<C>(db: &C, plate: &str) -> Result<Option<vehicle::Model>>
where
    C: ConnectionTrait,
{
    Vehicle::find()
        .filter(vehicle::Column::Plate.eq(plate))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the whole fleet in registration order.
pub async fn get_all_vehicles(db: &DatabaseConnection) -> Result<Vec<vehicle::Model>> {
    Vehicle::find()
        .order_by_asc(vehicle::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the vehicles that can currently be rented, in registration order.
///
/// This is the selection list offered when starting a rental.
pub async fn get_available_vehicles(db: &DatabaseConnection) -> Result<Vec<vehicle::Model>> {
    Vehicle::find()
        .filter(vehicle::Column::Status.eq(VehicleStatus::Available))
        .order_by_asc(vehicle::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Inserts configured vehicles whose plate is not in the fleet yet.
///
/// Existing plates are left untouched, so editing config.toml never rewrites a
/// registered vehicle. All inserts happen in one database transaction.
///
/// # Returns
/// The number of vehicles inserted.
///
/// # Errors
/// Returns an error if any configured entry is invalid (empty plate, negative rate)
/// or the database fails; in that case nothing is inserted.
#[instrument(skip_all, fields(configured = vehicles.len()))]
pub async fn seed_fleet(db: &DatabaseConnection, vehicles: &[VehicleConfig]) -> Result<usize> {
    let txn = db.begin().await?;
    let mut inserted = 0;

    for entry in vehicles {
        if get_vehicle_by_plate(&txn, entry.plate.trim()).await?.is_some() {
            debug!(plate = %entry.plate, "Vehicle already registered, skipping");
            continue;
        }
        create_vehicle(
            &txn,
            &entry.plate,
            &entry.make,
            &entry.model,
            &entry.daily_rate.to_string(),
        )
        .await?;
        inserted += 1;
    }

    txn.commit().await?;
    info!(inserted, "Fleet seeding finished");
    Ok(inserted)
}
