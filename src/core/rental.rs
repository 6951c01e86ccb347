//! Rental lifecycle - starting and completing rentals.
//!
//! These are the only two functions that change a vehicle's status. Each runs inside a
//! single database transaction so the vehicle row and the transaction row always move
//! together: a vehicle is `RENTED` exactly while one `ACTIVE` transaction references it.
//! Both status writes are guarded by the expected current status, and an unexpected
//! row count aborts the whole operation.

use super::pricing::{self, RentalPolicy};
use crate::{
    entities::{Transaction, TransactionStatus, Vehicle, VehicleStatus, transaction, vehicle},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*, sea_query::Expr};
use serde::Serialize;
use tracing::{info, instrument, warn};

/// An active rental joined with the vehicle it holds, for the return selection list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveRental {
    /// Transaction id to pass to [`complete_rental`]
    pub transaction_id: i64,
    /// Rented vehicle id
    pub vehicle_id: i64,
    /// Rented vehicle plate
    pub plate: String,
    /// Customer name
    pub renter_name: String,
    /// Day the vehicle is due back
    pub planned_return_date: NaiveDate,
    /// Current daily rate of the vehicle
    pub daily_rate: i64,
}

/// Starts a rental: records an `ACTIVE` transaction and marks the vehicle `RENTED`.
///
/// The cost is `daily_rate × max(days, 1)` and is fixed here; it is never recomputed.
/// A planned return on or before the start date bills a single day.
///
/// # Arguments
/// * `vehicle_id` - Vehicle to rent; must currently be `AVAILABLE`
/// * `renter_name` - Customer name; must not be blank
/// * `start_date` - First day of the rental
/// * `planned_return_date` - Day the vehicle is due back
///
/// # Errors
/// Returns an error if:
/// - The renter name is blank (`Error::Validation`)
/// - The vehicle does not exist (`Error::VehicleNotFound`)
/// - The vehicle is already rented (`Error::VehicleNotAvailable`)
/// - The database fails; nothing is written in that case
#[instrument(skip(db))]
pub async fn start_rental(
    db: &DatabaseConnection,
    vehicle_id: i64,
    renter_name: &str,
    start_date: NaiveDate,
    planned_return_date: NaiveDate,
) -> Result<transaction::Model> {
    let renter_name = renter_name.trim();
    if renter_name.is_empty() {
        return Err(Error::validation("Renter name cannot be empty"));
    }

    let txn = db.begin().await?;

    let vehicle = Vehicle::find_by_id(vehicle_id)
        .one(&txn)
        .await?
        .ok_or(Error::VehicleNotFound { id: vehicle_id })?;

    if vehicle.status != VehicleStatus::Available {
        return Err(Error::VehicleNotAvailable {
            id: vehicle.id,
            plate: vehicle.plate,
        });
    }

    let total_cost = pricing::total_cost(vehicle.daily_rate, start_date, planned_return_date)?;

    let claimed = Vehicle::update_many()
        .col_expr(vehicle::Column::Status, Expr::value(VehicleStatus::Rented))
        .filter(vehicle::Column::Id.eq(vehicle_id))
        .filter(vehicle::Column::Status.eq(VehicleStatus::Available))
        .exec(&txn)
        .await?;
    if claimed.rows_affected != 1 {
        return Err(Error::VehicleNotAvailable {
            id: vehicle.id,
            plate: vehicle.plate,
        });
    }

    let rental = transaction::ActiveModel {
        vehicle_id: Set(vehicle_id),
        renter_name: Set(renter_name.to_string()),
        start_date: Set(start_date),
        planned_return_date: Set(planned_return_date),
        total_cost: Set(total_cost),
        status: Set(TransactionStatus::Active),
        actual_return_date: Set(None),
        late_fee: Set(0),
        ..Default::default()
    };
    let created = rental.insert(&txn).await?;

    txn.commit().await?;

    info!(
        transaction_id = created.id,
        plate = %vehicle.plate,
        total_cost,
        "Rental started"
    );
    Ok(created)
}

/// Completes a rental: records the return and late fee, and frees the vehicle.
///
/// The late fee is `overdue_days × penalty_rate_per_day` and is 0 for early or
/// on-time returns. The original `total_cost` is kept as is.
///
/// # Errors
/// Returns an error if:
/// - The transaction does not exist (`Error::TransactionNotFound`)
/// - The transaction was already completed (`Error::TransactionNotActive`)
/// - The database fails; nothing is written in that case
#[instrument(skip(db, policy))]
pub async fn complete_rental(
    db: &DatabaseConnection,
    policy: &RentalPolicy,
    transaction_id: i64,
    actual_return_date: NaiveDate,
) -> Result<transaction::Model> {
    let txn = db.begin().await?;

    let rental = Transaction::find_by_id(transaction_id)
        .one(&txn)
        .await?
        .ok_or(Error::TransactionNotFound { id: transaction_id })?;

    if rental.status != TransactionStatus::Active {
        return Err(Error::TransactionNotActive { id: transaction_id });
    }

    let late_fee = policy.late_fee(rental.planned_return_date, actual_return_date);

    let closed = Transaction::update_many()
        .col_expr(
            transaction::Column::Status,
            Expr::value(TransactionStatus::Completed),
        )
        .col_expr(
            transaction::Column::ActualReturnDate,
            Expr::value(actual_return_date),
        )
        .col_expr(transaction::Column::LateFee, Expr::value(late_fee))
        .filter(transaction::Column::Id.eq(transaction_id))
        .filter(transaction::Column::Status.eq(TransactionStatus::Active))
        .exec(&txn)
        .await?;
    if closed.rows_affected != 1 {
        return Err(Error::TransactionNotActive { id: transaction_id });
    }

    let released = Vehicle::update_many()
        .col_expr(vehicle::Column::Status, Expr::value(VehicleStatus::Available))
        .filter(vehicle::Column::Id.eq(rental.vehicle_id))
        .exec(&txn)
        .await?;
    if released.rows_affected != 1 {
        warn!(
            vehicle_id = rental.vehicle_id,
            "Active transaction references a missing vehicle"
        );
        return Err(Error::VehicleNotFound {
            id: rental.vehicle_id,
        });
    }

    let completed = Transaction::find_by_id(transaction_id)
        .one(&txn)
        .await?
        .ok_or(Error::TransactionNotFound { id: transaction_id })?;

    txn.commit().await?;

    info!(
        transaction_id,
        overdue_days = pricing::overdue_days(rental.planned_return_date, actual_return_date),
        late_fee,
        "Rental completed"
    );
    Ok(completed)
}

/// Lists active rentals with their vehicle, oldest first.
///
/// This is the selection list offered when processing a return.
pub async fn get_active_rentals(db: &DatabaseConnection) -> Result<Vec<ActiveRental>> {
    let rows = Transaction::find()
        .filter(transaction::Column::Status.eq(TransactionStatus::Active))
        .order_by_asc(transaction::Column::Id)
        .find_also_related(Vehicle)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .filter_map(|(rental, vehicle)| {
            vehicle.map(|vehicle| ActiveRental {
                transaction_id: rental.id,
                vehicle_id: vehicle.id,
                plate: vehicle.plate,
                renter_name: rental.renter_name,
                planned_return_date: rental.planned_return_date,
                daily_rate: vehicle.daily_rate,
            })
        })
        .collect())
}
