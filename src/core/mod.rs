//! Core business logic - framework-agnostic fleet, rental and reporting operations.
//!
//! [`RentalManager`] bundles the store handle with the pricing policy so the
//! presentation layer has a single object to call. The free functions in the
//! submodules remain available for callers that already hold a connection.

/// Rental pricing rules (duration, cost, late fees)
pub mod pricing;
/// Rental lifecycle: start and complete
pub mod rental;
/// Completed-rental reporting
pub mod report;
/// Fleet registration and lookups
pub mod vehicle;

pub use pricing::RentalPolicy;
pub use rental::ActiveRental;
pub use report::{CompletedRental, ReportSummary};

use crate::{
    config::settings::VehicleConfig,
    entities::{TransactionModel, VehicleModel},
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

/// Entry point for every lifecycle operation.
///
/// Holds the database connection it was constructed with and nothing else; there is no
/// global state.
#[derive(Debug)]
pub struct RentalManager {
    db: DatabaseConnection,
    policy: RentalPolicy,
}

impl RentalManager {
    /// Creates a manager over an already-initialised database.
    #[must_use]
    pub const fn new(db: DatabaseConnection, policy: RentalPolicy) -> Self {
        Self { db, policy }
    }

    /// Registers a new vehicle. See [`vehicle::create_vehicle`].
    pub async fn create_vehicle(
        &self,
        plate: &str,
        make: &str,
        model: &str,
        daily_rate: &str,
    ) -> Result<VehicleModel> {
        vehicle::create_vehicle(&self.db, plate, make, model, daily_rate).await
    }

    /// Starts a rental. See [`rental::start_rental`].
    pub async fn start_rental(
        &self,
        vehicle_id: i64,
        renter_name: &str,
        start_date: NaiveDate,
        planned_return_date: NaiveDate,
    ) -> Result<TransactionModel> {
        rental::start_rental(
            &self.db,
            vehicle_id,
            renter_name,
            start_date,
            planned_return_date,
        )
        .await
    }

    /// Completes a rental. See [`rental::complete_rental`].
    pub async fn complete_rental(
        &self,
        transaction_id: i64,
        actual_return_date: NaiveDate,
    ) -> Result<TransactionModel> {
        rental::complete_rental(&self.db, &self.policy, transaction_id, actual_return_date).await
    }

    /// Completed rentals joined with their plate.
    pub async fn completed_rentals(&self) -> Result<Vec<CompletedRental>> {
        report::get_completed_rentals(&self.db).await
    }

    /// The whole fleet.
    pub async fn vehicles(&self) -> Result<Vec<VehicleModel>> {
        vehicle::get_all_vehicles(&self.db).await
    }

    /// Vehicles that can be rented right now.
    pub async fn available_vehicles(&self) -> Result<Vec<VehicleModel>> {
        vehicle::get_available_vehicles(&self.db).await
    }

    /// Rentals awaiting return.
    pub async fn active_rentals(&self) -> Result<Vec<ActiveRental>> {
        rental::get_active_rentals(&self.db).await
    }

    /// Inserts configured vehicles that are not registered yet.
    pub async fn seed_fleet(&self, vehicles: &[VehicleConfig]) -> Result<usize> {
        vehicle::seed_fleet(&self.db, vehicles).await
    }
}
