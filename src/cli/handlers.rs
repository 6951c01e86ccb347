//! Command handlers - call into [`RentalManager`] and render the outcome as text.
//!
//! Handlers never print; they return the message so `main` decides where it goes and
//! tests can assert on it.

use super::args::{Commands, VehicleCommand};
use crate::{
    core::{ActiveRental, CompletedRental, RentalManager, pricing, report},
    entities::VehicleModel,
    errors::Result,
};
use chrono::{Days, NaiveDate};
use std::fmt::Write;

/// Runs one command and returns the text to show the operator.
///
/// `today` is passed in rather than read from the clock so defaults are testable.
///
/// # Errors
/// Propagates any lifecycle error unchanged; rendering it is left to the caller.
pub async fn run(manager: &RentalManager, command: Commands, today: NaiveDate) -> Result<String> {
    match command {
        Commands::Vehicle { action } => run_vehicle(manager, action).await,
        Commands::Rent {
            vehicle_id,
            renter,
            start,
            until,
        } => {
            let start = start.unwrap_or(today);
            let until = until.unwrap_or_else(|| start.checked_add_days(Days::new(1)).unwrap_or(start));
            rent(manager, vehicle_id, &renter, start, until).await
        }
        Commands::Return {
            transaction_id,
            date,
        } => return_vehicle(manager, transaction_id, date.unwrap_or(today)).await,
        Commands::Active => Ok(format_active_rentals(&manager.active_rentals().await?)),
        Commands::Report => Ok(format_report(&manager.completed_rentals().await?)),
    }
}

async fn run_vehicle(manager: &RentalManager, action: VehicleCommand) -> Result<String> {
    match action {
        VehicleCommand::Add {
            plate,
            make,
            model,
            daily_rate,
        } => {
            let vehicle = manager
                .create_vehicle(&plate, &make, &model, &daily_rate)
                .await?;
            Ok(format!(
                "✅ Added {} {} ({}) at {}/day - Vehicle ID: {}",
                vehicle.make, vehicle.model, vehicle.plate, vehicle.daily_rate, vehicle.id
            ))
        }
        VehicleCommand::List => Ok(format_vehicles(&manager.vehicles().await?)),
        VehicleCommand::Available => {
            let available = manager.available_vehicles().await?;
            if available.is_empty() {
                return Ok("No vehicles available for rental.".to_string());
            }
            Ok(format_vehicles(&available))
        }
    }
}

async fn rent(
    manager: &RentalManager,
    vehicle_id: i64,
    renter: &str,
    start: NaiveDate,
    until: NaiveDate,
) -> Result<String> {
    let rental = manager.start_rental(vehicle_id, renter, start, until).await?;
    Ok(format!(
        "✅ Rental confirmed for {} - {} to {} ({} day(s)), total {} (Transaction ID: {})",
        rental.renter_name,
        rental.start_date,
        rental.planned_return_date,
        pricing::billable_days(rental.start_date, rental.planned_return_date),
        rental.total_cost,
        rental.id
    ))
}

async fn return_vehicle(
    manager: &RentalManager,
    transaction_id: i64,
    actual: NaiveDate,
) -> Result<String> {
    let rental = manager.complete_rental(transaction_id, actual).await?;
    let overdue = pricing::overdue_days(rental.planned_return_date, actual);
    if overdue == 0 {
        return Ok(format!(
            "✅ Transaction {} completed on time. Late fee: 0",
            rental.id
        ));
    }
    Ok(format!(
        "✅ Transaction {} completed {} day(s) late. Late fee: {}",
        rental.id, overdue, rental.late_fee
    ))
}

/// Renders vehicles as a fixed-width table.
#[must_use]
pub fn format_vehicles(vehicles: &[VehicleModel]) -> String {
    if vehicles.is_empty() {
        return "The fleet is empty. Use `vehicle add` to register a vehicle.".to_string();
    }

    let mut out = format!(
        "{:<4} {:<12} {:<20} {:>12} {:<9}\n",
        "ID", "Plate", "Vehicle", "Rate/day", "Status"
    );
    for v in vehicles {
        // write! to a String cannot fail
        let _ = writeln!(
            out,
            "{:<4} {:<12} {:<20} {:>12} {:<9}",
            v.id,
            v.plate,
            format!("{} {}", v.make, v.model),
            v.daily_rate,
            v.status
        );
    }
    out
}

/// Renders the return selection list.
#[must_use]
pub fn format_active_rentals(rentals: &[ActiveRental]) -> String {
    if rentals.is_empty() {
        return "No active rentals.".to_string();
    }

    let mut out = String::new();
    for r in rentals {
        let _ = writeln!(
            out,
            "#{} {} - {} (Deadline: {})",
            r.transaction_id, r.plate, r.renter_name, r.planned_return_date
        );
    }
    out
}

/// Renders completed rentals followed by their totals.
#[must_use]
pub fn format_report(rentals: &[CompletedRental]) -> String {
    if rentals.is_empty() {
        return "No completed rentals yet.".to_string();
    }

    let mut out = format!(
        "{:<20} {:<12} {:<10} {:>12} {:>10}\n",
        "Renter", "Vehicle", "Start", "Cost", "Late fee"
    );
    for r in rentals {
        let _ = writeln!(
            out,
            "{:<20} {:<12} {:<10} {:>12} {:>10}",
            r.renter_name, r.plate, r.start_date, r.total_cost, r.late_fee
        );
    }

    let summary = report::summarize(rentals);
    let _ = write!(
        out,
        "\n{} completed rental(s) | Revenue: {} | Late fees: {} | Total: {}",
        summary.rentals,
        summary.rental_revenue,
        summary.late_fees,
        summary.grand_total()
    );
    out
}
