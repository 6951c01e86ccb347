//! Report generation business logic.
//!
//! The report is a read-only projection of completed rentals joined with their
//! vehicle's plate, plus simple totals. Formatting for display lives in the CLI layer.

use crate::{
    entities::{Transaction, TransactionStatus, Vehicle, transaction},
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, prelude::*};
use serde::Serialize;

/// One completed rental as shown in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletedRental {
    /// Transaction id
    pub transaction_id: i64,
    /// Customer name
    pub renter_name: String,
    /// Plate of the rented vehicle
    pub plate: String,
    /// First day of the rental
    pub start_date: NaiveDate,
    /// Day the vehicle came back
    pub actual_return_date: Option<NaiveDate>,
    /// Rental price fixed at start
    pub total_cost: i64,
    /// Penalty charged on return
    pub late_fee: i64,
}

/// Totals over a set of completed rentals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    /// Number of completed rentals
    pub rentals: usize,
    /// Sum of rental prices
    pub rental_revenue: i64,
    /// Sum of late fees
    pub late_fees: i64,
}

impl ReportSummary {
    /// Rental revenue plus late fees.
    #[must_use]
    pub const fn grand_total(&self) -> i64 {
        self.rental_revenue.saturating_add(self.late_fees)
    }
}

/// Lists every `COMPLETED` transaction with its vehicle's plate, oldest first.
///
/// Active rentals never appear here.
pub async fn get_completed_rentals(db: &DatabaseConnection) -> Result<Vec<CompletedRental>> {
    let rows = Transaction::find()
        .filter(transaction::Column::Status.eq(TransactionStatus::Completed))
        .order_by_asc(transaction::Column::Id)
        .find_also_related(Vehicle)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .filter_map(|(rental, vehicle)| {
            vehicle.map(|vehicle| CompletedRental {
                transaction_id: rental.id,
                renter_name: rental.renter_name,
                plate: vehicle.plate,
                start_date: rental.start_date,
                actual_return_date: rental.actual_return_date,
                total_cost: rental.total_cost,
                late_fee: rental.late_fee,
            })
        })
        .collect())
}

/// Sums revenue and late fees over completed rentals.
#[must_use]
pub fn summarize(rentals: &[CompletedRental]) -> ReportSummary {
    rentals
        .iter()
        .fold(ReportSummary::default(), |acc, rental| ReportSummary {
            rentals: acc.rentals + 1,
            rental_revenue: acc.rental_revenue.saturating_add(rental.total_cost),
            late_fees: acc.late_fees.saturating_add(rental.late_fee),
        })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::pricing::RentalPolicy;
    use crate::core::rental::{complete_rental, start_rental};
    use crate::test_utils::*;
    use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

    #[tokio::test]
    async fn test_report_empty() -> Result<()> {
        let db = setup_test_db().await?;
        let report = get_completed_rentals(&db).await?;
        assert!(report.is_empty());
        assert_eq!(summarize(&report), ReportSummary::default());
        Ok(())
    }

    #[tokio::test]
    async fn test_report_excludes_active_rentals() -> Result<()> {
        let db = setup_test_db().await?;
        let returned = create_custom_vehicle(&db, "B 1234 XY", 300_000).await?;
        let still_out = create_test_vehicle(&db, "D 42 AB").await?;

        let done = start_rental(&db, returned.id, "Fikri", date(2024, 1, 1), date(2024, 1, 4)).await?;
        let active = create_test_rental(&db, still_out.id).await?;
        complete_rental(&db, &RentalPolicy::new(50_000), done.id, date(2024, 1, 7)).await?;

        let report = get_completed_rentals(&db).await?;
        assert_eq!(
            report,
            vec![CompletedRental {
                transaction_id: done.id,
                renter_name: "Fikri".to_string(),
                plate: "B 1234 XY".to_string(),
                start_date: date(2024, 1, 1),
                actual_return_date: Some(date(2024, 1, 7)),
                total_cost: 900_000,
                late_fee: 150_000,
            }]
        );
        assert!(report.iter().all(|r| r.transaction_id != active.id));

        Ok(())
    }

    #[tokio::test]
    async fn test_report_skips_rows_without_vehicle() -> Result<()> {
        let (db, vehicle) = setup_with_vehicle().await?;
        let rental = create_test_rental(&db, vehicle.id).await?;
        complete_rental(&db, &RentalPolicy::default(), rental.id, date(2024, 1, 4)).await?;

        // A completed row pointing at no vehicle, only possible with foreign keys off
        db.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            "PRAGMA foreign_keys = OFF",
        ))
        .await?;
        db.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            "INSERT INTO transactions \
             (vehicle_id, renter_name, start_date, planned_return_date, total_cost, status, actual_return_date, late_fee) \
             VALUES (999, 'Ghost', '2024-01-01', '2024-01-02', 1, 'COMPLETED', '2024-01-02', 0)",
        ))
        .await?;

        let report = get_completed_rentals(&db).await?;
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].transaction_id, rental.id);
        assert!(report.iter().all(|r| r.renter_name != "Ghost"));

        Ok(())
    }

    #[test]
    fn test_summarize() {
        let row = |total_cost, late_fee| CompletedRental {
            transaction_id: 1,
            renter_name: "Fikri".to_string(),
            plate: "B 1 A".to_string(),
            start_date: date(2024, 1, 1),
            actual_return_date: Some(date(2024, 1, 2)),
            total_cost,
            late_fee,
        };

        let summary = summarize(&[row(900_000, 150_000), row(300_000, 0)]);
        assert_eq!(summary.rentals, 2);
        assert_eq!(summary.rental_revenue, 1_200_000);
        assert_eq!(summary.late_fees, 150_000);
        assert_eq!(summary.grand_total(), 1_350_000);
    }
}
