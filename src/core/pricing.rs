//! Rental pricing rules.
//!
//! Pure date arithmetic for billable duration, rental cost and late fees. Nothing in
//! here touches the database.

use crate::errors::{Error, Result};
use chrono::NaiveDate;

/// Late fee per overdue day when the settings file does not override it.
pub const DEFAULT_PENALTY_RATE_PER_DAY: i64 = 50_000;

/// Pricing parameters that stay fixed for the lifetime of a [`super::RentalManager`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RentalPolicy {
    /// Fee charged for each day a vehicle comes back after its planned return date
    pub penalty_rate_per_day: i64,
}

impl Default for RentalPolicy {
    fn default() -> Self {
        Self {
            penalty_rate_per_day: DEFAULT_PENALTY_RATE_PER_DAY,
        }
    }
}

impl RentalPolicy {
    /// Creates a policy with a custom late-fee rate.
    #[must_use]
    pub const fn new(penalty_rate_per_day: i64) -> Self {
        Self {
            penalty_rate_per_day,
        }
    }

    /// Late fee for a vehicle planned back on `planned` and returned on `actual`.
    ///
    /// Returns 0 for early or on-time returns; never negative.
    #[must_use]
    pub fn late_fee(&self, planned: NaiveDate, actual: NaiveDate) -> i64 {
        overdue_days(planned, actual).saturating_mul(self.penalty_rate_per_day)
    }
}

/// Signed number of days from `from` to `to`.
#[must_use]
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Billable days for a rental, never less than one.
#[must_use]
pub fn billable_days(start: NaiveDate, planned_return: NaiveDate) -> i64 {
    days_between(start, planned_return).max(1)
}

/// Days past the planned return date, clamped at zero.
#[must_use]
pub fn overdue_days(planned: NaiveDate, actual: NaiveDate) -> i64 {
    days_between(planned, actual).max(0)
}

/// Total price of a rental: `daily_rate × billable_days`.
///
/// # Errors
/// Returns a validation error if the product does not fit in an `i64`.
pub fn total_cost(daily_rate: i64, start: NaiveDate, planned_return: NaiveDate) -> Result<i64> {
    let days = billable_days(start, planned_return);
    daily_rate
        .checked_mul(days)
        .ok_or_else(|| Error::validation(format!("rental cost overflows for {days} days")))
}
