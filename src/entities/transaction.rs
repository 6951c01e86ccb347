//! Transaction entity - One rental of one vehicle.
//!
//! A transaction is created `ACTIVE` when a rental starts, with its `total_cost` fixed
//! at that moment. It is updated exactly once, when the vehicle comes back, recording
//! the `actual_return_date` and any `late_fee`, and becomes `COMPLETED`.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a rental transaction
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum TransactionStatus {
    /// Vehicle is out with the renter
    #[sea_orm(string_value = "ACTIVE")]
    Active,
    /// Vehicle has been returned; terminal
    #[sea_orm(string_value = "COMPLETED")]
    Completed,
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => f.pad("ACTIVE"),
            Self::Completed => f.pad("COMPLETED"),
        }
    }
}

/// Transaction database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    /// Unique identifier for the transaction
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the rented vehicle
    pub vehicle_id: i64,
    /// Name of the customer
    pub renter_name: String,
    /// First day of the rental
    pub start_date: Date,
    /// Day the vehicle is due back
    pub planned_return_date: Date,
    /// `daily_rate × billable days`, fixed when the rental starts
    pub total_cost: i64,
    /// `ACTIVE` until the return is processed, then `COMPLETED`
    #[sea_orm(default_value = "ACTIVE")]
    pub status: TransactionStatus,
    /// Day the vehicle actually came back; `None` while active
    pub actual_return_date: Option<Date>,
    /// Penalty for days past `planned_return_date`; 0 until completion
    #[sea_orm(default_value = 0)]
    pub late_fee: i64,
}

/// Defines relationships between Transaction and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each transaction references one vehicle
    #[sea_orm(
        belongs_to = "super::vehicle::Entity",
        from = "Column::VehicleId",
        to = "super::vehicle::Column::Id"
    )]
    Vehicle,
}

impl Related<super::vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vehicle.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
