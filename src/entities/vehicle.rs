//! Vehicle entity - One car in the rental fleet.
//!
//! Each vehicle has a unique plate, descriptive make and model, a daily rate in the
//! smallest currency unit, and an availability status that only the rental lifecycle
//! changes.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Availability of a vehicle
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum VehicleStatus {
    /// Can be rented
    #[sea_orm(string_value = "AVAILABLE")]
    Available,
    /// Currently out on an active rental
    #[sea_orm(string_value = "RENTED")]
    Rented,
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Available => f.pad("AVAILABLE"),
            Self::Rented => f.pad("RENTED"),
        }
    }
}

/// Vehicle database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vehicles")]
pub struct Model {
    /// Unique identifier for the vehicle
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Registration plate, unique across the fleet
    #[sea_orm(unique)]
    pub plate: String,
    /// Manufacturer (e.g., "Toyota")
    pub make: String,
    /// Model name (e.g., "Avanza")
    pub model: String,
    /// Price per rental day in the smallest currency unit
    pub daily_rate: i64,
    /// Whether the vehicle is available or rented out
    #[sea_orm(default_value = "AVAILABLE")]
    pub status: VehicleStatus,
}

/// Defines relationships between Vehicle and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One vehicle has many rental transactions over its lifetime
    #[sea_orm(has_many = "super::transaction::Entity")]
    Transactions,
}

impl Related<super::transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
