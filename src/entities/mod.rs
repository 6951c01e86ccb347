//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod transaction;
pub mod vehicle;

// Re-export specific types to avoid conflicts
pub use transaction::{
    Column as TransactionColumn, Entity as Transaction, Model as TransactionModel,
    TransactionStatus,
};
pub use vehicle::{Column as VehicleColumn, Entity as Vehicle, Model as VehicleModel, VehicleStatus};
