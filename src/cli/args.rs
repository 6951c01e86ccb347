use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Command-line interface of rental-buddy
#[derive(Debug, Parser)]
#[command(name = "rental-buddy")]
#[command(about = "Fleet, rental and late-fee bookkeeping for a small car-rental business", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Operation to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level operations
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage the fleet
    Vehicle {
        /// Fleet operation
        #[command(subcommand)]
        action: VehicleCommand,
    },

    /// Rent an available vehicle
    Rent {
        /// Vehicle id (see `vehicle available`)
        vehicle_id: i64,

        /// Customer name
        #[arg(long)]
        renter: String,

        /// First rental day, YYYY-MM-DD (default: today)
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Planned return day, YYYY-MM-DD (default: the day after start)
        #[arg(long)]
        until: Option<NaiveDate>,
    },

    /// Process the return of a rented vehicle
    Return {
        /// Transaction id (see `active`)
        transaction_id: i64,

        /// Actual return day, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// List rentals awaiting return
    Active,

    /// Show completed rentals with totals
    Report,
}

/// Fleet operations
#[derive(Debug, Subcommand)]
pub enum VehicleCommand {
    /// Register a new vehicle
    Add {
        /// Registration plate
        #[arg(long)]
        plate: String,

        /// Manufacturer
        #[arg(long)]
        make: String,

        /// Model name
        #[arg(long)]
        model: String,

        /// Price per day, whole number in the smallest currency unit
        #[arg(long)]
        daily_rate: String,
    },

    /// List the whole fleet
    List,

    /// List vehicles that can be rented now
    Available,
}
