/// Database connection and table creation
pub mod database;

/// Settings loading from config.toml
pub mod settings;
