//! PostgreSQL connection management.

pub mod config;
pub mod connection;
