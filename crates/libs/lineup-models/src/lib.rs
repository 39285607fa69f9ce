//! Records and storage for the LineUps API.
//!
//! Four record kinds are stored: [`user::User`], [`lineup::LineUp`],
//! [`side::Side`] and [`site::Site`]. Access goes through the traits in
//! [`store`], implemented by the PostgreSQL pool in [`db::connection`] and by
//! the process-local [`memory::MemoryStore`].
//!
//! # Usage
//!
//! ```rust,no_run
//! use lineup_models::{
//!     db::{config::DbConfig, connection::DbConnection},
//!     side::Side,
//!     store::Repository,
//! };
//!
//! let config = DbConfig::from_env().unwrap();
//! let conn = DbConnection::new(&config).unwrap().setup().unwrap();
//!
//! let sides: Vec<Side> = conn.fetch_all().unwrap();
//! println!("Found {} sides", sides.len());
//! ```

pub mod db;
pub mod error;
pub mod lineup;
pub mod memory;
pub mod prelude;
mod schema;
pub mod side;
pub mod site;
pub mod store;
pub mod user;
mod validation;
