//! HTTP layer of the LineUps API.
//!
//! Provides the bearer gate, the login/logout endpoints, the CRUD handlers
//! for every stored record, the OpenAPI document and the [`router::router`]
//! that wires them up.

pub mod auth;
pub mod ctx;
pub mod error;
pub mod extract;
pub mod lineup;
pub mod mw_auth;
pub mod openapi;
pub mod prelude;
pub mod resource;
pub mod router;
pub mod state;
pub mod user;
