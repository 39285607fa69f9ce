//! Authentication core for the LineUps API.
//!
//! Provides the three building blocks the web layer composes:
//!
//! - [`secret_hash::SecretHasher`]: salted Argon2 hashing and verification of passwords
//! - [`token`]: bearer token issuance and verification bound to a [`token::Principal`]
//! - [`bearer::authorize`]: the gate decision for a raw `Authorization` header
//!
//! All of them take their secrets and cost parameters from [`config::AuthConfig`],
//! which is built once at startup and handed over at construction time.

pub mod bearer;
pub mod config;
pub mod error;
pub mod jwt;
pub mod prelude;
pub mod secret_hash;
pub mod token;

/// Authentication scheme expected in the `Authorization` header.
pub const CONNECTION_TOKEN_TYPE: &str = "Bearer";
/// Issuer claim stamped on every token.
pub const ISS: &str = "lineups";
