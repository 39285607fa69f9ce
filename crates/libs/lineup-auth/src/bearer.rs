//! Gate decision for an incoming `Authorization` header.
//!
//! A request moves from unauthenticated to authenticated only through
//! [`authorize`]. The function is pure: the web layer feeds it the raw header
//! and turns the outcome into either a request extension or a rejection.

use crate::{
    CONNECTION_TOKEN_TYPE,
    jwt::JwtKeys,
    prelude::*,
    token::{Principal, verify},
};

/// Splits a `Bearer <token>` header value into its token.
///
/// Anything that is not exactly a scheme followed by one non-empty token is
/// malformed, including an empty value.
pub fn parse_bearer(value: &str) -> Result<&str> {
    let mut parts = value.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case(CONNECTION_TOKEN_TYPE) => {
            Ok(token)
        }
        _ => Err(Error::MalformedCredential),
    }
}

/// Runs the full check for one request.
///
/// # Examples
///
/// ```rust
/// use lineup_auth::{bearer::authorize, error::Error, jwt::JwtKeys, token::{Principal, issue}};
/// use uuid::Uuid;
///
/// let keys = JwtKeys::new("MySuperSecret").unwrap();
/// let principal = Principal::new(Uuid::new_v4());
/// let header = format!("Bearer {}", issue(&keys, &principal).unwrap());
///
/// assert_eq!(authorize(Some(&header), &keys).unwrap(), principal);
/// assert!(matches!(authorize(None, &keys), Err(Error::MissingCredential)));
/// assert!(matches!(authorize(Some("Bearer "), &keys), Err(Error::MalformedCredential)));
/// ```
pub fn authorize(header: Option<&str>, keys: &JwtKeys) -> Result<Principal> {
    let header = header.ok_or(Error::MissingCredential)?;
    let token = parse_bearer(header)?;
    verify(keys, token)
}
