//! Bearer token issuance and verification.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use uuid::Uuid;

use crate::{ISS, jwt::JwtKeys, prelude::*};

/// The identity a bearer token speaks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Principal {
    /// Identifier of the user record.
    pub id: Uuid,
}

impl Principal {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

/// Claims carried by every bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID).
    pub sub: Uuid,
    /// Issued at time.
    pub iat: i64,
    /// Issuer.
    pub iss: String,
}

impl Claims {
    pub fn new(principal: &Principal) -> Self {
        Self {
            sub: principal.id,
            iat: Utc::now().timestamp(),
            iss: String::from(ISS),
        }
    }
}

impl From<&Claims> for Principal {
    fn from(value: &Claims) -> Self {
        Self { id: value.sub }
    }
}

/// Issues a signed token for `principal`.
///
/// # Examples
///
/// ```rust
/// use lineup_auth::{jwt::JwtKeys, token::{Principal, issue, verify}};
/// use uuid::Uuid;
///
/// let keys = JwtKeys::new("MySuperSecret").unwrap();
/// let principal = Principal::new(Uuid::new_v4());
///
/// let token = issue(&keys, &principal).unwrap();
/// assert_eq!(verify(&keys, &token).unwrap(), principal);
/// ```
pub fn issue(keys: &JwtKeys, principal: &Principal) -> Result<String> {
    keys.encode(&Claims::new(principal)).map_err(|err| {
        error!("Failed to encode JWT {err}");
        err
    })
}

/// Verifies `token` and returns the principal it was issued for.
///
/// Every signature, structure or claim failure collapses into
/// [`Error::InvalidCredential`].
pub fn verify(keys: &JwtKeys, token: &str) -> Result<Principal> {
    let data = keys.decode::<Claims>(token).map_err(|err| {
        debug!("Rejected bearer token: {err}");
        Error::InvalidCredential
    })?;
    Ok(Principal::from(&data.claims))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> JwtKeys {
        JwtKeys::new("test-secret").unwrap()
    }

    fn flip_signature(token: &str) -> String {
        let (head, signature) = token.rsplit_once('.').unwrap();
        let mut signature: Vec<char> = signature.chars().collect();
        signature[0] = if signature[0] == 'A' { 'B' } else { 'A' };
        format!("{head}.{}", signature.into_iter().collect::<String>())
    }

    #[test]
    fn issued_token_names_the_principal() {
        let keys = keys();
        let principal = Principal::new(Uuid::new_v4());
        let token = issue(&keys, &principal).unwrap();
        assert!(!token.is_empty());
        assert_eq!(verify(&keys, &token).unwrap().id, principal.id);
    }

    #[test]
    fn claims_carry_issuer() {
        let keys = keys();
        let principal = Principal::new(Uuid::new_v4());
        let token = issue(&keys, &principal).unwrap();
        let claims = keys.decode::<Claims>(&token).unwrap().claims;
        assert_eq!(claims.iss, ISS);
        assert_eq!(claims.sub, principal.id);
    }

    #[test]
    fn tampered_signature_is_invalid() {
        let keys = keys();
        let token = issue(&keys, &Principal::new(Uuid::new_v4())).unwrap();
        let tampered = flip_signature(&token);
        assert_ne!(token, tampered);
        assert!(matches!(
            verify(&keys, &tampered),
            Err(Error::InvalidCredential)
        ));
    }

    #[test]
    fn tampered_payload_is_invalid() {
        let keys = keys();
        let token = issue(&keys, &Principal::new(Uuid::new_v4())).unwrap();
        let other = issue(&keys, &Principal::new(Uuid::new_v4())).unwrap();

        let mut parts: Vec<&str> = token.split('.').collect();
        let other_parts: Vec<&str> = other.split('.').collect();
        parts[1] = other_parts[1];
        let forged = parts.join(".");

        assert!(matches!(verify(&keys, &forged), Err(Error::InvalidCredential)));
    }

    #[test]
    fn garbage_is_invalid() {
        assert!(matches!(
            verify(&keys(), "not.a.token"),
            Err(Error::InvalidCredential)
        ));
    }
}
