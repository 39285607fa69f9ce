//! JWT signing and verification.
//!
//! [`JwtKeys`] owns the HS256 key pair derived from the configured secret.
//! Tokens issued here carry no `exp` claim, so decoding does not require or
//! check one: a token stays valid for as long as the secret that signed it.
//!
//! # Examples
//!
//! ```rust
//! use lineup_auth::jwt::JwtKeys;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
//! struct UserClaims {
//!     user_id: String,
//! }
//!
//! let keys = JwtKeys::new("MySuperSecret").unwrap();
//! let claims = UserClaims { user_id: "admin".to_string() };
//!
//! let token = keys.encode(&claims).unwrap();
//! let decoded = keys.decode::<UserClaims>(&token).unwrap();
//! assert_eq!(claims, decoded.claims);
//! ```

use std::fmt;

use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode,
};
use serde::{Serialize, de::DeserializeOwned};

use crate::prelude::*;

/// JWT signing algorithm used for every token.
const ALGORITHM: Algorithm = Algorithm::HS256;

/// Cryptographic key pair for JWT signing and verification.
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl JwtKeys {
    /// Builds the key pair from the signing secret.
    ///
    /// An empty secret is refused: the server must not start without one.
    pub fn new(secret: &str) -> Result<Self> {
        if secret.is_empty() {
            return Err(Error::MissingSecret);
        }

        let mut validation = Validation::new(ALGORITHM);
        validation.required_spec_claims.clear();
        validation.validate_exp = false;

        Ok(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        })
    }

    /// Serializes and signs `body`.
    pub fn encode<T>(&self, body: &T) -> Result<String>
    where
        T: Serialize,
    {
        let header = Header::new(ALGORITHM);
        Ok(encode(&header, body, &self.encoding)?)
    }

    /// Verifies the signature of `token` and deserializes its claims.
    pub fn decode<T>(&self, token: &str) -> Result<TokenData<T>>
    where
        T: DeserializeOwned,
    {
        Ok(decode(token, &self.decoding, &self.validation)?)
    }
}

impl fmt::Debug for JwtKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtKeys")
            .field("algorithm", &ALGORITHM)
            .finish_non_exhaustive()
    }
}
