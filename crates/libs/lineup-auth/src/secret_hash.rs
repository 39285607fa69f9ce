//! Password hashing and verification using Argon2id.
//!
//! Hashes are produced as PHC strings, which carry the algorithm, cost
//! parameters and salt alongside the digest. Verification reads all of that
//! back from the stored string, so hashes created under an older cost setting
//! keep verifying after the configuration changes.
//!
//! # Examples
//!
//! ```rust
//! use lineup_auth::{config::HashConfig, secret_hash::SecretHasher};
//!
//! let hasher = SecretHasher::new(&HashConfig::default()).unwrap();
//! let hash = hasher.hash("user_password_123").unwrap();
//!
//! assert!(hasher.verify("user_password_123", &hash).unwrap());
//! assert!(!hasher.verify("wrong_password", &hash).unwrap());
//! ```

use argon2::{
    Algorithm, Argon2, Params, PasswordHasher, PasswordVerifier, Version,
    password_hash::{PasswordHashString, SaltString},
};
use rand::rngs::OsRng;

use crate::{config::HashConfig, prelude::*};

/// Argon2id hasher bound to a fixed set of cost parameters.
#[derive(Debug, Clone)]
pub struct SecretHasher {
    params: Params,
}

impl SecretHasher {
    /// Creates a hasher for the given cost parameters.
    ///
    /// Fails if the parameters are outside of what Argon2 accepts.
    pub fn new(config: &HashConfig) -> Result<Self> {
        let params = Params::new(
            config.memory_kib,
            config.iterations,
            config.parallelism,
            None,
        )?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hashes `pw` with a freshly generated random salt.
    ///
    /// Two calls with the same password return different strings.
    pub fn hash(&self, pw: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        Ok(self
            .argon2()
            .hash_password(pw.as_bytes(), &salt)?
            .to_string())
    }

    /// Checks `pw` against a stored PHC hash string.
    ///
    /// A wrong password is `Ok(false)`. Only a stored hash that cannot be
    /// parsed is reported as an error.
    pub fn verify(&self, pw: &str, hash: &str) -> Result<bool> {
        let hash = PasswordHashString::new(hash)?;
        Ok(self
            .argon2()
            .verify_password(pw.as_bytes(), &hash.password_hash())
            .is_ok())
    }
}
