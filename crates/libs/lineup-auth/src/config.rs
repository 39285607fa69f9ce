//! Authentication configuration.
//!
//! Values are read once at startup, usually from the environment, and passed
//! by value into [`crate::secret_hash::SecretHasher`] and [`crate::jwt::JwtKeys`].

use std::fmt;

use argon2::Params;

use crate::prelude::*;

pub const JWT_SECRET_VAR: &str = "JWT_SECRET";
pub const HASH_MEMORY_VAR: &str = "HASH_MEMORY_KIB";
pub const HASH_ITERATIONS_VAR: &str = "HASH_ITERATIONS";
pub const HASH_PARALLELISM_VAR: &str = "HASH_PARALLELISM";

/// Argon2 cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashConfig {
    /// Memory cost in KiB.
    pub memory_kib: u32,
    /// Number of passes over memory.
    pub iterations: u32,
    /// Degree of parallelism.
    pub parallelism: u32,
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

/// Process-wide authentication settings.
#[derive(Clone)]
pub struct AuthConfig {
    /// Secret used to sign and verify bearer tokens.
    pub jwt_secret: String,
    pub hash: HashConfig,
}

impl AuthConfig {
    pub fn new(jwt_secret: impl Into<String>, hash: HashConfig) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            hash,
        }
    }

    /// Reads the configuration from environment variables.
    ///
    /// `JWT_SECRET` is required. The hashing cost variables fall back to
    /// [`HashConfig::default`].
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use lineup_auth::config::AuthConfig;
    ///
    /// let config = AuthConfig::from_env().expect("JWT_SECRET must be set");
    /// ```
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup(JWT_SECRET_VAR)
            .filter(|secret| !secret.is_empty())
            .ok_or(Error::MissingSecret)?;

        let defaults = HashConfig::default();
        let hash = HashConfig {
            memory_kib: parse_or(&lookup, HASH_MEMORY_VAR, defaults.memory_kib)?,
            iterations: parse_or(&lookup, HASH_ITERATIONS_VAR, defaults.iterations)?,
            parallelism: parse_or(&lookup, HASH_PARALLELISM_VAR, defaults.parallelism)?,
        };

        Ok(Self { jwt_secret, hash })
    }
}

fn parse_or<F>(lookup: &F, key: &'static str, default: u32) -> Result<u32>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => value.trim().parse().map_err(|_| Error::Config(key)),
        None => Ok(default),
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"REDACTED")
            .field("hash", &self.hash)
            .finish()
    }
}

impl fmt::Display for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "jwt_secret=REDACTED m_cost={} t_cost={} p_cost={}",
            self.hash.memory_kib, self.hash.iterations, self.hash.parallelism
        )
    }
}
