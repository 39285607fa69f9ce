//! Shared application state.

use std::sync::Arc;

use lineup_auth::{config::AuthConfig, jwt::JwtKeys, secret_hash::SecretHasher};
use lineup_models::store::Store;
use uuid::Uuid;

/// Everything a handler needs, built once at startup.
///
/// The signing keys and hashing costs are fixed here and never read from the
/// environment again while serving requests.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub keys: Arc<JwtKeys>,
    pub hasher: SecretHasher,
    /// Hash of a random throwaway password, verified against when a login
    /// names an unknown email.
    pub dummy_hash: Arc<str>,
}

impl AppState {
    /// Fails when the signing secret is empty or the hashing costs are rejected.
    pub fn new(store: Arc<dyn Store>, config: &AuthConfig) -> lineup_auth::prelude::Result<Self> {
        let keys = JwtKeys::new(&config.jwt_secret)?;
        let hasher = SecretHasher::new(&config.hash)?;
        let dummy_hash = hasher.hash(&Uuid::new_v4().to_string())?;

        Ok(Self {
            store,
            keys: Arc::new(keys),
            hasher,
            dummy_hash: Arc::from(dummy_hash),
        })
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("keys", &self.keys)
            .field("hasher", &self.hasher)
            .finish_non_exhaustive()
    }
}
