//! Request context for authenticated handlers.

use axum::{extract::FromRequestParts, http::request::Parts};
use lineup_auth::token::Principal;
use uuid::Uuid;

use crate::prelude::*;

/// The principal admitted by the gate for the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ctx {
    pub principal: Principal,
}

impl Ctx {
    pub fn new(principal: Principal) -> Self {
        Self { principal }
    }

    /// Identifier of the authenticated user.
    pub fn user_id(&self) -> Uuid {
        self.principal.id
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Ctx {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        parts
            .extensions
            .get::<Ctx>()
            .copied()
            .ok_or(Error::CtxMissing)
    }
}
