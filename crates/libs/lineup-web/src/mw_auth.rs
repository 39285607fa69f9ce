//! Gate middleware for routes that require a bearer token.
//!
//! The gate is composed onto a route with `route_layer` when the route is
//! registered, so a rejected request never reaches the handler or the store.
//!
//! # Examples
//!
//! ```rust,no_run
//! use axum::{Router, middleware, routing::put};
//! use lineup_web::{mw_auth::mw_require_auth, state::AppState};
//!
//! fn gated(state: AppState) -> Router {
//!     Router::new()
//!         .route("/protected", put(protected_handler))
//!         .route_layer(middleware::from_fn_with_state(state.clone(), mw_require_auth))
//!         .with_state(state)
//! }
//!
//! async fn protected_handler() -> &'static str {
//!     "This requires authentication"
//! }
//! ```

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use lineup_auth::{bearer::authorize, error::Error as AuthError, jwt::JwtKeys, token};
use tower_cookies::{Cookie, Cookies};

use crate::{ctx::Ctx, prelude::*, state::AppState};

/// Name of the cookie that carries the raw token for browser clients.
pub const AUTH_TOKEN_COOKIE: &str = "token";

/// Decides whether a request is admitted.
///
/// The `Authorization` header always wins. The cookie is only consulted when
/// the header is absent, so a present but broken header is never rescued by
/// a cookie.
pub fn resolve(
    headers: &HeaderMap,
    cookie_token: Option<&str>,
    keys: &JwtKeys,
) -> lineup_auth::prelude::Result<Ctx> {
    let principal = match headers.get(AUTHORIZATION) {
        Some(value) => {
            let value = value
                .to_str()
                .map_err(|_| AuthError::MalformedCredential)?;
            authorize(Some(value), keys)?
        }
        None => match cookie_token {
            Some(raw) => token::verify(keys, raw)?,
            None => authorize(None, keys)?,
        },
    };
    Ok(Ctx::new(principal))
}

/// Middleware that admits a request only with a valid bearer token.
///
/// On success the [`Ctx`] is inserted into the request extensions.
pub async fn mw_require_auth(
    State(state): State<AppState>,
    cookies: Cookies,
    mut req: Request,
    next: Next,
) -> Result<Response> {
    let cookie = cookies.get(AUTH_TOKEN_COOKIE);
    let ctx = match resolve(req.headers(), cookie.as_ref().map(|c| c.value()), &state.keys) {
        Ok(ctx) => ctx,
        Err(err) => {
            if cookie_was_presented(req.headers(), cookie.is_some()) {
                cookies.remove(removal_cookie());
            }
            return Err(err.into());
        }
    };

    req.extensions_mut().insert(ctx);
    Ok(next.run(req).await)
}

/// Whether [`resolve`] judged the cookie rather than the header.
fn cookie_was_presented(headers: &HeaderMap, has_cookie: bool) -> bool {
    has_cookie && !headers.contains_key(AUTHORIZATION)
}

pub(crate) fn removal_cookie() -> Cookie<'static> {
    Cookie::build((AUTH_TOKEN_COOKIE, "")).path("/").build()
}
