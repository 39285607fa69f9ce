//! Login and logout.

use std::fmt;

use axum::{
    Json,
    extract::State,
    http::header::AUTHORIZATION,
    response::IntoResponse,
};
use lineup_auth::{
    CONNECTION_TOKEN_TYPE,
    token::{Principal, issue},
};
use lineup_models::{error::Error as ModelsError, user::User};
use serde::{Deserialize, Serialize};
use tower_cookies::{Cookie, Cookies};
use tracing::info;
use utoipa::ToSchema;

use crate::{
    error::MessageBody,
    extract::JsonBody,
    mw_auth::{AUTH_TOKEN_COOKIE, removal_cookie},
    prelude::*,
    state::AppState,
};

pub const LOGGED_OUT: &str = "Logged out";

/// Login payload.
///
/// Carries no validation rules: an empty or missing field is just another
/// pair that fails [`authenticate`].
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"REDACTED")
            .finish()
    }
}

/// Body of a successful login.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub user: User,
    pub auth: bool,
    pub token: String,
}

/// Checks an email and password pair against the store.
///
/// An unknown email and a wrong password both end in
/// [`Error::WrongCredentials`]. When the email is unknown the password is
/// still verified, against [`AppState::dummy_hash`], so both paths do the
/// same amount of work.
pub async fn authenticate(state: &AppState, request: LoginRequest) -> Result<User> {
    let LoginRequest { email, password } = request;

    let user = match state.store.fetch_by_email(&email) {
        Ok(user) => Some(user),
        Err(ModelsError::NotFound) => None,
        Err(err) => return Err(err.into()),
    };

    let hash = match &user {
        Some(user) => user.hash.clone(),
        None => String::from(&*state.dummy_hash),
    };
    let hasher = state.hasher.clone();
    let valid = tokio::task::spawn_blocking(move || hasher.verify(&password, &hash)).await??;

    match user {
        Some(user) if valid => Ok(user),
        _ => Err(Error::WrongCredentials),
    }
}

/// `POST /login`
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in, token also set as a cookie", body = LoginResponse),
        (status = 400, description = "Malformed body", body = MessageBody),
        (status = 401, description = "Invalid email or password", body = MessageBody),
    )
)]
pub async fn login(
    State(state): State<AppState>,
    cookies: Cookies,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> Result<impl IntoResponse> {
    let user = authenticate(&state, payload).await?;
    let token = issue(&state.keys, &Principal::new(user.id))?;

    cookies.add(
        Cookie::build((AUTH_TOKEN_COOKIE, token.clone()))
            .path("/")
            .http_only(true)
            .build(),
    );
    info!("User {} logged in", user.id);

    Ok((
        [(AUTHORIZATION, format!("{CONNECTION_TOKEN_TYPE} {token}"))],
        Json(LoginResponse {
            user,
            auth: true,
            token,
        }),
    ))
}

/// `POST /logout`
///
/// Only drops the cookie. Issued tokens stay valid.
#[utoipa::path(
    post,
    path = "/logout",
    tag = "auth",
    responses((status = 200, description = "Cookie dropped", body = MessageBody))
)]
pub async fn logout(cookies: Cookies) -> Json<MessageBody> {
    cookies.remove(removal_cookie());
    Json(MessageBody::new(LOGGED_OUT))
}
