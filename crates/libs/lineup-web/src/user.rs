//! User registration.

use std::fmt;

use axum::{Json, extract::State, http::StatusCode};
use lineup_models::{
    store::Repository,
    user::{User, UserCreate},
};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;
use validator::Validate;

use crate::{error::MessageBody, extract::ValidJson, prelude::*, state::AppState};

/// Registration payload. The password only lives as long as the request.
#[derive(Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct UserPost {
    #[validate(length(min = 1, max = 50))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

impl fmt::Debug for UserPost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPost")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"REDACTED")
            .finish()
    }
}

/// Hashes the password off the async runtime and stores the new user.
pub async fn create_user(state: &AppState, post: UserPost) -> Result<User> {
    let UserPost {
        username,
        email,
        password,
    } = post;

    let hasher = state.hasher.clone();
    let hash = tokio::task::spawn_blocking(move || hasher.hash(&password)).await??;

    let user = Repository::<User>::create(
        &*state.store,
        UserCreate {
            username,
            email,
            hash,
        },
    )?;
    info!("Registered user {}", user.id);
    Ok(user)
}

/// `POST /user`
#[utoipa::path(
    post,
    path = "/user",
    tag = "user",
    request_body = UserPost,
    responses(
        (status = 201, description = "Registered", body = User),
        (status = 400, description = "Malformed or invalid body", body = MessageBody),
        (status = 409, description = "Email already registered", body = MessageBody),
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<UserPost>,
) -> Result<(StatusCode, Json<User>)> {
    let user = create_user(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}
