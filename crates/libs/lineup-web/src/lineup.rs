//! Lineup creation, the one write that depends on who is asking.

use axum::{Json, extract::State, http::StatusCode};
use lineup_models::{
    lineup::{LineUp, LineUpCreate},
    store::Repository,
};
use tracing::info;

use crate::{ctx::Ctx, error::MessageBody, extract::ValidJson, prelude::*, state::AppState};

/// Stores `payload` as owned by the authenticated user.
pub fn create_for(state: &AppState, ctx: &Ctx, mut payload: LineUpCreate) -> Result<LineUp> {
    payload.user_id = Some(ctx.user_id());
    let lineup = Repository::<LineUp>::create(&*state.store, payload)?;
    info!("User {} created lineup {}", ctx.user_id(), lineup.id);
    Ok(lineup)
}

/// `POST /lineup`
#[utoipa::path(
    post,
    path = "/lineup",
    tag = "lineup",
    request_body = LineUpCreate,
    security(("bearerAuth" = [])),
    responses(
        (status = 201, description = "Created, owned by the caller", body = LineUp),
        (status = 400, description = "Malformed or invalid body", body = MessageBody),
        (status = 401, description = "Missing or invalid token", body = MessageBody),
    )
)]
pub async fn create_lineup(
    State(state): State<AppState>,
    ctx: Ctx,
    ValidJson(payload): ValidJson<LineUpCreate>,
) -> Result<(StatusCode, Json<LineUp>)> {
    Ok((StatusCode::CREATED, Json(create_for(&state, &ctx, payload)?)))
}
