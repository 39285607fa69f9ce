//! Route registration.
//!
//! Every route that needs a token gets the gate attached right where it is
//! registered, through [`gated`]. Routes registered without it are public.

use std::path::Path;

use axum::{
    Router, middleware,
    routing::{MethodRouter, get, post, put},
};
use lineup_models::{lineup::LineUp, side::Side, site::Site, user::User};
use tower_cookies::CookieManagerLayer;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    auth::{login, logout},
    lineup::create_lineup,
    mw_auth::mw_require_auth,
    openapi::ApiDoc,
    resource::{create, delete, fetch_all, fetch_one, update},
    state::AppState,
    user::register,
};

/// Composes the gate in front of every method of `route`.
pub fn gated(state: &AppState, route: MethodRouter<AppState>) -> MethodRouter<AppState> {
    route.route_layer(middleware::from_fn_with_state(
        state.clone(),
        mw_require_auth,
    ))
}

/// Builds the whole API.
///
/// The OpenAPI document is served at `/api-docs/openapi.json` and browsed at
/// `/api-docs`. Static files under `assets` are served at `/assets` when given.
pub fn router(state: AppState, assets: Option<&Path>) -> Router {
    let mut app = Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route(
            "/user",
            post(register).merge(gated(&state, get(fetch_all::<User>))),
        )
        .route(
            "/user/{id}",
            gated(
                &state,
                get(fetch_one::<User>)
                    .put(update::<User>)
                    .delete(delete::<User>),
            ),
        )
        .route(
            "/lineup",
            get(fetch_all::<LineUp>).merge(gated(&state, post(create_lineup))),
        )
        .route(
            "/lineup/{id}",
            get(fetch_one::<LineUp>).merge(gated(
                &state,
                put(update::<LineUp>).delete(delete::<LineUp>),
            )),
        )
        .route("/side", get(fetch_all::<Side>).post(create::<Side>))
        .route(
            "/side/{id}",
            get(fetch_one::<Side>)
                .put(update::<Side>)
                .delete(delete::<Side>),
        )
        .route("/site", get(fetch_all::<Site>).post(create::<Site>))
        .route(
            "/site/{id}",
            get(fetch_one::<Site>)
                .put(update::<Site>)
                .delete(delete::<Site>),
        )
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    if let Some(assets) = assets {
        app = app.nest_service("/assets", ServeDir::new(assets));
    }

    app.layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
