//! CRUD handlers shared by every stored record kind.
//!
//! Each handler is one store call between request parsing and response
//! serialization. The record kind is picked at route registration, e.g.
//! `get(fetch_all::<Side>)`.

use axum::{Json, extract::State, http::StatusCode};
use lineup_models::store::{Record, Repository, Store};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;
use validator::Validate;

use crate::{
    extract::{IdPath, ValidJson},
    prelude::*,
    state::AppState,
};

pub async fn fetch_all<T>(State(state): State<AppState>) -> Result<Json<Vec<T>>>
where
    T: Record + Serialize,
    dyn Store: Repository<T>,
{
    Ok(Json(Repository::<T>::fetch_all(&*state.store)?))
}

pub async fn fetch_one<T>(State(state): State<AppState>, IdPath(id): IdPath) -> Result<Json<T>>
where
    T: Record + Serialize,
    dyn Store: Repository<T>,
{
    Ok(Json(Repository::<T>::fetch_by_id(&*state.store, &id)?))
}

pub async fn create<T>(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<T::Create>,
) -> Result<(StatusCode, Json<T>)>
where
    T: Record + Serialize,
    T::Create: DeserializeOwned + Validate,
    dyn Store: Repository<T>,
{
    let item = Repository::<T>::create(&*state.store, payload)?;
    debug!("Created {} {}", T::NAME, item.id());
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn update<T>(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidJson(patch): ValidJson<T::Patch>,
) -> Result<Json<T>>
where
    T: Record + Serialize,
    T::Patch: DeserializeOwned + Validate,
    dyn Store: Repository<T>,
{
    let item = Repository::<T>::update(&*state.store, &id, patch)?;
    debug!("Updated {} {}", T::NAME, id);
    Ok(Json(item))
}

pub async fn delete<T>(State(state): State<AppState>, IdPath(id): IdPath) -> Result<StatusCode>
where
    T: Record,
    dyn Store: Repository<T>,
{
    Repository::<T>::delete(&*state.store, &id)?;
    debug!("Deleted {} {}", T::NAME, id);
    Ok(StatusCode::NO_CONTENT)
}
