use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::Json;
use serde::Serialize;
use std::sync::Arc;

use crate::api::crud;
use crate::api::error::ApiError;
use crate::model::Entity;
use crate::store::traits::EntityStore;

pub type AppState<S> = Arc<S>;

const APPLICATION_NAME: &str = "workforceApi";

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

// Change-notification headers acknowledging a completed mutation; carried on
// every create/update/delete response for observability and audit consumers.
fn alert_headers(entity: &str, action: &str, id: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    let alert = format!("{}.{}.{}", APPLICATION_NAME, entity, action);
    if let Ok(value) = HeaderValue::from_str(&alert) {
        headers.insert(HeaderName::from_static("x-workforceapi-alert"), value);
    }
    if let Ok(value) = HeaderValue::from_str(id) {
        headers.insert(HeaderName::from_static("x-workforceapi-params"), value);
    }
    headers
}

/// POST /api/{plural} : create a new record. 400 when the body already
/// carries an identity; 201 with a Location reference otherwise.
pub async fn create<T, S>(
    State(store): State<AppState<S>>,
    Json(entity): Json<T>,
) -> Result<(StatusCode, HeaderMap, Json<T>), ApiError>
where
    T: Entity,
    S: EntityStore<T>,
{
    log::debug!("REST request to save {} : {:?}", T::ENTITY_NAME, entity);
    let entity = crud::create(&*store, entity).await?;
    let id = entity
        .id()
        .ok_or_else(|| anyhow::anyhow!("store returned a {} without an identity", T::ENTITY_NAME))?
        .to_string();

    let mut headers = alert_headers(T::ENTITY_NAME, "created", &id);
    let location = format!("/api/{}/{}", T::PLURAL, id);
    if let Ok(value) = HeaderValue::from_str(&location) {
        headers.insert(header::LOCATION, value);
    }
    Ok((StatusCode::CREATED, headers, Json(entity)))
}

/// PUT /api/{plural}/{id} : full update of an existing record.
pub async fn update<T, S>(
    State(store): State<AppState<S>>,
    Path(id): Path<T::Key>,
    Json(entity): Json<T>,
) -> Result<(HeaderMap, Json<T>), ApiError>
where
    T: Entity,
    S: EntityStore<T>,
{
    log::debug!(
        "REST request to update {} : {}, {:?}",
        T::ENTITY_NAME,
        id,
        entity
    );
    let entity = crud::update(&*store, &id, entity).await?;
    let headers = alert_headers(T::ENTITY_NAME, "updated", &id.to_string());
    Ok((headers, Json(entity)))
}

/// PATCH /api/{plural}/{id} : partial update; null fields in the body leave
/// the stored attribute unchanged.
pub async fn partial_update<T, S>(
    State(store): State<AppState<S>>,
    Path(id): Path<T::Key>,
    Json(patch): Json<T>,
) -> Result<(HeaderMap, Json<T>), ApiError>
where
    T: Entity,
    S: EntityStore<T>,
{
    log::debug!(
        "REST request to partial update {} : {}, {:?}",
        T::ENTITY_NAME,
        id,
        patch
    );
    let entity = crud::partial_update(&*store, &id, patch).await?;
    let headers = alert_headers(T::ENTITY_NAME, "updated", &id.to_string());
    Ok((headers, Json(entity)))
}

/// GET /api/{plural} : all records.
pub async fn get_all<T, S>(State(store): State<AppState<S>>) -> Result<Json<Vec<T>>, ApiError>
where
    T: Entity,
    S: EntityStore<T>,
{
    log::debug!("REST request to get all {}", T::PLURAL);
    Ok(Json(crud::get_all(&*store).await?))
}

/// GET /api/{plural}/{id} : one record, or 404 when the id is absent.
pub async fn get_one<T, S>(
    State(store): State<AppState<S>>,
    Path(id): Path<T::Key>,
) -> Result<Json<T>, ApiError>
where
    T: Entity,
    S: EntityStore<T>,
{
    log::debug!("REST request to get {} : {}", T::ENTITY_NAME, id);
    match crud::get_one(&*store, &id).await? {
        Some(entity) => Ok(Json(entity)),
        None => Err(ApiError::not_found(T::ENTITY_NAME)),
    }
}

/// DELETE /api/{plural}/{id} : remove by identity; repeating the call after
/// success yields the same 204.
pub async fn delete<T, S>(
    State(store): State<AppState<S>>,
    Path(id): Path<T::Key>,
) -> Result<(StatusCode, HeaderMap), ApiError>
where
    T: Entity,
    S: EntityStore<T>,
{
    log::debug!("REST request to delete {} : {}", T::ENTITY_NAME, id);
    crud::delete(&*store, &id).await?;
    let headers = alert_headers(T::ENTITY_NAME, "deleted", &id.to_string());
    Ok((StatusCode::NO_CONTENT, headers))
}
