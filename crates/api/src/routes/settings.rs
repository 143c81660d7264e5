//! Settings API handlers.

use axum::{
    Router,
    extract::{Path, Query, State},
    routing::{delete, get},
};
use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::db::SettingsRepository;
use crate::error::ApiError;
use crate::extract::Json;
use crate::models::SettingRecord;
use crate::response::{ApiSuccess, ok};
use crate::services::settings::{
    CalculationSettings, HomepageSettings, ProductCostSettings, SettingsDomain, SettingsError,
    load, save,
};
use crate::state::AppState;

/// Build the settings router.
///
/// The typed domain routes sit under `/api/settings/domains/` so they can
/// never collide with a record key in the generic delete route.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/settings", get(list).post(upsert))
        .route(
            "/api/settings/domains/homepage",
            get(get_domain::<HomepageSettings>).put(put_domain::<HomepageSettings>),
        )
        .route(
            "/api/settings/domains/calculation",
            get(get_domain::<CalculationSettings>).put(put_domain::<CalculationSettings>),
        )
        .route(
            "/api/settings/domains/product-cost",
            get(get_domain::<ProductCostSettings>).put(put_domain::<ProductCostSettings>),
        )
        .route("/api/settings/{key}", delete(remove))
}

impl From<SettingsError> for ApiError {
    fn from(e: SettingsError) -> Self {
        match e {
            SettingsError::Repository(e) => Self::Database(e),
            // A stored payload that no longer matches its domain shape is
            // our data problem, not the caller's
            SettingsError::Serialization(e) => Self::Internal(e.to_string()),
        }
    }
}

/// Fetch one domain's typed settings document, or `null` if never saved.
///
/// # Errors
///
/// Returns an error if the query fails or the stored payload does not
/// match the domain shape.
pub async fn get_domain<T: SettingsDomain>(
    State(state): State<AppState>,
) -> Result<Json<ApiSuccess<Option<T>>>, ApiError> {
    let settings = load::<T>(&SettingsRepository::new(state.pool())).await?;
    Ok(ok(settings))
}

/// Replace one domain's typed settings document wholesale.
///
/// # Errors
///
/// Returns an error if the upsert fails.
pub async fn put_domain<T: SettingsDomain>(
    State(state): State<AppState>,
    Json(body): Json<T>,
) -> Result<Json<ApiSuccess<T>>, ApiError> {
    save(&SettingsRepository::new(state.pool()), &body).await?;
    Ok(ok(body))
}

/// Query parameters for listing settings.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub tab: Option<String>,
}

/// Request body for upserting a settings record.
#[derive(Debug, Deserialize)]
pub struct UpsertRequest {
    pub key: String,
    pub tab: String,
    pub data: JsonValue,
}

/// List settings records, optionally filtered by tab.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiSuccess<Vec<SettingRecord>>>, ApiError> {
    let records = SettingsRepository::new(state.pool())
        .list(query.tab.as_deref())
        .await?;
    Ok(ok(records))
}

/// Insert or replace a settings record by key.
///
/// # Errors
///
/// Returns a validation error if `key` or `tab` is empty, or a database
/// error if the upsert fails.
pub async fn upsert(
    State(state): State<AppState>,
    Json(body): Json<UpsertRequest>,
) -> Result<Json<ApiSuccess<SettingRecord>>, ApiError> {
    let key = body.key.trim();
    if key.is_empty() {
        return Err(ApiError::Validation("key is required".to_string()));
    }
    let tab = body.tab.trim();
    if tab.is_empty() {
        return Err(ApiError::Validation("tab is required".to_string()));
    }

    let record = SettingsRepository::new(state.pool())
        .upsert(key, tab, &body.data)
        .await?;

    tracing::debug!(key = %record.key, tab = %record.tab, "settings record upserted");
    Ok(ok(record))
}

/// Delete a settings record by key. Deleting an absent key succeeds.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn remove(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<ApiSuccess<JsonValue>>, ApiError> {
    SettingsRepository::new(state.pool()).delete(&key).await?;
    Ok(ok(serde_json::json!({ "key": key })))
}
