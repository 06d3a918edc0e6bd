use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use validator::Validate;

use crate::error::{ApiJson, ApiPath, ApiQuery, AppError, AppResult};
use crate::models::entry::parse_coercible_date;
use crate::models::{Entry, EntryPatch, NewEntry};
use crate::store::EntryStore;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserQuery {
    pub user_id: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeQuery {
    pub user_id: i32,
    pub start_date: String,
    pub end_date: String,
}

/// GET /api/entries?userId=
pub async fn list_entries(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<UserQuery>,
) -> AppResult<Json<Vec<Entry>>> {
    let entries = state.store.entries_by_user(query.user_id).await?;
    Ok(Json(entries))
}

/// GET /api/entries/date/:date?userId=
pub async fn entries_by_date(
    State(state): State<AppState>,
    ApiPath(date): ApiPath<String>,
    ApiQuery(query): ApiQuery<UserQuery>,
) -> AppResult<Json<Vec<Entry>>> {
    let date = parse_coercible_date(&date)
        .ok_or_else(|| AppError::Validation("Invalid date format".into()))?;

    let entries = state.store.entries_by_date(query.user_id, date).await?;
    Ok(Json(entries))
}

/// GET /api/entries/range?userId=&startDate=&endDate=
pub async fn entries_in_range(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<RangeQuery>,
) -> AppResult<Json<Vec<Entry>>> {
    let start = parse_coercible_date(&query.start_date)
        .ok_or_else(|| AppError::Validation("Invalid date format".into()))?;
    let end = parse_coercible_date(&query.end_date)
        .ok_or_else(|| AppError::Validation("Invalid date format".into()))?;

    let entries = state
        .store
        .entries_in_range(query.user_id, start, end)
        .await?;
    Ok(Json(entries))
}

/// GET /api/entries/:id
pub async fn get_entry(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<Entry>> {
    let entry = state
        .store
        .get_entry(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Entry not found".into()))?;
    Ok(Json(entry))
}

/// POST /api/entries
pub async fn create_entry(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<NewEntry>,
) -> AppResult<(StatusCode, Json<Entry>)> {
    body.validate()?;

    let entry = state.store.create_entry(body).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// PUT /api/entries/:id — partial update; only supplied fields are validated
/// and written.
pub async fn update_entry(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(body): ApiJson<EntryPatch>,
) -> AppResult<Json<Entry>> {
    body.validate()?;

    let entry = state
        .store
        .update_entry(id, body)
        .await?
        .ok_or_else(|| AppError::NotFound("Entry not found".into()))?;
    Ok(Json(entry))
}

/// DELETE /api/entries/:id
pub async fn delete_entry(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<StatusCode> {
    let deleted = state.store.delete_entry(id).await?;
    if !deleted {
        return Err(AppError::NotFound("Entry not found".into()));
    }
    Ok(StatusCode::NO_CONTENT)
}
