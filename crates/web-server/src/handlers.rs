use crate::{AppState, error::AppError};
use axum::{Json, extract::State, http::StatusCode};
use core_types::SalaryEntry;
use serde_json::Value;
use std::sync::Arc;
use validation::validate_api;

/// # GET /api/salaries
///
/// Returns the full salary history as a JSON array, ascending by year (an
/// empty array when nothing is logged yet).
pub async fn get_salaries(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SalaryEntry>>, AppError> {
    let mut entries = state.store.fetch_all().await?;
    // Ascending-year order is a guarantee of the relay, not an assumption
    // about the store.
    entries.sort_by_key(|entry| entry.year);
    Ok(Json(entries))
}

/// # POST /api/salaries
///
/// Validates the submission (aggregating every issue into one 400 message)
/// and inserts it, returning the created row with its store-assigned `id`
/// and `created_at` as a 201.
pub async fn post_salary(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<SalaryEntry>), AppError> {
    let payload = validate_api(&body)?;
    let created = state.store.insert_one(&payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
