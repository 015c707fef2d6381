use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};
use serde::Deserialize;
use std::sync::Arc;

use super::extract::ApiJson;
use super::validation::validate_id;
use super::{ApiError, AppState, ApplicationDto, MessageResponse};

#[derive(Debug, Deserialize)]
pub struct ApplyRequest {
    pub job_id: i32,
    pub user_id: i32,
}

/// POST /api/applications
/// Neither the job nor the user is looked up, and repeat applications are
/// accepted.
pub async fn apply_to_job(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<ApplyRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let job_id = validate_id("job_id", payload.job_id)?;
    let caller = state.resolve_caller(&headers, payload.user_id).await?;

    state.store().create_application(job_id, caller.user_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Application submitted successfully")),
    ))
}

/// GET /api/applications/{user_id}
pub async fn list_user_applications(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i32>,
) -> Result<Json<Vec<ApplicationDto>>, ApiError> {
    let apps = state.store().get_applications_for_user(user_id).await?;
    let dtos: Vec<ApplicationDto> = apps.into_iter().map(ApplicationDto::from).collect();
    Ok(Json(dtos))
}
