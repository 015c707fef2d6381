use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use serde::Deserialize;
use std::sync::Arc;

use super::extract::ApiJson;
use super::validation::{validate_optional, validate_required};
use super::{ApiError, AppState, JobDto, MessageResponse};
use crate::constants::limits::{MAX_JOB_FIELD_LEN, MAX_SALARY_LEN};
use crate::db::NewJob;

#[derive(Debug, Deserialize)]
pub struct CreateJobRequest {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub salary: Option<String>,
    pub user_id: i32,
}

impl CreateJobRequest {
    fn validate(&self) -> Result<(), ApiError> {
        validate_required("title", &self.title, Some(MAX_JOB_FIELD_LEN))?;
        validate_required("company", &self.company, Some(MAX_JOB_FIELD_LEN))?;
        validate_required("location", &self.location, Some(MAX_JOB_FIELD_LEN))?;
        validate_required("description", &self.description, None)?;
        validate_optional("salary", self.salary.as_deref(), MAX_SALARY_LEN)?;
        Ok(())
    }
}

pub async fn list_jobs(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<JobDto>>, ApiError> {
    let jobs = state.store().list_jobs().await?;
    let dtos: Vec<JobDto> = jobs.into_iter().map(JobDto::from).collect();
    Ok(Json(dtos))
}

pub async fn create_job(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<CreateJobRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    payload.validate()?;

    let caller = state.resolve_caller(&headers, payload.user_id).await?;

    let job = NewJob {
        title: payload.title,
        company: payload.company,
        location: payload.location,
        description: payload.description,
        salary: payload.salary,
    };

    state.store().create_job(job, caller.user_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Job created successfully")),
    ))
}
