use serde::Serialize;

use crate::db::{Application, Job};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Public view of a posting. The owner id is left out.
#[derive(Debug, Serialize)]
pub struct JobDto {
    pub id: i32,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub salary: Option<String>,
    pub posted_at: String,
}

impl From<Job> for JobDto {
    fn from(job: Job) -> Self {
        Self {
            id: job.id,
            title: job.title,
            company: job.company,
            location: job.location,
            description: job.description,
            salary: job.salary,
            posted_at: job.posted_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApplicationDto {
    pub id: i32,
    pub job_id: i32,
    pub status: String,
    pub applied_at: String,
}

impl From<Application> for ApplicationDto {
    fn from(app: Application) -> Self {
        Self {
            id: app.id,
            job_id: app.job_id,
            status: app.status,
            applied_at: app.applied_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthDto {
    pub status: &'static str,
    pub uptime_seconds: u64,
}
