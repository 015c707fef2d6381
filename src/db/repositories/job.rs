use crate::entities::{jobs, prelude::*};
use anyhow::{Context, Result};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use tracing::info;

#[derive(Debug, Clone)]
pub struct Job {
    pub id: i32,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub salary: Option<String>,
    pub posted_at: String,
    pub user_id: i32,
}

/// Fields supplied by the poster; id and timestamp are assigned on insert.
#[derive(Debug, Clone)]
pub struct NewJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub salary: Option<String>,
}

impl From<jobs::Model> for Job {
    fn from(m: jobs::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            company: m.company,
            location: m.location,
            description: m.description,
            salary: m.salary,
            posted_at: m.posted_at,
            user_id: m.user_id,
        }
    }
}

pub struct JobRepository {
    conn: DatabaseConnection,
}

impl JobRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Inserts a posting owned by `user_id`. The owner is not looked up.
    pub async fn create(&self, job: NewJob, user_id: i32) -> Result<Job> {
        let active_model = jobs::ActiveModel {
            title: Set(job.title),
            company: Set(job.company),
            location: Set(job.location),
            description: Set(job.description),
            salary: Set(job.salary),
            posted_at: Set(chrono::Utc::now().to_rfc3339()),
            user_id: Set(user_id),
            ..Default::default()
        };

        let model = active_model
            .insert(&self.conn)
            .await
            .context("Failed to insert job")?;

        info!("Job {} posted by user {}", model.id, user_id);
        Ok(Job::from(model))
    }

    pub async fn list_all(&self) -> Result<Vec<Job>> {
        let rows = Jobs::find()
            .order_by_asc(jobs::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to list jobs")?;

        Ok(rows.into_iter().map(Job::from).collect())
    }
}
