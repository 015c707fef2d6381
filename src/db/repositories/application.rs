use crate::constants::applications::DEFAULT_STATUS;
use crate::entities::{applications, prelude::*};
use anyhow::{Context, Result};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::info;

#[derive(Debug, Clone)]
pub struct Application {
    pub id: i32,
    pub job_id: i32,
    pub user_id: i32,
    pub status: String,
    pub applied_at: String,
}

impl From<applications::Model> for Application {
    fn from(m: applications::Model) -> Self {
        Self {
            id: m.id,
            job_id: m.job_id,
            user_id: m.user_id,
            status: m.status,
            applied_at: m.applied_at,
        }
    }
}

pub struct ApplicationRepository {
    conn: DatabaseConnection,
}

impl ApplicationRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Records an application in the `pending` state. Repeat applications
    /// to the same job are stored as separate rows.
    pub async fn create(&self, job_id: i32, user_id: i32) -> Result<Application> {
        let active_model = applications::ActiveModel {
            job_id: Set(job_id),
            user_id: Set(user_id),
            status: Set(DEFAULT_STATUS.to_string()),
            applied_at: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        };

        let model = active_model
            .insert(&self.conn)
            .await
            .context("Failed to insert application")?;

        info!("User {} applied to job {}", user_id, job_id);
        Ok(Application::from(model))
    }

    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<Application>> {
        let rows = Applications::find()
            .filter(applications::Column::UserId.eq(user_id))
            .order_by_asc(applications::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to list applications for user")?;

        Ok(rows.into_iter().map(Application::from).collect())
    }
}
