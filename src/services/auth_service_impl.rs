//! `SeaORM` implementation of the `AuthService` trait.

use crate::config::SecurityConfig;
use crate::db::Store;
use crate::services::auth_service::{AuthError, AuthService, Registration, UserInfo};
use async_trait::async_trait;
use sea_orm::{DbErr, SqlErr};
use tracing::info;

pub struct SeaOrmAuthService {
    store: Store,
    security: SecurityConfig,
}

impl SeaOrmAuthService {
    #[must_use]
    pub const fn new(store: Store, security: SecurityConfig) -> Self {
        Self { store, security }
    }
}

/// Maps a unique-constraint failure from the insert back to the field that
/// collided. Two registrations racing past the pre-checks end up here.
fn classify_insert_error(err: anyhow::Error) -> AuthError {
    let violation = err
        .downcast_ref::<DbErr>()
        .and_then(DbErr::sql_err)
        .and_then(|sql_err| match sql_err {
            SqlErr::UniqueConstraintViolation(message) => Some(message),
            _ => None,
        });

    match violation {
        Some(message) if message.contains("email") => AuthError::EmailTaken,
        Some(_) => AuthError::UsernameTaken,
        None => AuthError::from(err),
    }
}

#[async_trait]
impl AuthService for SeaOrmAuthService {
    async fn register(&self, registration: Registration) -> Result<UserInfo, AuthError> {
        if self
            .store
            .get_user_by_email(&registration.email)
            .await?
            .is_some()
        {
            return Err(AuthError::EmailTaken);
        }

        if self
            .store
            .get_user_by_username(&registration.username)
            .await?
            .is_some()
        {
            return Err(AuthError::UsernameTaken);
        }

        let user = self
            .store
            .create_user(
                &registration.username,
                &registration.email,
                &registration.password,
                &self.security,
            )
            .await
            .map_err(classify_insert_error)?;

        info!("Registered user {} ({})", user.id, user.username);

        Ok(UserInfo::from(user))
    }

    async fn login(&self, email: &str, password: &str) -> Result<UserInfo, AuthError> {
        let user = self
            .store
            .verify_user_credentials(email, password, &self.security)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        Ok(UserInfo::from(user))
    }
}
