use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;
use crate::services::{AssertedIdentity, AuthService, IdentityResolver, SeaOrmAuthService};

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub store: Store,

    pub auth_service: Arc<dyn AuthService>,

    pub identity: Arc<dyn IdentityResolver>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        Ok(Self::with_store(config, store))
    }

    /// Wires services around an already opened store.
    #[must_use]
    pub fn with_store(config: Config, store: Store) -> Self {
        let auth_service: Arc<dyn AuthService> = Arc::new(SeaOrmAuthService::new(
            store.clone(),
            config.security.clone(),
        ));

        Self {
            config: Arc::new(config),
            store,
            auth_service,
            identity: Arc::new(AssertedIdentity),
        }
    }
}
