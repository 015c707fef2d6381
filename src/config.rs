use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    pub server: ServerConfig,

    pub security: SecurityConfig,

    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub database_path: String,

    pub log_level: String,

    /// `pretty` or `json`
    pub log_format: String,

    /// Number of tokio worker threads (default: 2)
    /// Set to 0 to use the number of CPU cores
    pub worker_threads: usize,

    /// Maximum database connections (default: 5)
    pub max_db_connections: u32,

    /// Minimum database connections (default: 1)
    pub min_db_connections: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            database_path: "sqlite:seeky.db".to_string(),
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
            worker_threads: 2,
            max_db_connections: 5,
            min_db_connections: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,

    pub port: u16,

    /// `*` allows any origin.
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 5000,
            cors_allowed_origins: vec!["*".to_string()],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Argon2 memory cost in KiB (default: 8192 = 8MB)
    pub argon2_memory_cost_kib: u32,

    /// Argon2 time cost (iterations)
    pub argon2_time_cost: u32,

    /// Argon2 parallelism (default: 1)
    pub argon2_parallelism: u32,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            argon2_memory_cost_kib: 8192,
            argon2_time_cost: 3,
            argon2_parallelism: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub metrics_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: true,
        }
    }
}

impl Config {
    /// Loads the first config file found in the search path, then applies
    /// `SEEKY_*` environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from_search_path()?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Like [`Config::load`], but an explicit path must exist.
    pub fn load_with(explicit: Option<&Path>) -> Result<Self> {
        let Some(path) = explicit else {
            return Self::load();
        };

        info!("Loading config from: {}", path.display());
        let mut config = Self::load_from_path(path)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    fn load_from_search_path() -> Result<Self> {
        for path in &Self::config_paths() {
            if path.exists() {
                info!("Loading config from: {}", path.display());
                return Self::load_from_path(path);
            }
        }

        info!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Config saved to: {}", path.display());
        Ok(())
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(path) = lookup("SEEKY_DATABASE_PATH") {
            self.general.database_path = path;
        }

        if let Some(level) = lookup("SEEKY_LOG_LEVEL") {
            self.general.log_level = level;
        }

        if let Some(addr) = lookup("SEEKY_BIND_ADDRESS") {
            self.server.bind_address = addr;
        }

        if let Some(port) = lookup("SEEKY_PORT") {
            self.server.port = port
                .parse()
                .with_context(|| format!("Invalid SEEKY_PORT: {port}"))?;
        }

        Ok(())
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        paths.push(PathBuf::from("config.toml"));

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("seeky").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".seeky").join("config.toml"));
        }

        paths
    }

    #[must_use]
    pub fn default_config_path() -> PathBuf {
        PathBuf::from("config.toml")
    }

    /// Writes the default config to `path` unless a file is already there.
    /// Returns whether a file was written.
    pub fn create_default_if_missing(path: &Path) -> Result<bool> {
        if path.exists() {
            Ok(false)
        } else {
            Self::default().save_to_path(path)?;
            info!("Created default config file: {}", path.display());
            Ok(true)
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.general.database_path.trim().is_empty() {
            anyhow::bail!("Database path cannot be empty");
        }

        if self.general.min_db_connections > self.general.max_db_connections {
            anyhow::bail!(
                "min_db_connections ({}) cannot exceed max_db_connections ({})",
                self.general.min_db_connections,
                self.general.max_db_connections
            );
        }

        if !matches!(self.general.log_format.as_str(), "pretty" | "json") {
            anyhow::bail!(
                "Unknown log format '{}', expected 'pretty' or 'json'",
                self.general.log_format
            );
        }

        if self.server.port == 0 {
            anyhow::bail!("Server port must be > 0");
        }

        if self.security.argon2_memory_cost_kib == 0
            || self.security.argon2_time_cost == 0
            || self.security.argon2_parallelism == 0
        {
            anyhow::bail!("Argon2 cost parameters must be > 0");
        }

        // Argon2 needs at least 8 KiB of memory per lane
        let min_memory = self.security.argon2_parallelism.saturating_mul(8);
        if self.security.argon2_memory_cost_kib < min_memory {
            anyhow::bail!(
                "argon2_memory_cost_kib ({}) must be at least 8 * argon2_parallelism ({min_memory})",
                self.security.argon2_memory_cost_kib
            );
        }

        Ok(())
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.bind_address, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.general.database_path, "sqlite:seeky.db");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.cors_allowed_origins, vec!["*".to_string()]);
        assert_eq!(config.bind_addr(), "127.0.0.1:5000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[server]"));
        assert!(toml_str.contains("[security]"));
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
            [general]
            log_level = "debug"

            [server]
            port = 8080
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.server.port, 8080);

        assert_eq!(config.server.bind_address, "127.0.0.1");
        assert_eq!(config.security.argon2_time_cost, 3);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.general.min_db_connections = 10;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.general.log_format = "xml".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.security.argon2_time_cost = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_argon2_memory_covers_lanes() {
        let mut config = Config::default();
        config.security.argon2_memory_cost_kib = 8;
        config.security.argon2_parallelism = 2;
        assert!(config.validate().is_err());

        config.security.argon2_memory_cost_kib = 16;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides_apply_over_file_values() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("SEEKY_DATABASE_PATH", "sqlite:/tmp/other.db"),
            ("SEEKY_LOG_LEVEL", "debug"),
            ("SEEKY_BIND_ADDRESS", "0.0.0.0"),
            ("SEEKY_PORT", "8081"),
        ]);

        let mut config = Config::default();
        config
            .apply_overrides(|key| vars.get(key).map(|v| (*v).to_string()))
            .unwrap();

        assert_eq!(config.general.database_path, "sqlite:/tmp/other.db");
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.bind_addr(), "0.0.0.0:8081");
    }

    #[test]
    fn test_env_overrides_leave_unset_values_alone() {
        let mut config = Config::default();
        config.apply_overrides(|_| None).unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:5000");
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn test_non_numeric_port_override_is_an_error() {
        let mut config = Config::default();
        let err = config
            .apply_overrides(|key| (key == "SEEKY_PORT").then(|| "http".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("Invalid SEEKY_PORT: http"));
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn test_explicit_config_path_must_exist() {
        let missing = std::env::temp_dir()
            .join(format!("seeky-missing-{}", uuid::Uuid::new_v4()))
            .join("config.toml");

        let err = Config::load_with(Some(&missing)).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read config file"));
    }

    #[test]
    fn test_explicit_config_path_is_loaded() {
        let dir = std::env::temp_dir().join(format!("seeky-explicit-{}", uuid::Uuid::new_v4()));
        let path = dir.join("custom.toml");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "[general]\nlog_format = \"json\"\n").unwrap();

        let config = Config::load_with(Some(&path)).unwrap();
        assert_eq!(config.general.log_format, "json");

        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_create_default_if_missing() {
        let path = std::env::temp_dir()
            .join(format!("seeky-config-{}", uuid::Uuid::new_v4()))
            .join("config.toml");

        assert!(Config::create_default_if_missing(&path).unwrap());
        assert!(!Config::create_default_if_missing(&path).unwrap());

        let loaded = Config::load_from_path(&path).unwrap();
        assert_eq!(loaded.server.port, 5000);

        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }
}
