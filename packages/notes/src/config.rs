use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub bucket: String,
    pub region: String,
    pub endpoint: String,
    pub access_key: String,
    pub secret_key: String,
    /// Base URL that public object URLs are derived from.
    pub public_base_url: String,
    /// Upload size ceiling in bytes.
    pub max_blob_size: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub storage: StorageConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("storage.bucket", "notes")?
            .set_default("storage.region", "us-east-1")?
            .set_default("storage.max_blob_size", 52_428_800)? // 50 MB
            // Load from config/config.toml
            .add_source(File::with_name("config/config").required(false))
            // Override from environment (e.g., NOTES__DATABASE__URL)
            .add_source(Environment::with_prefix("NOTES").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
