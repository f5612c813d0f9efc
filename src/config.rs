use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
struct ConfigFile {
    server: ServerConfig,
    model: ModelConfig,
    storage: StorageConfig,
    report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize)]
struct ServerConfig {
    host: String,
    port: u16,
}

#[derive(Debug, Clone, Deserialize)]
struct ModelConfig {
    provider: String,
    api_url: Option<String>,
    api_key: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct StorageConfig {
    db_path: String,
}

#[derive(Debug, Clone, Deserialize)]
struct ReportConfig {
    output_dir: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub model_provider: String,
    pub model_api_url: Option<String>,
    pub model_api_key: Option<String>,
    pub model_name: Option<String>,
    pub db_path: PathBuf,
    pub output_dir: PathBuf,
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config_file: ConfigFile =
            toml::from_str(&content).context("Failed to parse config file")?;

        Ok(Self {
            host: config_file.server.host,
            port: config_file.server.port,
            model_provider: config_file.model.provider,
            model_api_url: config_file.model.api_url,
            model_api_key: config_file.model.api_key,
            model_name: config_file.model.name,
            db_path: config_file.storage.db_path.into(),
            output_dir: config_file.report.output_dir.into(),
        })
    }

    pub fn load() -> Result<Self> {
        Self::from_file("config.toml")
    }
}
