use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Deserialize, Clone, Debug)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub model: ModelConfig,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    #[serde(default = "default_body_limit")]
    pub body_limit_bytes: usize,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ModelConfig {
    pub name: String,
    pub path: String,
    #[serde(default = "default_intra_threads")]
    pub intra_threads: usize,
    /// Run one forward pass at startup and compare the output width with the label set.
    #[serde(default = "default_validate")]
    pub validate_on_startup: bool,
}

fn default_body_limit() -> usize {
    10 * 1024 * 1024
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_intra_threads() -> usize {
    4
}

fn default_validate() -> bool {
    true
}

impl AppConfig {
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_yaml_str(content: &str) -> anyhow::Result<Self> {
        let config = serde_yaml::from_str(content)?;
        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
