use config::{Config as ConfigLoader, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

use super::error::Error;

#[derive(Debug, Deserialize, Clone)]
pub struct GraphConfig {
    /// Ordered node labels; list position is the node index.
    pub labels: Vec<String>,
    /// When false, every input edge is inserted in both directions.
    pub directed: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct QueryConfig {
    pub start: String,
    pub goal: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub graph: GraphConfig,
    pub query: QueryConfig,
}

/// Loads configuration from a file and environment variables.
pub fn load_config() -> Result<Config, Error> {
    let base_path = env::current_dir()
        .map_err(|e| Error::ConfigLoad(format!("Failed to determine current directory: {}", e)))?;

    let config_file_path: PathBuf = base_path
        .join("crates")
        .join("pathfinder")
        .join("Config.toml");

    if !config_file_path.exists() {
        return Err(Error::ConfigLoad(format!(
            "Configuration file not found at calculated path: {}",
            config_file_path.display()
        )));
    }

    let s = ConfigLoader::builder()
        .add_source(File::from(config_file_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix("PATHFINDER")
                .try_parsing(true)
                .separator("_"),
        )
        .build()
        .map_err(|e| Error::ConfigLoad(e.to_string()))?;

    let app_config: Config = s
        .try_deserialize()
        .map_err(|e| Error::ConfigLoad(format!("Failed to deserialize config: {}", e)))?;

    Ok(app_config)
}
