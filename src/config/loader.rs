use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::types::Config;

/// Configuration file loader
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new(config_path: Option<&str>) -> Self {
        Self {
            config_path: config_path.map(PathBuf::from),
        }
    }

    /// Load and parse the configuration file
    pub fn load(&self) -> Result<Config> {
        let path = self.find_config_file()?;

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Search for configuration file in standard locations
    fn find_config_file(&self) -> Result<PathBuf> {
        // If explicit path provided, use it
        if let Some(path) = &self.config_path {
            let expanded = expand_home(path)?;
            if expanded.exists() {
                return Ok(expanded);
            }
            return Err(anyhow!("Config file not found: {}", path.display()));
        }

        // Search in standard locations
        let mut search_paths = vec![
            PathBuf::from("./trackcar.yml"),
            PathBuf::from("./trackcar.yaml"),
        ];

        // Add user config directory
        if let Some(config_dir) = dirs::config_dir() {
            search_paths.push(config_dir.join("trackcar").join("config.yml"));
            search_paths.push(config_dir.join("trackcar").join("config.yaml"));
        }

        // Add system config
        search_paths.push(PathBuf::from("/etc/trackcar/config.yml"));
        search_paths.push(PathBuf::from("/etc/trackcar/config.yaml"));

        for path in search_paths {
            if path.exists() {
                return Ok(path);
            }
        }

        Err(anyhow!("No configuration file found in standard locations"))
    }
}

/// Validate a loaded configuration, returning human-readable warnings.
///
/// Nothing here is fatal: the app starts with whatever it has and the
/// affected operations fail with their own errors when used.
pub fn validate(config: &Config) -> Vec<String> {
    let mut warnings = Vec::new();

    if config.service.auth_url.is_empty() {
        warnings.push("service.auth_url is not set; sign-in and sign-up will fail".to_string());
    } else if !config.service.auth_url.starts_with("http") {
        warnings.push(format!(
            "service.auth_url does not look like a URL: {}",
            config.service.auth_url
        ));
    }

    if !config.service.auth_url.is_empty() && config.service.anon_key.is_empty() {
        warnings.push("service.anon_key is not set; the identity service will reject requests".to_string());
    }

    if config.remote.database_url.is_empty() {
        warnings.push("remote.database_url is not set; the dashboard will have nothing to show".to_string());
    }

    if config.remote.status_path.trim_matches('/').is_empty() {
        warnings.push("remote.status_path is empty; using the database root".to_string());
    }

    warnings
}

/// Expand ~ to home directory in paths
fn expand_home(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_str().context("Invalid path")?;
    if let Some(stripped) = path_str.strip_prefix("~/") {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(stripped))
    } else {
        Ok(path.to_path_buf())
    }
}
