use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Whether the store may be shared/exported at all
    #[serde(default = "default_true")]
    pub is_store_sharing_enabled: bool,

    /// Start with the view scoped to the current session
    #[serde(default = "default_true")]
    pub current_session_only: bool,

    /// Where exported artifacts are written (default: platform download dir)
    #[serde(default)]
    pub export_dir: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            is_store_sharing_enabled: true,
            current_session_only: true,
            export_dir: None,
        }
    }
}

impl Config {
    /// Load from the given path, or the platform config path when None
    ///
    /// A missing config file is not an error; defaults apply.
    pub fn load(path: Option<&str>) -> Result<Config> {
        let path = match path {
            Some(p) => PathBuf::from(p),
            None => default_config_path(),
        };

        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(config)
    }

    /// Resolved export directory
    pub fn export_dir(&self) -> PathBuf {
        match &self.export_dir {
            Some(dir) => PathBuf::from(dir),
            None => dirs::download_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("logtui"),
        }
    }
}

/// Platform config path: `<config dir>/logtui/config.yaml`
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("logtui")
        .join("config.yaml")
}
