use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default SWAPI base URL; `people/` is joined onto it.
pub const DEFAULT_API_ROOT: &str = "https://swapi.dev/api";

/// Global configuration loaded from `~/.config/swapi/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapiConfig {
    /// API base URL (e.g. `https://swapi.dev/api`).
    pub api_root: String,
    /// sqlx connection string for the characters database.
    /// If missing, `characters.db` under the XDG state dir is used.
    #[serde(default)]
    pub database_url: Option<String>,
    /// User-Agent sent with every GET.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Keep sqlx statement logging on (every SQL statement shows up in the log).
    #[serde(default = "default_echo_sql")]
    pub echo_sql: bool,
}

fn default_user_agent() -> String {
    concat!("swapi-etl/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_echo_sql() -> bool {
    true
}

impl Default for SwapiConfig {
    fn default() -> Self {
        Self {
            api_root: DEFAULT_API_ROOT.to_string(),
            database_url: None,
            user_agent: default_user_agent(),
            echo_sql: default_echo_sql(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("swapi")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SwapiConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SwapiConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: SwapiConfig = toml::from_str(&data)?;
    Ok(cfg)
}
