use contracts::shared::host_state::{WidgetKind, WidgetValue};
use contracts::shared::option_registry::OptionItem;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub widgets: Vec<WidgetSeed>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
}

/// Widget the host knows about at startup, with its initial properties
#[derive(Debug, Deserialize, Clone)]
pub struct WidgetSeed {
    pub id: String,
    pub kind: WidgetKind,
    #[serde(default)]
    pub value: Option<WidgetValue>,
    #[serde(default)]
    pub options: Vec<OptionItem>,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
static_dir = "dist"

[[widgets]]
id = "group-dropdown"
kind = "group_dropdown"
value = 1

[[widgets]]
id = "group-selection"
kind = "group_selection"
value = []

[[widgets]]
id = "event-selection"
kind = "event_selection"
value = ""

[[widgets]]
id = "event-selection-average"
kind = "event_render"
value = "freezing"

[[widgets]]
id = "interval-loader"
kind = "interval_loader"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Resolve the static directory relative to the executable directory
pub fn get_static_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.server.static_dir);
    if dir.is_absolute() {
        return dir.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved = exe_dir.join(dir);
            if resolved.exists() {
                return resolved;
            }
        }
    }

    dir.to_path_buf()
}
