use crate::config::Config;
use crate::utils::errors::{CatalogError, CatalogResult};
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use parking_lot::RwLock;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, error, info};

/// Supported config file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Detect format from file extension and content
    pub fn detect(path: &PathBuf, content: &str) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => ConfigFormat::Toml,
            Some("json") => ConfigFormat::Json,
            Some("yml") | Some("yaml") => ConfigFormat::Yaml,
            _ => {
                if content.trim_start().starts_with('{') {
                    ConfigFormat::Json
                } else {
                    ConfigFormat::Toml
                }
            }
        }
    }

    /// Detect format from file extension only
    pub fn from_path(path: &PathBuf) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => ConfigFormat::Json,
            Some("yml") | Some("yaml") => ConfigFormat::Yaml,
            _ => ConfigFormat::Toml,
        }
    }
}

#[derive(Debug, Clone)]
pub enum ConfigEvent {
    Reloaded,
    Error(String),
}

/// Parse configuration content in the given format
pub fn parse_config(content: &str, format: ConfigFormat) -> CatalogResult<Config> {
    match format {
        ConfigFormat::Toml => toml::from_str(content)
            .map_err(|e| CatalogError::ConfigError(format!("Failed to parse TOML config: {}", e))),
        ConfigFormat::Json => serde_json::from_str(content)
            .map_err(|e| CatalogError::ConfigError(format!("Failed to parse JSON config: {}", e))),
        ConfigFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|e| CatalogError::ConfigError(format!("Failed to parse YAML config: {}", e))),
    }
}

/// Read a config file, or fall back to defaults when it is absent
pub async fn load_or_default(path: &str) -> Config {
    let expanded = shellexpand::tilde(path).to_string();
    let path_buf = PathBuf::from(&expanded);

    match tokio::fs::read_to_string(&path_buf).await {
        Ok(content) => {
            let format = ConfigFormat::detect(&path_buf, &content);
            match parse_config(&content, format) {
                Ok(config) => config,
                Err(e) => {
                    error!("{}; using defaults", e);
                    Config::default()
                }
            }
        }
        Err(_) => {
            debug!("no config file at {}, using defaults", expanded);
            Config::default()
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
    format: ConfigFormat,
    config: Arc<RwLock<Config>>,
    event_tx: broadcast::Sender<ConfigEvent>,
    _watcher: RecommendedWatcher,
}

impl ConfigManager {
    pub async fn new(path: impl Into<PathBuf>) -> CatalogResult<Self> {
        let path = path.into();
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| CatalogError::ConfigError(format!("Failed to read config: {}", e)))?;

        let format = ConfigFormat::detect(&path, &content);
        debug!("Detected config format: {:?}", format);

        let config = parse_config(&content, format)?;
        let config = Arc::new(RwLock::new(config));

        let (event_tx, _) = broadcast::channel(16);
        let event_tx_clone = event_tx.clone();
        let config_clone = config.clone();
        let path_clone = path.clone();

        let rt_handle = tokio::runtime::Handle::try_current()
            .map_err(|e| CatalogError::ConfigError(format!("No Tokio runtime available: {}", e)))?;
        let watcher = notify::recommended_watcher(move |res: Result<Event, notify::Error>| {
            match res {
                Ok(event) => {
                    if event.kind.is_modify() {
                        info!("Config file changed, reloading...");
                        let config_clone = config_clone.clone();
                        let event_tx_clone = event_tx_clone.clone();
                        let path_clone = path_clone.clone();
                        let rt = rt_handle.clone();

                        rt.spawn(async move {
                            let content = match tokio::fs::read_to_string(&path_clone).await {
                                Ok(c) => c,
                                Err(e) => {
                                    let _ = event_tx_clone.send(ConfigEvent::Error(e.to_string()));
                                    return;
                                }
                            };
                            let format = ConfigFormat::detect(&path_clone, &content);
                            match parse_config(&content, format) {
                                Ok(new_config) => {
                                    *config_clone.write() = new_config;
                                    let _ = event_tx_clone.send(ConfigEvent::Reloaded);
                                }
                                Err(e) => {
                                    error!("Failed to reload config: {}", e);
                                    let _ = event_tx_clone.send(ConfigEvent::Error(e.to_string()));
                                }
                            }
                        });
                    }
                }
                Err(e) => {
                    error!("Config watcher error: {}", e);
                }
            }
        })
        .map_err(|e| CatalogError::ConfigError(e.to_string()))?;

        let mut manager = Self {
            path,
            format,
            config,
            event_tx,
            _watcher: watcher,
        };

        manager.start_watching()?;
        Ok(manager)
    }

    fn start_watching(&mut self) -> CatalogResult<()> {
        self._watcher
            .watch(&self.path, RecursiveMode::NonRecursive)
            .map_err(|e| CatalogError::ConfigError(e.to_string()))?;
        Ok(())
    }

    pub fn get_config(&self) -> Config {
        self.config.read().clone()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ConfigEvent> {
        self.event_tx.subscribe()
    }

    pub async fn reload(&self) -> CatalogResult<()> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| CatalogError::ConfigError(format!("Failed to read config: {}", e)))?;
        let new_config = parse_config(&content, self.format)?;
        *self.config.write() = new_config;
        let _ = self.event_tx.send(ConfigEvent::Reloaded);
        Ok(())
    }
}
