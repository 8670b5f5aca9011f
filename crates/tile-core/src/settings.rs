// ABOUTME: Application settings handling.
// ABOUTME: Loads and saves preferences from TOML config files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default connection command sent to each pane
pub const DEFAULT_COMMAND: &str = "ssh {host}";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// ssh client config to read hosts from (defaults to ~/.ssh/config)
    pub ssh_config: Option<PathBuf>,

    /// Command typed into each pane; `{host}` is the alias, `{address}` its HostName
    pub command: String,

    /// iTerm2 profile for the new tab (None uses the default profile)
    pub profile: Option<String>,

    /// Title each pane with its host alias
    pub name_panes: bool,

    /// Ask before opening panes
    pub confirm: bool,

    /// Query the iTerm2 version before running scripts
    pub check_version: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ssh_config: None,
            command: DEFAULT_COMMAND.to_string(),
            profile: None,
            name_panes: true,
            confirm: true,
            check_version: true,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize settings: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

impl Settings {
    /// Get the default settings file path (~/.config/sshtile/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sshtile").join("config.toml"))
    }

    /// Load settings from a path
    pub fn load(path: &std::path::Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        let settings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Load settings from default path, or return defaults if not found
    pub fn load_or_default() -> Self {
        Self::default_path()
            .and_then(|path| match Self::load(&path) {
                Ok(settings) => Some(settings),
                Err(SettingsError::ReadError(e)) if e.kind() == std::io::ErrorKind::NotFound => None,
                Err(e) => {
                    tracing::warn!("Ignoring settings at {}: {}", path.display(), e);
                    None
                }
            })
            .unwrap_or_default()
    }

    /// Save settings to a path
    pub fn save(&self, path: &std::path::Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// The ssh config to read, falling back to ~/.ssh/config
    pub fn ssh_config_path(&self) -> Option<PathBuf> {
        self.ssh_config.clone().or_else(crate::HostMap::default_path)
    }
}
