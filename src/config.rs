//! User configuration persistence
//!
//! Stores preferences in `~/.config/bevel/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::theme::{Decorations, Theme};

/// Configuration that persists across runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BevelConfig {
    /// Selected theme id (e.g., "default", "classic-motif")
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Overrides the theme's menu decoration style
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_decorations: Option<Decorations>,
    /// Overrides the theme's tray decoration style
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tray_decorations: Option<Decorations>,
}

fn default_theme() -> String {
    "default".to_string()
}

impl Default for BevelConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            menu_decorations: None,
            tray_decorations: None,
        }
    }
}

impl BevelConfig {
    /// Load config from the user config dir, or return defaults
    pub fn load() -> Self {
        match crate::config_paths::config_file() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("No config directory available, using defaults");
                Self::default()
            }
        }
    }

    /// Load config from `path`; missing or unreadable files yield defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("Config file not found at {}, using defaults", path.display());
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the user config dir
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Apply decoration overrides to a loaded theme
    pub fn apply(&self, theme: &mut Theme) {
        if let Some(menu) = self.menu_decorations {
            theme.decorations.menu = menu;
        }
        if let Some(tray) = self.tray_decorations {
            theme.decorations.tray = tray;
        }
    }

    /// Load the configured theme with overrides applied, falling back to the
    /// default theme if it cannot be loaded
    pub fn resolve_theme(&self) -> Theme {
        let mut theme = crate::theme::load_theme(&self.theme).unwrap_or_else(|e| {
            tracing::warn!("Failed to load theme '{}': {}, using default", self.theme, e);
            Theme::default()
        });
        self.apply(&mut theme);
        theme
    }
}
