//! Shell file locations and window configuration
//!
//! Config and themes live in the platform config directory unless
//! `SHELL_SETTINGS_DIR` points somewhere else (portable installs, tests).

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::shared::errors::{SettingsError, SettingsResult};

pub const DIR_ENV: &str = "SHELL_SETTINGS_DIR";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const THEME_DIR_NAME: &str = "themes";

/// Where the host keeps the config record and the theme folders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellPaths {
    pub config_file: PathBuf,
    pub theme_dir: PathBuf,
}

impl ShellPaths {
    pub fn under(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            config_file: root.join(CONFIG_FILE_NAME),
            theme_dir: root.join(THEME_DIR_NAME),
        }
    }

    pub fn resolve() -> SettingsResult<Self> {
        Self::resolve_with(std::env::var_os(DIR_ENV).map(PathBuf::from))
    }

    fn resolve_with(override_dir: Option<PathBuf>) -> SettingsResult<Self> {
        if let Some(dir) = override_dir.filter(|d| !d.as_os_str().is_empty()) {
            return Ok(Self::under(dir));
        }

        ProjectDirs::from("dev", "shell", "shell-settings")
            .map(|dirs| Self::under(dirs.config_dir()))
            .ok_or_else(|| SettingsError::Host("Failed to determine config directory".to_string()))
    }
}

/// Window configuration for the settings page
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub label: String,
    pub url: String,
    pub width: f64,
    pub height: f64,
    pub title: String,
    pub resizable: bool,
}

pub fn settings_window() -> WindowConfig {
    WindowConfig {
        label: "settings".to_string(),
        url: "settings.html".to_string(),
        width: 800.0,
        height: 600.0,
        title: "Settings".to_string(),
        resizable: true,
    }
}
