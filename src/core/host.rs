//! Host services the settings page depends on
//!
//! The page never touches the file system directly: it asks the host for the
//! theme list and for the config record as JSON text.

use async_trait::async_trait;
use tokio::fs;

use crate::config::ShellPaths;
use crate::core::themes;
use crate::shared::errors::{SettingsError, SettingsResult};
use crate::shared::settings::Config;

#[async_trait]
pub trait HostService: Send + Sync {
    async fn get_theme_names(&self) -> SettingsResult<Vec<String>>;

    /// The config record as JSON text.
    async fn read_config_file(&self) -> SettingsResult<String>;

    async fn write_config_file(&self, contents: String) -> SettingsResult<()>;

    async fn read_config(&self) -> SettingsResult<Config> {
        let contents = self.read_config_file().await?;
        Config::from_json(&contents)
    }

    async fn write_config(&self, config: &Config) -> SettingsResult<()> {
        let contents = config.to_json()?;
        self.write_config_file(contents).await
    }
}

/// File-backed host: config JSON and theme folders under [`ShellPaths`].
pub struct FsHost {
    paths: ShellPaths,
    client: reqwest::Client,
}

impl FsHost {
    pub fn new(paths: ShellPaths) -> Self {
        Self {
            paths,
            client: reqwest::Client::new(),
        }
    }

    pub fn paths(&self) -> &ShellPaths {
        &self.paths
    }

    pub async fn get_theme(&self, name: &str) -> SettingsResult<String> {
        themes::read_theme(&self.paths.theme_dir, name).await
    }

    pub async fn theme_from_link(&self, link: &str) -> SettingsResult<Option<String>> {
        themes::download_theme(&self.client, &self.paths.theme_dir, link).await
    }
}

#[async_trait]
impl HostService for FsHost {
    async fn get_theme_names(&self) -> SettingsResult<Vec<String>> {
        themes::list_theme_names(&self.paths.theme_dir).await
    }

    async fn read_config_file(&self) -> SettingsResult<String> {
        let path = &self.paths.config_file;

        // Reads never write; the file appears with the first queued update.
        match fs::read_to_string(path).await {
            Ok(contents) => Ok(contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No config at {}, using defaults", path.display());
                Config::default().to_json()
            }
            Err(e) => Err(SettingsError::Host(format!("Failed to read config file: {}", e))),
        }
    }

    async fn write_config_file(&self, contents: String) -> SettingsResult<()> {
        let path = &self.paths.config_file;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        fs::write(path, contents).await?;
        Ok(())
    }
}
