//! Settings page controller
//!
//! Fills the page from the host on load and turns each control change into a
//! read-modify-write of the whole config record. Writes are queued behind one
//! async mutex, so two quick changes can no longer overwrite each other.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::core::host::HostService;
use crate::core::notify::Notifier;
use crate::core::page::{Control, SettingsPage};
use crate::core::themes::clean_theme_name;
use crate::shared::errors::{SettingsError, SettingsResult};
use crate::shared::events::{Failure, Operation};
use crate::shared::settings::{Config, ConfigField};

pub struct SettingsController<H, N> {
    host: Arc<H>,
    notifier: N,
    // FIFO, so queued updates apply in the order the page sent them
    write_lock: Mutex<()>,
}

impl<H: HostService, N: Notifier> SettingsController<H, N> {
    pub fn new(host: Arc<H>, notifier: N) -> Self {
        Self {
            host,
            notifier,
            write_lock: Mutex::new(()),
        }
    }

    pub fn host(&self) -> &Arc<H> {
        &self.host
    }

    /// Populate the theme list, then prefill every control from the stored config.
    ///
    /// Theme options are appended in the order the host returns them. If the
    /// config cannot be read afterwards the options stay, the failure is
    /// reported and returned.
    pub async fn initialize<P>(&self, page: &P) -> SettingsResult<Config>
    where
        P: SettingsPage + Sync + ?Sized,
    {
        let themes = self
            .host
            .get_theme_names()
            .await
            .map_err(|e| self.report(Operation::LoadThemes, e))?;

        let mut appended = 0;
        for theme in &themes {
            let theme = clean_theme_name(theme);
            if page.append_option(Control::ThemeSelect, &theme, &theme) {
                appended += 1;
            }
        }
        log::debug!("Added {} of {} theme options", appended, themes.len());

        let config = self
            .host
            .read_config()
            .await
            .map_err(|e| self.report(Operation::ReadConfig, e))?;

        prefill(page, &config);
        log::info!("Settings page initialised with theme {}", config.theme);
        Ok(config)
    }

    /// Change handler for a control: re-read the record, replace one field, write it back.
    pub async fn update_field(&self, field: ConfigField, value: &str) -> SettingsResult<Config> {
        let _queued = self.write_lock.lock().await;

        let mut config = self
            .host
            .read_config()
            .await
            .map_err(|e| self.report(Operation::ReadConfig, e))?;

        config
            .set(field, value)
            .map_err(|e| self.report(Operation::UpdateConfig, e))?;

        self.host
            .write_config(&config)
            .await
            .map_err(|e| self.report(Operation::WriteConfig, e))?;

        log::info!("Set {} to {:?}", field, value);
        self.notifier.updated(&config);
        Ok(config)
    }

    /// Same as [`update_field`](Self::update_field) for a field name coming over IPC.
    pub async fn update_named(&self, field: &str, value: &str) -> SettingsResult<Config> {
        let field = field
            .parse::<ConfigField>()
            .map_err(|e| self.report(Operation::UpdateConfig, e))?;
        self.update_field(field, value).await
    }

    /// Replace the whole record with raw JSON. Rejected unless it parses as a config.
    pub async fn replace_config(&self, contents: String) -> SettingsResult<Config> {
        let config = Config::from_json(&contents).map_err(|e| self.report(Operation::UpdateConfig, e))?;

        let _queued = self.write_lock.lock().await;
        self.host
            .write_config_file(contents)
            .await
            .map_err(|e| self.report(Operation::WriteConfig, e))?;

        self.notifier.updated(&config);
        Ok(config)
    }

    fn report(&self, operation: Operation, err: SettingsError) -> SettingsError {
        self.notifier.failed(&Failure::new(operation, err.to_string()));
        err
    }
}

fn prefill<P: SettingsPage + ?Sized>(page: &P, config: &Config) {
    for field in ConfigField::ALL {
        page.set_value(field.control(), &config.get(field));
    }
    page.set_text(Control::ZoomLevelValue, &config.zoom.label());
}
