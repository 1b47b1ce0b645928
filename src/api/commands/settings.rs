//! Settings command module
//!
//! The page calls `init_settings_page` once it is ready and
//! `set_config_value` from each control's change listener.

use tauri::{State, WebviewWindow};

use crate::api::commands::SettingsState;
use crate::core::HostService;
use crate::shared::errors::SettingsResult;
use crate::shared::settings::Config;
use crate::system::webview::WebviewPage;

/// Raw config record as JSON text
#[tauri::command]
pub async fn read_config_file(state: State<'_, SettingsState>) -> SettingsResult<String> {
    state.host().read_config_file().await
}

/// Replace the config record; contents must be a valid config
#[tauri::command]
pub async fn write_config_file(state: State<'_, SettingsState>, contents: String) -> SettingsResult<()> {
    state.replace_config(contents).await.map(|_| ())
}

/// Populate the calling window's controls
#[tauri::command]
pub async fn init_settings_page(window: WebviewWindow, state: State<'_, SettingsState>) -> SettingsResult<Config> {
    let page = WebviewPage::new(window);
    state.initialize(&page).await
}

/// Write one field from a control change
#[tauri::command]
pub async fn set_config_value(
    state: State<'_, SettingsState>,
    field: String,
    value: String,
) -> SettingsResult<Config> {
    state.update_named(&field, &value).await
}
