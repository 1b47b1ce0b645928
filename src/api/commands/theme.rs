//! Theme command module

use tauri::State;

use crate::api::commands::SettingsState;
use crate::core::HostService;
use crate::shared::errors::SettingsResult;

#[tauri::command]
pub async fn get_theme_names(state: State<'_, SettingsState>) -> SettingsResult<Vec<String>> {
    state.host().get_theme_names().await
}

/// Stylesheet contents of one theme
#[tauri::command]
pub async fn get_theme(state: State<'_, SettingsState>, name: String) -> SettingsResult<String> {
    state.host().get_theme(&name).await
}

/// Download a stylesheet into the themes directory
#[tauri::command]
pub async fn theme_from_link(state: State<'_, SettingsState>, link: String) -> SettingsResult<Option<String>> {
    state.host().theme_from_link(&link).await
}
