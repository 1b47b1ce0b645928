use tauri::{AppHandle, Emitter};
use super::events::AppEvent;

/// Emit an application event to all windows
pub fn emit_event(app: &AppHandle, event: AppEvent) {
    let name = event.name();
    let result = match &event {
        AppEvent::SettingsUpdated(config) => app.emit(name, config),
        AppEvent::SettingsFailed(failure) => app.emit(name, failure),
    };

    if let Err(e) = result {
        log::error!("Failed to emit {}: {}", name, e);
    }
}
