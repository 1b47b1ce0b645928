// Module declarations
pub mod shared;
pub mod core;
pub mod config;
#[cfg(feature = "desktop")]
mod api;
#[cfg(feature = "desktop")]
mod system;

pub use crate::config::ShellPaths;
pub use crate::core::{Control, FsHost, HostService, LogNotifier, Notifier, SettingsController, SettingsPage};
pub use crate::shared::errors::{SettingsError, SettingsResult};
pub use crate::shared::settings::{Config, ConfigField, Zoom};

/// Initialise logging once; `RUST_LOG` overrides the default `info` filter.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();
}

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use std::sync::Arc;
    use tauri::Manager;

    use crate::core::notify::EventNotifier;

    init_logging();

    tauri::Builder::default()
        .setup(|app| {
            let paths = ShellPaths::resolve()?;
            log::info!("Config file: {}", paths.config_file.display());
            log::info!("Theme directory: {}", paths.theme_dir.display());

            let host = Arc::new(FsHost::new(paths));
            let notifier = EventNotifier::new(app.handle().clone());
            app.manage(SettingsController::new(host, notifier));

            if let Err(e) = show_settings_window(app.handle()) {
                log::error!("Failed to show settings: {}", e);
            }

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            api::commands::theme::get_theme_names,
            api::commands::theme::get_theme,
            api::commands::theme::theme_from_link,
            api::commands::settings::read_config_file,
            api::commands::settings::write_config_file,
            api::commands::settings::init_settings_page,
            api::commands::settings::set_config_value,
        ])
        .run(tauri::generate_context!())
        .unwrap_or_else(|e| {
            log::error!("FATAL: Failed to start Tauri application: {}", e);
            std::process::exit(1);
        });
}

#[cfg(feature = "desktop")]
fn show_settings_window(app: &tauri::AppHandle) -> Result<(), Box<dyn std::error::Error>> {
    use tauri::{Manager, WebviewUrl, WebviewWindowBuilder};

    let window_config = config::settings_window();

    if let Some(window) = app.get_webview_window(&window_config.label) {
        window.show()?;
        window.set_focus()?;
        return Ok(());
    }

    WebviewWindowBuilder::new(app, &window_config.label, WebviewUrl::App(window_config.url.clone().into()))
        .title(&window_config.title)
        .inner_size(window_config.width, window_config.height)
        .resizable(window_config.resizable)
        .focused(true)
        .build()?;

    Ok(())
}
