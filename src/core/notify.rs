//! Where settings outcomes are reported so failures reach the user.

use crate::shared::events::Failure;
use crate::shared::settings::Config;

pub trait Notifier: Send + Sync {
    fn updated(&self, config: &Config);

    fn failed(&self, failure: &Failure);
}

/// Headless notifier, outcomes only go to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn updated(&self, config: &Config) {
        log::info!(
            "Settings saved (theme={}, zoom={}, client_type={})",
            config.theme,
            config.zoom,
            config.client_type
        );
    }

    fn failed(&self, failure: &Failure) {
        log::error!("Settings {:?} failed: {}", failure.operation, failure.message);
    }
}

#[cfg(feature = "desktop")]
pub use desktop::EventNotifier;

#[cfg(feature = "desktop")]
mod desktop {
    use tauri::AppHandle;

    use super::Notifier;
    use crate::shared::emit::emit_event;
    use crate::shared::events::{AppEvent, Failure};
    use crate::shared::settings::Config;

    /// Broadcasts outcomes to every window; the page shows failures in a banner.
    pub struct EventNotifier {
        app: AppHandle,
    }

    impl EventNotifier {
        pub fn new(app: AppHandle) -> Self {
            Self { app }
        }
    }

    impl Notifier for EventNotifier {
        fn updated(&self, config: &Config) {
            emit_event(&self.app, AppEvent::SettingsUpdated(config.clone()));
        }

        fn failed(&self, failure: &Failure) {
            log::warn!("Settings {:?} failed: {}", failure.operation, failure.message);
            emit_event(&self.app, AppEvent::SettingsFailed(failure.clone()));
        }
    }
}
