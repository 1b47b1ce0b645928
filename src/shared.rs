pub mod settings;
pub mod errors;
pub mod events;
#[cfg(feature = "desktop")]
pub mod emit;

// Re-export SettingsError for convenience
pub use errors::{SettingsError, SettingsResult};
