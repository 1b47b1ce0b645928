//! Command modules for Tauri application
//!
//! - `settings`: config record reads, writes and the page lifecycle
//! - `theme`: theme listing, contents and downloads

pub mod settings;
pub mod theme;

use crate::core::{FsHost, SettingsController};
use crate::core::notify::EventNotifier;

/// Controller shared by every settings window.
pub type SettingsState = SettingsController<FsHost, EventNotifier>;
