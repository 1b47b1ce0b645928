use serde::{Deserialize, Serialize};
use ts_rs::TS;
use super::settings::Config;

/// A settings operation that did not complete, shown to the user by the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../ui/types/events.ts")]
pub struct Failure {
    pub operation: Operation,
    pub message: String,
}

impl Failure {
    pub fn new(operation: Operation, message: impl Into<String>) -> Self {
        Self {
            operation,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export, export_to = "../ui/types/events.ts")]
pub enum Operation {
    LoadThemes,
    ReadConfig,
    UpdateConfig,
    WriteConfig,
}

#[derive(Debug, Clone, Serialize, TS)]
#[serde(tag = "event", content = "payload")]
#[ts(export, export_to = "../ui/types/events.ts")]
pub enum AppEvent {
    #[serde(rename = "settings://updated")]
    SettingsUpdated(Config),

    #[serde(rename = "settings://failed")]
    SettingsFailed(Failure),
}

impl AppEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AppEvent::SettingsUpdated(_) => "settings://updated",
            AppEvent::SettingsFailed(_) => "settings://failed",
        }
    }
}
