use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use ts_rs::TS;

use super::errors::{SettingsError, SettingsResult};

/// Persisted shell configuration as seen by the settings page.
///
/// The file is shared with other shell features, so keys this page does not
/// know about are carried through `extra` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "../ui/types/settings.ts")]
pub struct Config {
    pub theme: String,
    #[ts(type = "number | string")]
    pub zoom: Zoom,
    pub client_type: String,
    #[serde(flatten)]
    #[ts(skip)]
    pub extra: Map<String, Value>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "none".to_string(),
            zoom: Zoom::default(),
            client_type: "default".to_string(),
            extra: Map::new(),
        }
    }
}

impl Config {
    pub fn from_json(contents: &str) -> SettingsResult<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn to_json(&self) -> SettingsResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Replace exactly one field with the control's string value.
    pub fn set(&mut self, field: ConfigField, value: &str) -> SettingsResult<()> {
        match field {
            ConfigField::Theme => self.theme = value.to_string(),
            ConfigField::Zoom => self.zoom = Zoom::parse(value)?,
            ConfigField::ClientType => self.client_type = value.to_string(),
        }
        Ok(())
    }

    /// Current value of a field in the form its control displays.
    pub fn get(&self, field: ConfigField) -> String {
        match field {
            ConfigField::Theme => self.theme.clone(),
            ConfigField::Zoom => self.zoom.to_string(),
            ConfigField::ClientType => self.client_type.clone(),
        }
    }
}

/// Zoom percentage. Older files store it as a number, the page writes it back
/// as a string, and both have to survive a round trip unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Zoom {
    Number(Number),
    Text(String),
}

impl Default for Zoom {
    fn default() -> Self {
        Zoom::Number(Number::from(100))
    }
}

impl Zoom {
    /// Accepts what a range/number input reports; must be a finite positive number.
    pub fn parse(value: &str) -> SettingsResult<Self> {
        let trimmed = value.trim();
        match trimmed.parse::<f64>() {
            Ok(pct) if pct.is_finite() && pct > 0.0 => Ok(Zoom::Text(trimmed.to_string())),
            _ => Err(SettingsError::Validation(format!(
                "Zoom level must be a positive number, got {:?}",
                value
            ))),
        }
    }

    /// Text for the read-only percentage label.
    pub fn label(&self) -> String {
        format!("{}%", self)
    }
}

impl fmt::Display for Zoom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zoom::Number(n) => write!(f, "{}", n),
            Zoom::Text(s) => f.write_str(s),
        }
    }
}

/// The fields a page control can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../ui/types/settings.ts")]
pub enum ConfigField {
    Theme,
    Zoom,
    ClientType,
}

impl ConfigField {
    pub const ALL: [ConfigField; 3] = [ConfigField::Theme, ConfigField::Zoom, ConfigField::ClientType];

    pub fn key(self) -> &'static str {
        match self {
            ConfigField::Theme => "theme",
            ConfigField::Zoom => "zoom",
            ConfigField::ClientType => "client_type",
        }
    }
}

impl FromStr for ConfigField {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigField::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| SettingsError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
