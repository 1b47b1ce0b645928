//! The controls the settings page exposes to the controller.

use crate::shared::settings::ConfigField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    ThemeSelect,
    ZoomLevel,
    /// Read-only label next to the zoom slider.
    ZoomLevelValue,
    ClientType,
}

impl Control {
    pub fn element_id(self) -> &'static str {
        match self {
            Control::ThemeSelect => "themeSelect",
            Control::ZoomLevel => "zoomLevel",
            Control::ZoomLevelValue => "zoomLevelValue",
            Control::ClientType => "clientType",
        }
    }
}

impl ConfigField {
    /// The control whose change events write this field.
    pub fn control(self) -> Control {
        match self {
            ConfigField::Theme => Control::ThemeSelect,
            ConfigField::Zoom => Control::ZoomLevel,
            ConfigField::ClientType => Control::ClientType,
        }
    }
}

/// Page surface. Every method returns whether the control was there; a missing
/// control is not an error and the call does nothing.
pub trait SettingsPage {
    fn append_option(&self, control: Control, value: &str, label: &str) -> bool;

    fn set_value(&self, control: Control, value: &str) -> bool;

    fn set_text(&self, control: Control, text: &str) -> bool;
}
