//! Settings page backed by a live webview
//!
//! Each operation is a script from [`crate::core::script`] evaluated in the
//! window. Evaluation is fire-and-forget: `true` means the script was dispatched.

use tauri::WebviewWindow;

use crate::core::page::{Control, SettingsPage};
use crate::core::script;

pub struct WebviewPage {
    window: WebviewWindow,
}

impl WebviewPage {
    pub fn new(window: WebviewWindow) -> Self {
        Self { window }
    }

    fn run(&self, control: Control, js: String) -> bool {
        match self.window.eval(&js) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("[WebviewPage] {} in {}: {}", control.element_id(), self.window.label(), e);
                false
            }
        }
    }
}

impl SettingsPage for WebviewPage {
    fn append_option(&self, control: Control, value: &str, label: &str) -> bool {
        self.run(control, script::append_option(control, value, label))
    }

    fn set_value(&self, control: Control, value: &str) -> bool {
        self.run(control, script::set_value(control, value))
    }

    fn set_text(&self, control: Control, text: &str) -> bool {
        self.run(control, script::set_text(control, text))
    }
}
