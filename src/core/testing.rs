//! In-memory host, page and notifier for controller tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::core::host::HostService;
use crate::core::notify::Notifier;
use crate::core::page::{Control, SettingsPage};
use crate::shared::errors::{SettingsError, SettingsResult};
use crate::shared::events::Failure;
use crate::shared::settings::Config;

pub struct MemoryHost {
    themes: Option<Vec<String>>,
    file: Mutex<String>,
    writes: Mutex<Vec<String>>,
    write_delay: Duration,
}

impl MemoryHost {
    pub fn new(contents: &str) -> Self {
        Self {
            themes: Some(Vec::new()),
            file: Mutex::new(contents.to_string()),
            writes: Mutex::new(Vec::new()),
            write_delay: Duration::ZERO,
        }
    }

    pub fn with_themes(mut self, themes: &[&str]) -> Self {
        self.themes = Some(themes.iter().map(|t| t.to_string()).collect());
        self
    }

    pub fn failing_themes(mut self) -> Self {
        self.themes = None;
        self
    }

    pub fn with_write_delay(mut self, delay: Duration) -> Self {
        self.write_delay = delay;
        self
    }

    pub fn contents(&self) -> String {
        self.file.lock().unwrap().clone()
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }

    pub fn write_count(&self) -> usize {
        self.writes.lock().unwrap().len()
    }
}

#[async_trait]
impl HostService for MemoryHost {
    async fn get_theme_names(&self) -> SettingsResult<Vec<String>> {
        self.themes
            .clone()
            .ok_or_else(|| SettingsError::Host("theme directory unreadable".to_string()))
    }

    async fn read_config_file(&self) -> SettingsResult<String> {
        Ok(self.contents())
    }

    async fn write_config_file(&self, contents: String) -> SettingsResult<()> {
        if !self.write_delay.is_zero() {
            tokio::time::sleep(self.write_delay).await;
        }
        *self.file.lock().unwrap() = contents.clone();
        self.writes.lock().unwrap().push(contents);
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryPage {
    absent: HashSet<Control>,
    options: Mutex<Vec<(String, String)>>,
    values: Mutex<HashMap<Control, String>>,
    texts: Mutex<HashMap<Control, String>>,
}

impl MemoryPage {
    pub fn full() -> Self {
        Self::default()
    }

    pub fn without(absent: &[Control]) -> Self {
        Self {
            absent: absent.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub fn options(&self) -> Vec<(String, String)> {
        self.options.lock().unwrap().clone()
    }

    pub fn value(&self, control: Control) -> Option<String> {
        self.values.lock().unwrap().get(&control).cloned()
    }

    pub fn text(&self, control: Control) -> Option<String> {
        self.texts.lock().unwrap().get(&control).cloned()
    }
}

impl SettingsPage for MemoryPage {
    fn append_option(&self, control: Control, value: &str, label: &str) -> bool {
        if self.absent.contains(&control) {
            return false;
        }
        self.options.lock().unwrap().push((value.to_string(), label.to_string()));
        true
    }

    fn set_value(&self, control: Control, value: &str) -> bool {
        if self.absent.contains(&control) {
            return false;
        }
        self.values.lock().unwrap().insert(control, value.to_string());
        true
    }

    fn set_text(&self, control: Control, text: &str) -> bool {
        if self.absent.contains(&control) {
            return false;
        }
        self.texts.lock().unwrap().insert(control, text.to_string());
        true
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    updated: Mutex<Vec<Config>>,
    failed: Mutex<Vec<Failure>>,
}

impl RecordingNotifier {
    pub fn updated_count(&self) -> usize {
        self.updated.lock().unwrap().len()
    }

    pub fn failures(&self) -> Vec<Failure> {
        self.failed.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn updated(&self, config: &Config) {
        self.updated.lock().unwrap().push(config.clone());
    }

    fn failed(&self, failure: &Failure) {
        self.failed.lock().unwrap().push(failure.clone());
    }
}
