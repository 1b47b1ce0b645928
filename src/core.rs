pub mod controller;
pub mod host;
pub mod notify;
pub mod page;
pub mod script;
pub mod themes;

#[cfg(test)]
pub(crate) mod testing;

pub use controller::SettingsController;
pub use host::{FsHost, HostService};
pub use notify::{LogNotifier, Notifier};
pub use page::{Control, SettingsPage};
