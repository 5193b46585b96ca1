mod navigator;
mod notifier;
mod types;

pub use navigator::{HistoryNavigator, Navigator};
pub use notifier::{Notifier, TracingNotifier};
pub use types::{Notice, NoticeLevel};
