use async_trait::async_trait;

use super::types::{Notice, NoticeLevel};

/// Presents notices to the user; resolves once the notice is dismissed.
#[async_trait]
pub trait Notifier: Send + Sync + 'static {
    async fn notify(&self, notice: Notice);
}

/// Writes notices to the log instead of a screen
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

#[async_trait]
impl Notifier for TracingNotifier {
    async fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => tracing::info!("{}: {}", notice.title, notice.text),
            NoticeLevel::Warning => tracing::warn!("{}: {}", notice.title, notice.text),
            NoticeLevel::Error => tracing::error!("{}: {}", notice.title, notice.text),
        }
    }
}
