use std::sync::Mutex;

/// Client-side router
pub trait Navigator: Send + Sync + 'static {
    fn push(&self, route: &str);
}

/// Navigator that only remembers where it was sent
#[derive(Debug, Default)]
pub struct HistoryNavigator {
    history: Mutex<Vec<String>>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<String> {
        self.history
            .lock()
            .ok()
            .and_then(|history| history.last().cloned())
    }

    pub fn history(&self) -> Vec<String> {
        self.history
            .lock()
            .map(|history| history.clone())
            .unwrap_or_default()
    }
}

impl Navigator for HistoryNavigator {
    fn push(&self, route: &str) {
        tracing::debug!("Navigating to {}", route);
        match self.history.lock() {
            Ok(mut history) => history.push(route.to_string()),
            Err(e) => tracing::error!("Navigation history unavailable: {}", e),
        }
    }
}
