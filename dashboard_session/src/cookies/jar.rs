use std::collections::HashMap;
use std::sync::Mutex;

use super::errors::CookieError;
use super::types::CookieOptions;

/// Client-side persisted key/value pairs.
///
/// Removing a cookie that is not present succeeds, so clearing the identity
/// set twice is harmless.
pub trait CookieJar: Send + Sync + 'static {
    fn get(&self, name: &str) -> Result<Option<String>, CookieError>;

    fn set(&self, name: &str, value: &str, options: &CookieOptions) -> Result<(), CookieError>;

    fn remove(&self, name: &str) -> Result<(), CookieError>;
}

#[derive(Debug, Clone)]
struct StoredCookie {
    value: String,
    options: CookieOptions,
}

/// In-process cookie jar, one per browser tab equivalent
#[derive(Debug, Default)]
pub struct MemoryCookieJar {
    entries: Mutex<HashMap<String, StoredCookie>>,
}

impl MemoryCookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options the named cookie was last written with.
    pub fn options(&self, name: &str) -> Option<CookieOptions> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(name).map(|c| c.options.clone()))
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .entries
            .lock()
            .map(|entries| entries.keys().cloned().collect())
            .unwrap_or_default();
        names.sort();
        names
    }

    pub fn is_empty(&self) -> bool {
        self.names().is_empty()
    }
}

impl CookieJar for MemoryCookieJar {
    fn get(&self, name: &str) -> Result<Option<String>, CookieError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| CookieError::Unavailable(e.to_string()))?;
        Ok(entries.get(name).map(|c| c.value.clone()))
    }

    fn set(&self, name: &str, value: &str, options: &CookieOptions) -> Result<(), CookieError> {
        if name.is_empty() || name.contains(['=', ';', ' ']) {
            return Err(CookieError::Cookie(format!("Invalid cookie name: {name:?}")));
        }
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| CookieError::Unavailable(e.to_string()))?;
        entries.insert(
            name.to_string(),
            StoredCookie {
                value: value.to_string(),
                options: options.clone(),
            },
        );
        Ok(())
    }

    fn remove(&self, name: &str) -> Result<(), CookieError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| CookieError::Unavailable(e.to_string()))?;
        entries.remove(name);
        Ok(())
    }
}
