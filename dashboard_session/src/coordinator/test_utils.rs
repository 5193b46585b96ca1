//! Test doubles for coordinator tests

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::cookies::{CookieError, CookieJar, CookieOptions, MemoryCookieJar};
use crate::gateway::{AuthGateway, GatewayError, LoginOutcome, LoginUser};
use crate::identity::UserRole;
use crate::store::{InMemorySessionStore, SessionRecord, SessionStore, StorageError};
use crate::ui::{HistoryNavigator, Notice, Notifier};

use super::config::CoordinatorConfig;
use super::core::SessionCoordinator;

#[derive(Debug, Clone)]
pub(crate) enum LoginBehavior {
    Accept(LoginUser),
    Reject(String),
    Unreachable,
}

/// Scripted auth gateway that records every call
pub(crate) struct ScriptedGateway {
    pub(crate) login: Mutex<LoginBehavior>,
    pub(crate) logout_fails: Mutex<bool>,
    pub(crate) logout_calls: Mutex<Vec<Option<String>>>,
}

impl ScriptedGateway {
    pub(crate) fn new(login: LoginBehavior) -> Self {
        Self {
            login: Mutex::new(login),
            logout_fails: Mutex::new(false),
            logout_calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn fail_logout(&self, fail: bool) {
        *self.logout_fails.lock().unwrap() = fail;
    }

    pub(crate) fn logout_calls(&self) -> Vec<Option<String>> {
        self.logout_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuthGateway for ScriptedGateway {
    async fn login(&self, _email: &str, _password: &str) -> Result<LoginOutcome, GatewayError> {
        let behavior = self.login.lock().unwrap().clone();
        match behavior {
            LoginBehavior::Accept(user) => Ok(LoginOutcome::Accepted(user)),
            LoginBehavior::Reject(message) => Ok(LoginOutcome::Rejected { message }),
            LoginBehavior::Unreachable => {
                Err(GatewayError::HttpError("connection refused".to_string()))
            }
        }
    }

    async fn logout(&self, email: Option<&str>) -> Result<(), GatewayError> {
        self.logout_calls
            .lock()
            .unwrap()
            .push(email.map(str::to_string));
        if *self.logout_fails.lock().unwrap() {
            return Err(GatewayError::HttpStatusError(
                http::StatusCode::INTERNAL_SERVER_ERROR,
            ));
        }
        Ok(())
    }
}

/// In-memory store that also remembers who was ended and touched
#[derive(Default)]
pub(crate) struct RecordingStore {
    inner: InMemorySessionStore,
    pub(crate) ended: Mutex<Vec<String>>,
    pub(crate) touched: Mutex<Vec<String>>,
    /// Hold every `update_last_active` call for this long
    pub(crate) activity_delay: Mutex<Option<Duration>>,
}

impl RecordingStore {
    pub(crate) fn delay_activity(&self, delay: Duration) {
        *self.activity_delay.lock().unwrap() = Some(delay);
    }

    pub(crate) fn ended(&self) -> Vec<String> {
        self.ended.lock().unwrap().clone()
    }

    pub(crate) fn touched(&self) -> Vec<String> {
        self.touched.lock().unwrap().clone()
    }
}

#[async_trait]
impl SessionStore for RecordingStore {
    async fn init(&self) -> Result<(), StorageError> {
        self.inner.init().await
    }

    async fn start_session(&self, email: &str) -> Result<SessionRecord, StorageError> {
        self.inner.start_session(email).await
    }

    async fn update_last_active(&self, email: &str) -> Result<(), StorageError> {
        self.touched.lock().unwrap().push(email.to_string());
        let delay = *self.activity_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.inner.update_last_active(email).await
    }

    async fn end_session(&self, email: &str) -> Result<(), StorageError> {
        self.ended.lock().unwrap().push(email.to_string());
        self.inner.end_session(email).await
    }

    async fn get_session(&self, email: &str) -> Result<Option<SessionRecord>, StorageError> {
        self.inner.get_session(email).await
    }
}

#[derive(Default)]
pub(crate) struct RecordingNotifier {
    pub(crate) notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub(crate) fn titles(&self) -> Vec<String> {
        self.notices
            .lock()
            .unwrap()
            .iter()
            .map(|n| n.title.clone())
            .collect()
    }

    pub(crate) fn last(&self) -> Option<Notice> {
        self.notices.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

/// Cookie jar whose n-th `set` (1-based) fails
pub(crate) struct FlakyJar {
    pub(crate) inner: MemoryCookieJar,
    fail_on: usize,
    sets: AtomicUsize,
}

impl FlakyJar {
    pub(crate) fn failing_on(fail_on: usize) -> Self {
        Self {
            inner: MemoryCookieJar::new(),
            fail_on,
            sets: AtomicUsize::new(0),
        }
    }
}

impl CookieJar for FlakyJar {
    fn get(&self, name: &str) -> Result<Option<String>, CookieError> {
        self.inner.get(name)
    }

    fn set(&self, name: &str, value: &str, options: &CookieOptions) -> Result<(), CookieError> {
        if self.sets.fetch_add(1, Ordering::SeqCst) + 1 == self.fail_on {
            return Err(CookieError::Unavailable("storage quota exceeded".to_string()));
        }
        self.inner.set(name, value, options)
    }

    fn remove(&self, name: &str) -> Result<(), CookieError> {
        self.inner.remove(name)
    }
}

pub(crate) fn worker_user() -> LoginUser {
    LoginUser {
        is_admin: false,
        user_role: Some(UserRole::User),
        worker_id: Some("W-17".to_string()),
    }
}

pub(crate) fn admin_user() -> LoginUser {
    LoginUser {
        is_admin: true,
        user_role: Some(UserRole::Admin),
        worker_id: Some("A-1".to_string()),
    }
}

/// Everything a coordinator test needs to poke at
pub(crate) struct Harness {
    pub(crate) jar: Arc<MemoryCookieJar>,
    pub(crate) store: Arc<RecordingStore>,
    pub(crate) gateway: Arc<ScriptedGateway>,
    pub(crate) notifier: Arc<RecordingNotifier>,
    pub(crate) navigator: Arc<HistoryNavigator>,
    pub(crate) coordinator: SessionCoordinator,
}

impl Harness {
    pub(crate) fn new(login: LoginBehavior) -> Self {
        Self::with_config(login, CoordinatorConfig::default())
    }

    pub(crate) fn with_config(login: LoginBehavior, config: CoordinatorConfig) -> Self {
        let jar = Arc::new(MemoryCookieJar::new());
        let store = Arc::new(RecordingStore::default());
        let gateway = Arc::new(ScriptedGateway::new(login));
        let notifier = Arc::new(RecordingNotifier::default());
        let navigator = Arc::new(HistoryNavigator::new());
        let coordinator = SessionCoordinator::new(
            jar.clone(),
            store.clone(),
            gateway.clone(),
            notifier.clone(),
            navigator.clone(),
            config,
        );
        Self {
            jar,
            store,
            gateway,
            notifier,
            navigator,
            coordinator,
        }
    }
}
