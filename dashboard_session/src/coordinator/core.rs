use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::cookies::{
    CookieJar, CookieOptions, EMAIL_COOKIE, IDENTITY_COOKIES, IS_ADMIN_COOKIE, SESSION_COOKIE,
    SESSION_SENTINEL, USER_ROLE_COOKIE, WORKER_ID_COOKIE,
};
use crate::gateway::{AuthGateway, LoginOutcome, LoginUser};
use crate::identity::{AuthPhase, Identity, UserRole};
use crate::store::SessionStore;
use crate::ui::{Navigator, Notice, Notifier};

use super::config::CoordinatorConfig;
use super::errors::CoordinatorError;
use super::idle::IdleTimer;
use super::types::{ActivityEvent, SignInOutcome, SignOutOutcome};

#[derive(Debug)]
struct CoordinatorState {
    phase: AuthPhase,
    identity: Option<Identity>,
    ready: bool,
    /// Activity events are only honoured while an identity is held.
    listening: bool,
}

struct Inner {
    jar: Arc<dyn CookieJar>,
    store: Arc<dyn SessionStore>,
    gateway: Arc<dyn AuthGateway>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    config: CoordinatorConfig,
    state: RwLock<CoordinatorState>,
    idle: Arc<IdleTimer>,
}

/// Single source of truth for who is signed in.
///
/// Cloning yields another handle to the same session; hand it to whatever
/// needs identity or role instead of looking it up ambiently.
#[derive(Clone)]
pub struct SessionCoordinator {
    inner: Arc<Inner>,
}

impl SessionCoordinator {
    pub fn new(
        jar: Arc<dyn CookieJar>,
        store: Arc<dyn SessionStore>,
        gateway: Arc<dyn AuthGateway>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
        config: CoordinatorConfig,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                jar,
                store,
                gateway,
                notifier,
                navigator,
                config,
                state: RwLock::new(CoordinatorState {
                    phase: AuthPhase::Uninitialized,
                    identity: None,
                    ready: false,
                    listening: false,
                }),
                idle: Arc::new(IdleTimer::default()),
            }),
        }
    }

    fn read_state(&self) -> RwLockReadGuard<'_, CoordinatorState> {
        self.inner
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, CoordinatorState> {
        self.inner
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn config(&self) -> &CoordinatorConfig {
        &self.inner.config
    }

    pub fn phase(&self) -> AuthPhase {
        self.read_state().phase
    }

    /// False until `initialize` has finished; show a placeholder meanwhile.
    pub fn is_ready(&self) -> bool {
        self.read_state().ready
    }

    pub fn identity(&self) -> Option<Identity> {
        self.read_state().identity.clone()
    }

    pub fn current_email(&self) -> Option<String> {
        self.read_state().identity.as_ref().map(|i| i.email.clone())
    }

    pub fn is_admin(&self) -> bool {
        self.read_state()
            .identity
            .as_ref()
            .is_some_and(|i| i.is_admin)
    }

    pub fn role(&self) -> Option<UserRole> {
        self.read_state()
            .identity
            .as_ref()
            .and_then(|i| i.role.clone())
    }

    pub fn worker_id(&self) -> Option<String> {
        self.read_state()
            .identity
            .as_ref()
            .and_then(|i| i.worker_id.clone())
    }

    pub fn is_listening(&self) -> bool {
        self.read_state().listening
    }

    pub fn idle_timer_armed(&self) -> bool {
        self.inner.idle.is_armed()
    }

    /// Restore identity from cookies. Runs once; later calls return the
    /// current phase untouched. Never fails: unreadable cookies mean anonymous.
    #[tracing::instrument(skip(self))]
    pub fn initialize(&self) -> AuthPhase {
        {
            let mut state = self.write_state();
            if state.phase != AuthPhase::Uninitialized {
                return state.phase;
            }
            state.phase = AuthPhase::Loading;
        }

        let identity = match Identity::from_cookies(self.inner.jar.as_ref()) {
            Ok(identity) => identity,
            Err(e) => {
                tracing::error!("Auth initialization error: {}", e);
                None
            }
        };

        let phase = self.set_identity(identity);
        self.write_state().ready = true;
        tracing::info!("Session initialized: {:?}", phase);
        phase
    }

    /// Validate credentials with the gateway and persist the identity.
    ///
    /// Nothing changes unless the gateway accepts; failures are shown to the
    /// user and reported as [`SignInOutcome::Failed`].
    #[tracing::instrument(skip(self, password))]
    pub async fn sign_in(&self, email: &str, password: &str) -> SignInOutcome {
        let user = match self.inner.gateway.login(email, password).await {
            Ok(LoginOutcome::Accepted(user)) => user,
            Ok(LoginOutcome::Rejected { message }) => {
                tracing::debug!("Credentials rejected for {}", email);
                self.inner
                    .notifier
                    .notify(Notice::authentication_failed(&message))
                    .await;
                return SignInOutcome::Failed;
            }
            Err(e) => {
                tracing::error!("Sign in error: {}", e);
                self.inner
                    .notifier
                    .notify(Notice::sign_in_error(&e.to_string()))
                    .await;
                return SignInOutcome::Failed;
            }
        };

        if let Err(e) = self.write_identity_cookies(email, &user) {
            let e = e.log();
            self.inner
                .notifier
                .notify(Notice::sign_in_error(&e.to_string()))
                .await;
            return SignInOutcome::Failed;
        }

        let previous = self.current_email();
        self.set_identity(Some(Identity {
            email: email.to_string(),
            role: user.user_role.clone(),
            worker_id: user.worker_id.clone(),
            is_admin: user.is_admin,
        }));

        // Someone else was signed in on this client; their record goes too.
        if let Some(previous) = previous.filter(|previous| previous != email) {
            tracing::debug!("Ending session for {} after identity change", previous);
            self.end_session_quietly(&previous).await;
        }

        let redirect_to = self.inner.config.redirect_for(&user);
        self.inner.navigator.push(&redirect_to);
        tracing::info!("Signed in {} (admin: {})", email, user.is_admin);

        SignInOutcome::SignedIn { redirect_to }
    }

    /// Revoke the session remotely, then forget it locally.
    ///
    /// If the logout call fails the user is told, cookies are left as they
    /// were and the error is returned. Signing out with nothing to sign out of
    /// is a no-op.
    #[tracing::instrument(skip(self))]
    pub async fn sign_out(&self) -> Result<SignOutOutcome, CoordinatorError> {
        let email = self.current_email();

        if email.is_none() && self.session_cookie_absent() {
            tracing::debug!("Already signed out");
            return Ok(SignOutOutcome::AlreadySignedOut);
        }

        if let Err(e) = self.revoke_and_clear(email.as_deref()).await {
            let e = e.log();
            self.inner.notifier.notify(Notice::sign_out_error()).await;
            return Err(e);
        }

        self.inner
            .notifier
            .notify(Notice::signed_out(self.inner.config.signed_out_notice))
            .await;

        let redirect_to = self.inner.config.sign_in_route.clone();
        self.inner.navigator.push(&redirect_to);
        tracing::info!("Signed out {:?}", email);

        Ok(SignOutOutcome::SignedOut { redirect_to })
    }

    /// Pointer or keyboard activity while signed in.
    pub async fn record_activity(&self, event: ActivityEvent) {
        let email = {
            let state = self.read_state();
            if !state.listening {
                return;
            }
            match state.identity.as_ref() {
                Some(identity) => identity.email.clone(),
                None => return,
            }
        };

        tracing::trace!("Activity {:?} from {}", event, email);
        if let Err(e) = self.inner.store.update_last_active(&email).await {
            tracing::warn!("Failed to record activity for {}: {}", email, e);
        }

        // Signed out while the store call was in flight: stay disarmed.
        let state = self.read_state();
        if !state.listening {
            return;
        }
        self.inner.idle.cancel();
        self.arm_idle_timer();
    }

    /// Force a sign-out after inactivity.
    #[tracing::instrument(skip(self))]
    pub async fn handle_idle_expiry(&self) -> Result<(), CoordinatorError> {
        let Some(email) = self.current_email() else {
            return Ok(());
        };

        tracing::info!("Session for {} expired due to inactivity", email);
        if let Err(e) = self.inner.store.end_session(&email).await {
            tracing::warn!("Failed to end idle session for {}: {}", email, e);
        }

        self.inner
            .notifier
            .notify(Notice::session_expired(
                self.inner.config.session_expired_notice,
            ))
            .await;

        self.sign_out().await.map(|_| ())
    }

    /// Detach from activity, cancel the idle timer and, if someone is still
    /// signed in, end their session record.
    #[tracing::instrument(skip(self))]
    pub async fn teardown(&self) {
        let email = {
            let mut state = self.write_state();
            state.listening = false;
            state.identity.as_ref().map(|i| i.email.clone())
        };
        self.inner.idle.cancel();

        if let Some(email) = email {
            tracing::debug!("Ending session for {} on teardown", email);
            self.end_session_quietly(&email).await;
        }
    }

    async fn end_session_quietly(&self, email: &str) {
        if let Err(e) = self.inner.store.end_session(email).await {
            tracing::warn!("Failed to end session for {}: {}", email, e);
        }
    }

    /// Replace the held identity. Listeners and the idle timer follow it.
    fn set_identity(&self, identity: Option<Identity>) -> AuthPhase {
        let phase = {
            let mut state = self.write_state();
            state.phase = if identity.is_some() {
                AuthPhase::Authenticated
            } else {
                AuthPhase::Anonymous
            };
            state.listening = identity.is_some();
            state.identity = identity;
            state.phase
        };

        self.inner.idle.cancel();
        if phase == AuthPhase::Authenticated {
            self.arm_idle_timer();
        }
        phase
    }

    fn arm_idle_timer(&self) {
        let Some(timeout) = self.inner.config.idle_timeout else {
            return;
        };
        let this = self.clone();
        self.inner.idle.arm(timeout, async move {
            if let Err(e) = this.handle_idle_expiry().await {
                tracing::error!("Idle sign-out failed: {}", e);
            }
        });
    }

    fn session_cookie_absent(&self) -> bool {
        match self.inner.jar.get(SESSION_COOKIE) {
            Ok(value) => value.is_none(),
            Err(e) => {
                tracing::warn!("Could not read session cookie: {}", e);
                false
            }
        }
    }

    fn write_identity_cookies(&self, email: &str, user: &LoginUser) -> Result<(), CoordinatorError> {
        let options = CookieOptions::secure();
        let role = user
            .user_role
            .as_ref()
            .map(|r| r.to_string())
            .unwrap_or_default();
        let worker_id = user.worker_id.clone().unwrap_or_default();
        let is_admin = if user.is_admin { "true" } else { "false" };

        let cookies = [
            (SESSION_COOKIE, SESSION_SENTINEL),
            (EMAIL_COOKIE, email),
            (USER_ROLE_COOKIE, role.as_str()),
            (WORKER_ID_COOKIE, worker_id.as_str()),
            (IS_ADMIN_COOKIE, is_admin),
        ];

        for (name, value) in cookies {
            if let Err(e) = self.inner.jar.set(name, value, &options) {
                // Leave no half-written identity behind
                for name in IDENTITY_COOKIES {
                    if let Err(remove_err) = self.inner.jar.remove(name) {
                        tracing::warn!("Failed to roll back cookie {}: {}", name, remove_err);
                    }
                }
                return Err(e.into());
            }
        }
        Ok(())
    }

    async fn revoke_and_clear(&self, email: Option<&str>) -> Result<(), CoordinatorError> {
        self.inner.gateway.logout(email).await?;

        if let Some(email) = email {
            self.inner.store.end_session(email).await?;
        }

        for name in IDENTITY_COOKIES {
            self.inner.jar.remove(name)?;
        }

        self.set_identity(None);
        Ok(())
    }
}
