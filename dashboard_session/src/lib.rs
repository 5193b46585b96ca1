//! dashboard-session - Cookie-backed session coordination for the calibration dashboard
//!
//! The [`SessionCoordinator`] owns who is signed in on the client side: it
//! restores identity from cookies, signs in and out through the auth
//! gateway, and optionally expires idle sessions. The server side of the same
//! exchange lives in [`handle_login`] and [`handle_logout`], which are
//! framework-neutral and mounted by `dashboard-session-axum`.

mod config;
mod cookies;
mod coordinator;
mod endpoint;
mod gateway;
mod identity;
mod provider;
mod store;
mod ui;

pub use config::AUTH_ROUTE_PREFIX;

pub use cookies::{
    CUSTOM_TOKEN_COOKIE, CookieError, CookieJar, CookieOptions, EMAIL_COOKIE, IDENTITY_COOKIES,
    IS_ADMIN_COOKIE, LOGOUT_CLEARED_COOKIES, MemoryCookieJar, SESSION_COOKIE, SameSite,
    UID_COOKIE, USER_ROLE_COOKIE, WORKER_ID_COOKIE, append_expired_cookie, cookie_value,
    is_http_only,
};

pub use coordinator::{
    ActivityEvent, CoordinatorConfig, CoordinatorError, SessionCoordinator, SignInOutcome,
    SignOutOutcome,
};

pub use endpoint::{
    EndpointBody, EndpointError, EndpointResponse, LogoutFailure, LogoutSummary, handle_login,
    handle_logout,
};

pub use gateway::{
    AuthGateway, ErrorBody, GatewayError, HttpAuthGateway, LoginOutcome, LoginRequest,
    LoginResponse, LoginUser, LogoutRequest,
};

pub use identity::{AuthPhase, Identity, UserRole};

pub use provider::{IdentityProvider, InMemoryIdentityProvider, ProviderError, ProviderUser};

pub use store::{
    InMemorySessionStore, RedisSessionStore, SessionRecord, SessionStore, SessionStoreConfig,
    SessionStoreType, StorageError, build_session_store,
};

pub use ui::{HistoryNavigator, Navigator, Notice, NoticeLevel, Notifier, TracingNotifier};
