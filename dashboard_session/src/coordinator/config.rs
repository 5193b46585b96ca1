use std::env;
use std::time::Duration;

use crate::gateway::LoginUser;

const DEFAULT_SIGN_IN_ROUTE: &str = "/authentication/sign-in";
const DEFAULT_ADMIN_HOME: &str = "/";
const DEFAULT_WORKER_ROUTE_PREFIX: &str = "/dashboard/user";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinatorConfig {
    /// `None` keeps activity tracking but never expires an idle session.
    pub idle_timeout: Option<Duration>,
    pub sign_in_route: String,
    pub admin_home_route: String,
    pub worker_route_prefix: String,
    pub signed_out_notice: Duration,
    pub session_expired_notice: Duration,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            idle_timeout: None,
            sign_in_route: DEFAULT_SIGN_IN_ROUTE.to_string(),
            admin_home_route: DEFAULT_ADMIN_HOME.to_string(),
            worker_route_prefix: DEFAULT_WORKER_ROUTE_PREFIX.to_string(),
            signed_out_notice: Duration::from_secs(2),
            session_expired_notice: Duration::from_secs(5),
        }
    }
}

impl CoordinatorConfig {
    /// Overlay `DASHBOARD_*` environment variables on the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            idle_timeout: parse_idle_timeout(env::var("DASHBOARD_IDLE_TIMEOUT_SECS").ok().as_deref()),
            sign_in_route: env::var("DASHBOARD_SIGN_IN_ROUTE").unwrap_or(defaults.sign_in_route),
            admin_home_route: env::var("DASHBOARD_ADMIN_HOME").unwrap_or(defaults.admin_home_route),
            worker_route_prefix: env::var("DASHBOARD_WORKER_ROUTE_PREFIX")
                .unwrap_or(defaults.worker_route_prefix),
            ..defaults
        }
    }

    pub fn with_idle_timeout(mut self, timeout: Duration) -> Self {
        self.idle_timeout = Some(timeout);
        self
    }

    /// Where a freshly signed-in user lands.
    pub fn redirect_for(&self, user: &LoginUser) -> String {
        if user.is_admin {
            return self.admin_home_route.clone();
        }
        let prefix = self.worker_route_prefix.trim_end_matches('/');
        match user.worker_id.as_deref() {
            Some(worker_id) if !worker_id.is_empty() => format!("{prefix}/{worker_id}"),
            _ => prefix.to_string(),
        }
    }
}

fn parse_idle_timeout(value: Option<&str>) -> Option<Duration> {
    value
        .and_then(|s| s.parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn user(is_admin: bool, worker_id: Option<&str>) -> LoginUser {
        LoginUser {
            is_admin,
            user_role: None,
            worker_id: worker_id.map(str::to_string),
        }
    }

    #[test]
    fn test_admin_redirects_to_root() {
        let config = CoordinatorConfig::default();
        assert_eq!(config.redirect_for(&user(true, Some("W-1"))), "/");
    }

    #[test]
    fn test_worker_redirects_to_dashboard() {
        let config = CoordinatorConfig::default();
        assert_eq!(
            config.redirect_for(&user(false, Some("W-1"))),
            "/dashboard/user/W-1"
        );
    }

    #[test]
    fn test_worker_without_id_lands_on_prefix() {
        let config = CoordinatorConfig::default();
        assert_eq!(config.redirect_for(&user(false, None)), "/dashboard/user");
        assert_eq!(config.redirect_for(&user(false, Some(""))), "/dashboard/user");
    }

    #[test]
    fn test_parse_idle_timeout() {
        assert_eq!(parse_idle_timeout(None), None);
        assert_eq!(parse_idle_timeout(Some("0")), None);
        assert_eq!(parse_idle_timeout(Some("five")), None);
        assert_eq!(parse_idle_timeout(Some("300")), Some(Duration::from_secs(300)));
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        unsafe {
            env::set_var("DASHBOARD_IDLE_TIMEOUT_SECS", "120");
            env::set_var("DASHBOARD_SIGN_IN_ROUTE", "/login");
        }

        let config = CoordinatorConfig::from_env();

        unsafe {
            env::remove_var("DASHBOARD_IDLE_TIMEOUT_SECS");
            env::remove_var("DASHBOARD_SIGN_IN_ROUTE");
        }

        assert_eq!(config.idle_timeout, Some(Duration::from_secs(120)));
        assert_eq!(config.sign_in_route, "/login");
        assert_eq!(config.admin_home_route, "/");
    }

    #[test]
    #[serial]
    fn test_from_env_defaults_disable_idle_timer() {
        unsafe {
            env::remove_var("DASHBOARD_IDLE_TIMEOUT_SECS");
        }
        let config = CoordinatorConfig::from_env();
        assert_eq!(config.idle_timeout, None);
    }
}
