//! Mock backend configuration
//!
//! Latencies and the demo credential pair used by the simulated submit
//! handlers, overridable through environment variables.

use std::time::Duration;
use thiserror::Error;

pub const LOGIN_DELAY_VAR: &str = "AUTH_FORMS_LOGIN_DELAY_MS";
pub const SIGNUP_DELAY_VAR: &str = "AUTH_FORMS_SIGNUP_DELAY_MS";
pub const FORGOT_DELAY_VAR: &str = "AUTH_FORMS_FORGOT_DELAY_MS";
pub const RESET_DELAY_VAR: &str = "AUTH_FORMS_RESET_DELAY_MS";
pub const DEMO_EMAIL_VAR: &str = "AUTH_FORMS_DEMO_EMAIL";
pub const DEMO_PASSWORD_VAR: &str = "AUTH_FORMS_DEMO_PASSWORD";

pub const DEFAULT_DEMO_EMAIL: &str = "test@example.com";
pub const DEFAULT_DEMO_PASSWORD: &str = "password123";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a delay in milliseconds, got {value:?}")]
    InvalidDelay { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    pub login_delay: Duration,
    pub signup_delay: Duration,
    pub forgot_password_delay: Duration,
    pub reset_password_delay: Duration,
    pub demo_email: String,
    pub demo_password: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_delay: Duration::from_millis(1500),
            signup_delay: Duration::from_millis(1500),
            forgot_password_delay: Duration::from_millis(1000),
            reset_password_delay: Duration::from_millis(2000),
            demo_email: DEFAULT_DEMO_EMAIL.to_string(),
            demo_password: DEFAULT_DEMO_PASSWORD.to_string(),
        }
    }
}

impl AuthConfig {
    /// Defaults with every delay set to zero.
    pub fn instant() -> Self {
        Self {
            login_delay: Duration::ZERO,
            signup_delay: Duration::ZERO,
            forgot_password_delay: Duration::ZERO,
            reset_password_delay: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Reads the configuration from the environment.
    ///
    /// Unset variables keep their default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDelay`] if a delay variable is not a
    /// non-negative integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            login_delay: delay_from_env(LOGIN_DELAY_VAR, defaults.login_delay)?,
            signup_delay: delay_from_env(SIGNUP_DELAY_VAR, defaults.signup_delay)?,
            forgot_password_delay: delay_from_env(FORGOT_DELAY_VAR, defaults.forgot_password_delay)?,
            reset_password_delay: delay_from_env(RESET_DELAY_VAR, defaults.reset_password_delay)?,
            demo_email: std::env::var(DEMO_EMAIL_VAR).unwrap_or(defaults.demo_email),
            demo_password: std::env::var(DEMO_PASSWORD_VAR).unwrap_or(defaults.demo_password),
        };

        #[cfg(feature = "tracing")]
        tracing::info!(
            login_delay = ?config.login_delay,
            signup_delay = ?config.signup_delay,
            forgot_password_delay = ?config.forgot_password_delay,
            reset_password_delay = ?config.reset_password_delay,
            "Mock auth configuration loaded"
        );

        Ok(config)
    }
}

fn delay_from_env(var: &'static str, default: Duration) -> Result<Duration, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| ConfigError::InvalidDelay { var, value }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: only called from #[serial] tests
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: only called from #[serial] tests
        unsafe { std::env::remove_var(key); }
    }

    fn clear_all() {
        for var in [
            LOGIN_DELAY_VAR,
            SIGNUP_DELAY_VAR,
            FORGOT_DELAY_VAR,
            RESET_DELAY_VAR,
            DEMO_EMAIL_VAR,
            DEMO_PASSWORD_VAR,
        ] {
            remove_env(var);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_all();
        assert_eq!(AuthConfig::from_env(), Ok(AuthConfig::default()));
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_all();
        set_env(LOGIN_DELAY_VAR, "10");
        set_env(DEMO_EMAIL_VAR, "demo@example.com");

        let config = AuthConfig::from_env().unwrap();
        assert_eq!(config.login_delay, Duration::from_millis(10));
        assert_eq!(config.signup_delay, Duration::from_millis(1500));
        assert_eq!(config.demo_email, "demo@example.com");
        assert_eq!(config.demo_password, DEFAULT_DEMO_PASSWORD);

        clear_all();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_delay() {
        clear_all();
        set_env(RESET_DELAY_VAR, "soon");

        let result = AuthConfig::from_env();
        assert_eq!(
            result,
            Err(ConfigError::InvalidDelay {
                var: RESET_DELAY_VAR,
                value: "soon".to_string()
            })
        );

        clear_all();
    }

    #[test]
    #[serial]
    fn test_from_env_accepts_largest_delay() {
        clear_all();
        set_env(SIGNUP_DELAY_VAR, &u64::MAX.to_string());

        let config = AuthConfig::from_env().unwrap();
        assert_eq!(config.signup_delay, Duration::from_millis(u64::MAX));

        clear_all();
    }

    #[test]
    fn test_instant_keeps_credentials() {
        let config = AuthConfig::instant();
        assert_eq!(config.forgot_password_delay, Duration::ZERO);
        assert_eq!(config.demo_email, DEFAULT_DEMO_EMAIL);
    }
}
