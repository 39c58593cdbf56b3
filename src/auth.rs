//! Simulated authentication backend.
//!
//! Submit handlers validate their form, wait a fixed latency to mimic a
//! network call, then resolve to a toast and an optional redirect. Only
//! login can fail after the delay, when the credentials differ from the
//! configured demo pair.

use std::fmt;

use thiserror::Error;

use crate::validation::ValidationErrors;

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use secrecy::ExposeSecret;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

#[cfg(feature = "async")]
use crate::config::AuthConfig;

#[cfg(feature = "async")]
use crate::validation::{ForgotPasswordForm, FormSchema, LoginForm, ResetPasswordForm, SignupForm};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    SignUp,
    ForgotPassword,
    ResetPassword,
    Dashboard,
    TermsOfService,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::SignUp => "/sign-up",
            Route::ForgotPassword => "/forgot-password",
            Route::ResetPassword => "/reset-password",
            Route::Dashboard => "/dashboard",
            Route::TermsOfService => "/terms-of-service",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        [
            Route::Login,
            Route::SignUp,
            Route::ForgotPassword,
            Route::ResetPassword,
            Route::Dashboard,
            Route::TermsOfService,
        ]
        .into_iter()
        .find(|route| route.path() == path)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

impl Toast {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            title: title.into(),
            description: None,
        }
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            title: title.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// What the UI does once a submission resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthOutcome {
    pub toast: Toast,
    pub redirect: Option<Route>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("{0}")]
    Validation(#[from] ValidationErrors),
    #[error("Invalid email or password. Please try again.")]
    InvalidCredentials,
    #[error("You must agree to the Terms of Service to continue.")]
    TermsNotAccepted,
    #[error("Request cancelled")]
    Cancelled,
}

impl AuthError {
    /// Toast shown for this failure. Validation errors are shown inline
    /// under their fields and cancellations are silent.
    pub fn toast(&self) -> Option<Toast> {
        match self {
            AuthError::InvalidCredentials => Some(Toast::error("Login Failed")),
            AuthError::TermsNotAccepted => Some(Toast::error(self.to_string())),
            AuthError::Validation(_) | AuthError::Cancelled => None,
        }
    }
}

/// Signed-in user shown in the dashboard header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// First letter of each word, uppercased: "Jane Doe" -> "JD".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Toast shown when the dashboard opens.
    pub fn welcome_toast(&self) -> Toast {
        Toast::success("Login successful!").with_description(format!("Welcome back, {}.", self.name))
    }
}

/// Waits `delay`, or returns early with [`AuthError::Cancelled`].
#[cfg(feature = "async")]
async fn simulate_latency(
    delay: Duration,
    token: Option<&CancellationToken>,
) -> Result<(), AuthError> {
    match token {
        Some(token) => tokio::select! {
            biased;
            _ = token.cancelled() => Err(AuthError::Cancelled),
            _ = tokio::time::sleep(delay) => Ok(()),
        },
        None => {
            tokio::time::sleep(delay).await;
            Ok(())
        }
    }
}

#[cfg(feature = "async")]
#[derive(Debug, Clone, Default)]
pub struct MockAuthService {
    config: AuthConfig,
}

#[cfg(feature = "async")]
impl MockAuthService {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Succeeds only for the configured demo credentials.
    pub async fn login(
        &self,
        form: &LoginForm,
        token: Option<&CancellationToken>,
    ) -> Result<AuthOutcome, AuthError> {
        form.check()?;

        #[cfg(feature = "tracing")]
        tracing::info!(email = %form.email, "Login form submitted");

        simulate_latency(self.config.login_delay, token).await?;

        if form.email != self.config.demo_email
            || form.password.expose_secret() != self.config.demo_password
        {
            #[cfg(feature = "tracing")]
            tracing::warn!(email = %form.email, "Login failed: invalid credentials");
            return Err(AuthError::InvalidCredentials);
        }

        Ok(AuthOutcome {
            toast: Toast::success("Login Successful!"),
            redirect: Some(Route::Dashboard),
        })
    }

    /// Field errors win over the terms check; the delay only starts once both pass.
    pub async fn sign_up(
        &self,
        form: &SignupForm,
        agreed_to_terms: bool,
        token: Option<&CancellationToken>,
    ) -> Result<AuthOutcome, AuthError> {
        form.check()?;
        if !agreed_to_terms {
            #[cfg(feature = "tracing")]
            tracing::warn!("Sign up rejected: terms not accepted");
            return Err(AuthError::TermsNotAccepted);
        }

        #[cfg(feature = "tracing")]
        tracing::info!(name = %form.name, email = %form.email, "Signing up");

        simulate_latency(self.config.signup_delay, token).await?;

        Ok(AuthOutcome {
            toast: Toast::success("Account created successfully!")
                .with_description("Redirecting you to the dashboard..."),
            redirect: Some(Route::Dashboard),
        })
    }

    /// Always reports success, whether or not the address is known.
    pub async fn request_password_reset(
        &self,
        form: &ForgotPasswordForm,
        token: Option<&CancellationToken>,
    ) -> Result<AuthOutcome, AuthError> {
        form.check()?;

        #[cfg(feature = "tracing")]
        tracing::info!(email = %form.email, "Password reset requested");

        simulate_latency(self.config.forgot_password_delay, token).await?;

        Ok(AuthOutcome {
            toast: Toast::success(
                "If an account exists with that email, a reset link has been sent.",
            ),
            redirect: None,
        })
    }

    pub async fn reset_password(
        &self,
        form: &ResetPasswordForm,
        token: Option<&CancellationToken>,
    ) -> Result<AuthOutcome, AuthError> {
        form.check()?;

        #[cfg(feature = "tracing")]
        tracing::info!("Reset password form submitted");

        simulate_latency(self.config.reset_password_delay, token).await?;

        Ok(AuthOutcome {
            toast: Toast::success("Password has been successfully changed.")
                .with_description("You have been logged in automatically."),
            redirect: Some(Route::Dashboard),
        })
    }

    pub fn logout(&self) -> Route {
        #[cfg(feature = "tracing")]
        tracing::info!("User logged out");

        Route::Login
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Login.path(), "/");
        assert_eq!(Route::Dashboard.to_string(), "/dashboard");
        assert_eq!(Route::from_path("/sign-up"), Some(Route::SignUp));
        assert_eq!(Route::from_path("/nowhere"), None);
    }

    #[test]
    fn test_user_initials() {
        assert_eq!(UserProfile::new("Jane Doe", "jane.doe@example.com").initials(), "JD");
        assert_eq!(UserProfile::new("ada", "ada@example.com").initials(), "A");
    }

    #[test]
    fn test_welcome_toast() {
        let toast = UserProfile::new("Jane Doe", "jane.doe@example.com").welcome_toast();
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.description.as_deref(), Some("Welcome back, Jane Doe."));
    }

    #[test]
    fn test_error_toasts() {
        assert_eq!(
            AuthError::InvalidCredentials.toast(),
            Some(Toast::error("Login Failed"))
        );
        assert_eq!(
            AuthError::TermsNotAccepted.toast().map(|t| t.title),
            Some("You must agree to the Terms of Service to continue.".to_string())
        );
        assert_eq!(AuthError::Cancelled.toast(), None);
    }
}
