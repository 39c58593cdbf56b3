//! Headless authentication forms library
//!
//! This library provides the logic behind a login / sign-up / password
//! reset UI: a password strength evaluator, the render model of its
//! strength bar, form validation, and mocked submit handlers.
//!
//! # Features
//!
//! - `async` (default): Enables the mocked submit handlers and debounced
//!   evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `AUTH_FORMS_LOGIN_DELAY_MS`, `AUTH_FORMS_SIGNUP_DELAY_MS`,
//!   `AUTH_FORMS_FORGOT_DELAY_MS`, `AUTH_FORMS_RESET_DELAY_MS`:
//!   simulated latency of each handler
//! - `AUTH_FORMS_DEMO_EMAIL`, `AUTH_FORMS_DEMO_PASSWORD`: the only
//!   credentials the mocked login accepts
//!   (default: `test@example.com` / `password123`)
//!
//! # Example
//!
//! ```rust
//! use auth_forms::{evaluate, StrengthIndicator, StrengthLabel};
//!
//! let score = evaluate("Abcdefg1!");
//! assert_eq!(score.value(), 4);
//! assert_eq!(score.label(), StrengthLabel::Strong);
//!
//! // Short passwords are always weak
//! assert_eq!(evaluate("Ab1!").label(), StrengthLabel::Weak);
//!
//! let indicator = StrengthIndicator::new(evaluate("Abcdefg1"));
//! assert_eq!(indicator.to_string(), "[###-] Good");
//! ```

// Internal modules
mod auth;
mod config;
mod evaluator;
mod indicator;
mod sections;
mod strength;
mod validation;

// Public API
pub use auth::{AuthError, AuthOutcome, Route, Toast, ToastKind, UserProfile};
pub use config::{AuthConfig, ConfigError};
pub use evaluator::{evaluate, evaluate_password_strength};
pub use indicator::{EMPTY_SEGMENT_CLASS, Segment, StrengthIndicator};
pub use strength::{MAX_SCORE, StrengthEvaluation, StrengthLabel, StrengthScore};
pub use validation::{
    Field, FieldError, ForgotPasswordForm, FormSchema, LoginForm, ResetPasswordForm, SignupForm,
    ValidationErrors, valid_email,
};

#[cfg(feature = "async")]
pub use auth::MockAuthService;

#[cfg(feature = "async")]
pub use evaluator::{DEFAULT_DEBOUNCE, evaluate_password_strength_tx};
