//! Form schemas and field validation.
//!
//! Rules are declared with `validator`; lengths count UTF-16 code units so
//! they agree with what a browser input reports. A rejected form keeps its
//! fields in declaration order with at most one message each: the first
//! rule that failed.

use std::borrow::Cow;
use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use validator::{Validate, ValidateEmail, ValidationError};

use crate::sections::{MIN_LENGTH, utf16_len};

pub const MIN_NAME_LENGTH: usize = 2;

/// Key `validator` files struct-level (schema) errors under.
const SCHEMA_KEY: &str = "__all__";

/// Email check: `validator`'s address syntax plus an alphabetic top-level
/// domain of two or more letters, so `a@b` and `a@b.c` are rejected.
pub fn valid_email(email: &str) -> bool {
    email.validate_email() && top_level_domain(email).is_ok()
}

fn top_level_domain(email: &str) -> Result<(), ValidationError> {
    let tld = email
        .rsplit_once('@')
        .and_then(|(_, domain)| domain.rsplit_once('.'))
        .map(|(_, tld)| tld)
        .unwrap_or_default();

    if tld.len() < 2 || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ValidationError::new("email_tld"));
    }
    Ok(())
}

fn name_length(name: &str) -> Result<(), ValidationError> {
    if utf16_len(name) < MIN_NAME_LENGTH {
        return Err(ValidationError::new("name_length"));
    }
    Ok(())
}

fn password_present(password: &SecretString) -> Result<(), ValidationError> {
    if password.expose_secret().is_empty() {
        return Err(ValidationError::new("password_required"));
    }
    Ok(())
}

fn password_length(password: &SecretString) -> Result<(), ValidationError> {
    if utf16_len(password.expose_secret()) < MIN_LENGTH {
        return Err(ValidationError::new("password_length"));
    }
    Ok(())
}

fn passwords_match(form: &ResetPasswordForm) -> Result<(), ValidationError> {
    if form.password.expose_secret() != form.confirm_password.expose_secret() {
        return Err(ValidationError::new("passwords_match")
            .with_message(Cow::Borrowed("Passwords don't match")));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirm_password",
        }
    }

    /// Where `validator` reports this field's errors. The password match
    /// is a schema rule, shown under the confirmation field.
    fn source_key(self) -> &'static str {
        match self {
            Field::ConfirmPassword => SCHEMA_KEY,
            other => other.as_str(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: Field,
    pub message: Cow<'static, str>,
}

/// All field errors of a rejected form, in field order.
#[derive(Error, Debug, Clone, PartialEq, Eq, Default)]
#[error("{}", join_messages(.0))]
pub struct ValidationErrors(Vec<FieldError>);

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_ref())
        .collect::<Vec<_>>()
        .join(" ")
}

impl ValidationErrors {
    /// Keeps the first error of each of `fields`, in the order given.
    fn from_validator(errors: &validator::ValidationErrors, fields: &[Field]) -> Self {
        let by_field = errors.field_errors();
        let collected = fields
            .iter()
            .filter_map(|&field| {
                let first = by_field.get(field.source_key())?.first()?;
                let message = first
                    .message
                    .clone()
                    .unwrap_or_else(|| first.code.clone());
                Some(FieldError { field, message })
            })
            .collect();
        Self(collected)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Message to show under `field`, if it failed.
    pub fn message(&self, field: Field) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_ref())
    }
}

/// A form whose `validator` rules report into [`ValidationErrors`].
pub trait FormSchema: Validate {
    /// Fields in display order.
    const FIELDS: &'static [Field];

    fn check(&self) -> Result<(), ValidationErrors> {
        self.validate()
            .map_err(|errors| ValidationErrors::from_validator(&errors, Self::FIELDS))
    }
}

fn secret(value: impl Into<String>) -> SecretString {
    SecretString::new(value.into().into())
}

#[derive(Debug, Validate)]
pub struct LoginForm {
    #[validate(email(message = "Invalid email address."))]
    #[validate(custom(function = "top_level_domain", message = "Invalid email address."))]
    pub email: String,
    #[validate(custom(function = "password_present", message = "Password is required."))]
    pub password: SecretString,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: secret(password),
        }
    }
}

impl FormSchema for LoginForm {
    const FIELDS: &'static [Field] = &[Field::Email, Field::Password];
}

#[derive(Debug, Validate)]
pub struct SignupForm {
    #[validate(custom(function = "name_length", message = "Name must be at least 2 characters."))]
    pub name: String,
    #[validate(email(message = "Invalid email address."))]
    #[validate(custom(function = "top_level_domain", message = "Invalid email address."))]
    pub email: String,
    #[validate(custom(
        function = "password_length",
        message = "Password must be at least 8 characters."
    ))]
    pub password: SecretString,
}

impl SignupForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: secret(password),
        }
    }
}

impl FormSchema for SignupForm {
    const FIELDS: &'static [Field] = &[Field::Name, Field::Email, Field::Password];
}

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct ForgotPasswordForm {
    #[validate(email(message = "Please enter a valid email address."))]
    #[validate(custom(
        function = "top_level_domain",
        message = "Please enter a valid email address."
    ))]
    pub email: String,
}

impl ForgotPasswordForm {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

impl FormSchema for ForgotPasswordForm {
    const FIELDS: &'static [Field] = &[Field::Email];
}

/// The match check is a schema rule: it only runs once the field rules pass.
#[derive(Debug, Validate)]
#[validate(schema(function = "passwords_match", skip_on_field_errors = true))]
pub struct ResetPasswordForm {
    #[validate(custom(
        function = "password_length",
        message = "Password must be at least 8 characters long."
    ))]
    pub password: SecretString,
    pub confirm_password: SecretString,
}

impl ResetPasswordForm {
    pub fn new(password: impl Into<String>, confirm_password: impl Into<String>) -> Self {
        Self {
            password: secret(password),
            confirm_password: secret(confirm_password),
        }
    }
}

impl FormSchema for ResetPasswordForm {
    const FIELDS: &'static [Field] = &[Field::Password, Field::ConfirmPassword];
}
