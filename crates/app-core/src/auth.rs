//! Authentication flows
//!
//! Login, sign-up and password reset. There is no backend: each flow
//! validates its form, waits a simulated round trip and then signs the user
//! into the shared store.

use crate::Timings;
use app_state::{AppStore, User};
use chrono::Utc;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::{info, warn};

/// Minimum password length
pub const MIN_PASSWORD_LEN: usize = 6;

/// Minimum trimmed name length
pub const MIN_NAME_LEN: usize = 2;

/// Points a new account starts with
pub const SIGN_UP_POINTS: u64 = 100;

/// Shown after a successful login
pub const LOGIN_WELCOME: &str = "Welcome back to EcoStep!";

/// Shown after a successful sign-up
pub const SIGN_UP_WELCOME: &str = "Welcome to EcoStep! 🎉";

/// Authentication error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// One or more form fields are invalid
    #[error("{0}")]
    Validation(FieldErrors),
}

/// Result type for authentication operations
pub type Result<T> = std::result::Result<T, AuthError>;

/// Form fields that can carry an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    /// Full name
    Name,
    /// Email address
    Email,
    /// Password
    Password,
    /// Password confirmation
    ConfirmPassword,
    /// Terms checkbox
    Terms,
}

/// Per-field validation messages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    /// Message for a field
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Whether the form is valid
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of invalid fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Clear a field's error, as typing into it does
    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    fn set(&mut self, field: Field, message: &str) {
        self.0.insert(field, message.to_string());
    }

    fn into_result(self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(AuthError::Validation(self))
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.values().map(String::as_str).collect();
        write!(f, "{}", messages.join("\n"))
    }
}

/// Whether a string looks like an email address
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"))
        .is_match(email)
}

fn check_email(errors: &mut FieldErrors, email: &str) {
    let email = email.trim();
    if email.is_empty() {
        errors.set(Field::Email, "Email is required");
    } else if !is_valid_email(email) {
        errors.set(Field::Email, "Please enter a valid email address");
    }
}

/// Login form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    /// Email address
    pub email: String,
    /// Password
    pub password: String,
}

impl LoginForm {
    /// Form with both fields filled
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Validate every field
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        check_email(&mut errors, &self.email);
        if self.password.trim().is_empty() {
            errors.set(Field::Password, "Password is required");
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.set(Field::Password, "Password must be at least 6 characters");
        }
        errors
    }
}

/// Sign-up form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpForm {
    /// Full name
    pub name: String,
    /// Email address
    pub email: String,
    /// Password
    pub password: String,
    /// Password again
    pub confirm_password: String,
    /// Terms and conditions accepted
    pub accepted_terms: bool,
}

impl SignUpForm {
    /// Validate every field
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.set(Field::Name, "Full name is required");
        } else if name.chars().count() < MIN_NAME_LEN {
            errors.set(Field::Name, "Name must be at least 2 characters");
        }

        check_email(&mut errors, &self.email);

        if self.password.is_empty() {
            errors.set(Field::Password, "Password is required");
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.set(Field::Password, "Password must be at least 6 characters");
        }

        if self.confirm_password.is_empty() {
            errors.set(Field::ConfirmPassword, "Please confirm your password");
        } else if self.password != self.confirm_password {
            errors.set(Field::ConfirmPassword, "Passwords do not match");
        }

        if !self.accepted_terms {
            errors.set(Field::Terms, "Please accept the terms and conditions");
        }

        errors
    }
}

/// Holds the store's loading flag up until dropped
///
/// Clears the flag on every exit path, including a cancelled request.
struct LoadingGuard<'a>(&'a AppStore);

impl<'a> LoadingGuard<'a> {
    fn new(store: &'a AppStore) -> Self {
        store.set_loading(true);
        Self(store)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.set_loading(false);
    }
}

/// Runs the auth flows against the store
#[derive(Debug, Clone)]
pub struct AuthService {
    store: AppStore,
    timings: Timings,
}

impl AuthService {
    /// Create an auth service
    pub fn new(store: AppStore, timings: Timings) -> Self {
        Self { store, timings }
    }

    /// Validate, wait, then sign in
    ///
    /// The user is named after the local part of the email and gets a random
    /// streak between 1 and 30 days.
    pub async fn login(&self, form: &LoginForm) -> Result<User> {
        let errors = form.validate();
        if !errors.is_empty() {
            warn!(fields = errors.len(), "Login form invalid");
            return Err(AuthError::Validation(errors));
        }

        let _loading = LoadingGuard::new(&self.store);
        tokio::time::sleep(self.timings.auth()).await;

        let email = form.email.trim();
        let name = email.split('@').next().unwrap_or(email);
        let streak = rand::thread_rng().gen_range(1..=30);
        let user = User::new("1", name, email).with_streak(streak);

        self.store.login(user.clone());
        info!(user = %user.name, "Logged in");
        Ok(user)
    }

    /// Validate, wait, then create and sign in a new account
    pub async fn sign_up(&self, form: &SignUpForm) -> Result<User> {
        form.validate().into_result().inspect_err(|_| warn!("Sign-up form invalid"))?;

        let _loading = LoadingGuard::new(&self.store);
        tokio::time::sleep(self.timings.auth()).await;

        let user = User::new(
            Utc::now().timestamp_millis().to_string(),
            form.name.trim(),
            form.email.trim().to_lowercase(),
        )
        .with_streak(0)
        .with_level(app_state::session::DEFAULT_LEVEL)
        .with_eco_points(SIGN_UP_POINTS);

        self.store.login(user.clone());
        info!(user = %user.name, "Account created");
        Ok(user)
    }

    /// Sign out
    pub fn logout(&self) {
        self.store.logout();
    }
}

/// Quick reset from the login screen
///
/// Returns the confirmation text or the dialog explaining what is missing.
pub fn quick_password_reset(email: &str) -> std::result::Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Please enter your email address first.");
    }
    if !is_valid_email(email) {
        return Err("Please enter a valid email address.");
    }
    Ok(format!(
        "A password reset link has been sent to {}. Please check your email and follow the instructions.",
        email
    ))
}

/// State of the forgot-password screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetState {
    /// Entering the email
    #[default]
    Editing,
    /// Waiting on the simulated send
    Sending,
    /// Reset email sent
    Sent,
}

/// The forgot-password screen
#[derive(Debug, Clone, Default)]
pub struct ForgotPassword {
    email: String,
    error: Option<String>,
    state: ResetState,
}

impl ForgotPassword {
    /// Empty screen
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the email field
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Current error
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Current state
    pub fn state(&self) -> ResetState {
        self.state
    }

    /// Validate and simulate sending the reset email
    pub async fn send(&mut self, timings: &Timings) -> Result<()> {
        self.error = None;
        let mut errors = FieldErrors::default();
        check_email(&mut errors, &self.email);
        if let Some(message) = errors.get(Field::Email) {
            self.error = Some(message.to_string());
            return Err(AuthError::Validation(errors));
        }

        self.state = ResetState::Sending;
        tokio::time::sleep(timings.password_reset()).await;
        self.state = ResetState::Sent;
        info!("Password reset email sent");
        Ok(())
    }
}
