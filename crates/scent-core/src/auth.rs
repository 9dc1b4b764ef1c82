//! # Admin Authentication
//!
//! A two-state session gating the admin panel.
//!
//! ```text
//!              login(ok)
//!   ┌───────────┐ ─────────► ┌──────────┐
//!   │ LoggedOut │            │ LoggedIn │
//!   └───────────┘ ◄───────── └──────────┘
//!     │    ▲        logout
//!     └────┘ login(wrong) → InvalidCredentials
//! ```
//!
//! ## Security
//! There is none. [`StaticPassword`] compares against a plaintext literal
//! held in memory. It is a placeholder so the panel can be demoed, and must
//! not be reused where access control matters. The literal and the typed
//! password are kept out of `Debug` output.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

/// Default demo credential.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Decides whether a password opens the admin panel.
pub trait Authenticator {
    fn verify(&self, candidate: &str) -> bool;
}

/// Insecure placeholder: plaintext equality against a fixed string.
#[derive(Debug, Clone)]
pub struct StaticPassword {
    password: SecretString,
}

impl StaticPassword {
    pub fn new(password: impl Into<String>) -> Self {
        StaticPassword {
            password: SecretString::from(password.into()),
        }
    }

    pub fn from_secret(password: SecretString) -> Self {
        StaticPassword { password }
    }
}

impl Default for StaticPassword {
    fn default() -> Self {
        StaticPassword::new(DEFAULT_ADMIN_PASSWORD)
    }
}

impl Authenticator for StaticPassword {
    fn verify(&self, candidate: &str) -> bool {
        candidate == self.password.expose_secret()
    }
}

/// Admin session state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    LoggedOut,
    LoggedIn,
}

/// The admin session plus the password box contents.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AdminSession {
    state: SessionState,
    password_input: String,
}

impl AdminSession {
    pub fn new() -> Self {
        AdminSession::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_logged_in(&self) -> bool {
        self.state == SessionState::LoggedIn
    }

    /// Current password box contents.
    pub fn password_input(&self) -> &str {
        &self.password_input
    }

    /// Mirrors typing into the password box.
    pub fn set_password_input(&mut self, input: impl Into<String>) {
        self.password_input = input.into();
    }

    /// Checks the typed password.
    ///
    /// On a mismatch the session stays as it was and `InvalidCredentials`
    /// is returned. Logging in while already logged in re-checks the
    /// password but cannot log out.
    pub fn login(&mut self, auth: &dyn Authenticator) -> CoreResult<()> {
        if !auth.verify(&self.password_input) {
            return Err(CoreError::InvalidCredentials);
        }
        self.state = SessionState::LoggedIn;
        Ok(())
    }

    /// Ends the session and clears the password box.
    pub fn logout(&mut self) {
        self.state = SessionState::LoggedOut;
        self.password_input.clear();
    }

    /// Fails with `Unauthorized` unless logged in.
    pub fn require_admin(&self) -> CoreResult<()> {
        if self.is_logged_in() {
            Ok(())
        } else {
            Err(CoreError::Unauthorized)
        }
    }
}

impl fmt::Debug for AdminSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminSession")
            .field("state", &self.state)
            .field("password_input", &"[REDACTED]")
            .finish()
    }
}
