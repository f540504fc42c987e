//! Login-gate stub.
//!
//! # Responsibility
//! - Gate dashboard entry behind a single hardcoded credential pair.
//! - Round-trip the `isAuthenticated` flag through the store.
//!
//! # Invariants
//! - This is not an authentication system and must not grow into one:
//!   no hashing, no sessions, no user records. Out of scope by contract.
//! - Failed logins leave the store untouched.

use crate::model::employee::IS_AUTHENTICATED_KEY;
use crate::store::{StoreAdapter, StoreError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

const ADMIN_EMAIL: &str = "admin@bookxpert.com";
const ADMIN_PASSWORD: &str = "admin123";

pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Debug)]
pub enum AuthError {
    /// Email/password pair does not match the fixed credentials.
    InvalidCredentials,
    Store(StoreError),
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCredentials => {
                write!(f, "Invalid credentials. Hint: {ADMIN_EMAIL} / {ADMIN_PASSWORD}")
            }
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AuthError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidCredentials => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for AuthError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Compares against the fixed pair and marks the session logged in.
pub fn login<S: StoreAdapter>(store: &mut S, email: &str, password: &str) -> AuthResult<()> {
    if email != ADMIN_EMAIL || password != ADMIN_PASSWORD {
        info!("event=login module=auth status=denied");
        return Err(AuthError::InvalidCredentials);
    }

    store.set(IS_AUTHENTICATED_KEY, "true")?;
    info!("event=login module=auth status=ok");
    Ok(())
}

/// Clears the logged-in flag. Safe to call when already logged out.
pub fn logout<S: StoreAdapter>(store: &mut S) -> AuthResult<()> {
    store.remove(IS_AUTHENTICATED_KEY)?;
    info!("event=logout module=auth status=ok");
    Ok(())
}

/// Returns whether the store carries the literal logged-in marker.
pub fn is_authenticated<S: StoreAdapter>(store: &S) -> AuthResult<bool> {
    Ok(store.get(IS_AUTHENTICATED_KEY)?.as_deref() == Some("true"))
}
