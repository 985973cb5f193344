//! Session module — the authenticated-identity lifecycle.
//!
//! This module provides:
//! - `Session`, `SessionStatus`, and the opaque `IdentityToken`
//! - The `IdentityProvider` boundary trait and its HTTP implementation
//!   (`provider`)
//! - The on-disk session cache (`cache`)
//! - `SessionManager`, which owns the session state machine
//!
//! The session is owned exclusively by `SessionManager` and handed to
//! other components as a read-only value.  Nothing else mutates it.

pub mod cache;
pub mod provider;

use std::time::Duration;

pub use provider::{HttpIdentityProvider, IdentityProvider, ProviderSession};

use crate::errors::Result;

/// Opaque credential proving the current session's principal to the
/// remote vault.  Treated as a secret: `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct IdentityToken(String);

impl IdentityToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token string, for the transport layer only.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for IdentityToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("IdentityToken(<redacted>)")
    }
}

/// Where the session currently stands.
///
/// `Checking` is transient: it only exists while `check_session` is
/// probing the identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Unauthenticated,
    Checking,
    Authenticated,
}

/// The current session, read-only outside `SessionManager`.
///
/// `principal` is a display label for the signed-in identity (shown by
/// `hexlock status`); the token is what actually proves the identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    status: SessionStatus,
    token: Option<IdentityToken>,
    principal: Option<String>,
}

impl Session {
    /// A session with no identity behind it.
    pub fn unauthenticated() -> Self {
        Self {
            status: SessionStatus::Unauthenticated,
            token: None,
            principal: None,
        }
    }

    /// The transient probing state used inside `check_session`.
    pub fn checking() -> Self {
        Self {
            status: SessionStatus::Checking,
            token: None,
            principal: None,
        }
    }

    /// A session backed by a freshly validated identity token.
    pub fn authenticated(token: IdentityToken, principal: String) -> Self {
        Self {
            status: SessionStatus::Authenticated,
            token: Some(token),
            principal: Some(principal),
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }

    /// The identity token, present only when authenticated.
    pub fn token(&self) -> Option<&IdentityToken> {
        self.token.as_ref()
    }

    pub fn principal(&self) -> Option<&str> {
        self.principal.as_deref()
    }
}

/// Owns the session state machine:
///
/// `Unauthenticated → (login success) → Authenticated → (logout) →
/// Unauthenticated`, with `Checking` transient inside `check_session`.
pub struct SessionManager<P: IdentityProvider> {
    provider: P,
    session: Session,
    max_age: Duration,
}

impl<P: IdentityProvider> SessionManager<P> {
    /// Create a manager starting in the `Unauthenticated` state.
    ///
    /// `max_age` is the maximum session lifetime requested from the
    /// identity provider at sign-in.
    pub fn new(provider: P, max_age: Duration) -> Self {
        Self {
            provider,
            session: Session::unauthenticated(),
            max_age,
        }
    }

    /// The current session, as a read model for callers.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Probe the identity provider for an existing valid session.
    ///
    /// Fail closed: any provider error leaves the session
    /// `Unauthenticated`, so the caller falls back to the sign-in path.
    pub fn check_session(&mut self) -> &Session {
        self.session = Session::checking();
        self.session = match self.provider.check() {
            Ok(Some(existing)) => Session::authenticated(existing.token, existing.principal),
            Ok(None) | Err(_) => Session::unauthenticated(),
        };
        &self.session
    }

    /// Run the provider's interactive sign-in ceremony.
    ///
    /// On success the session becomes `Authenticated` with a freshly
    /// issued token.  On cancellation or failure the session stays
    /// `Unauthenticated` and the error is returned for reporting — it is
    /// never fatal.
    pub fn login(&mut self) -> Result<&Session> {
        match self.provider.login(self.max_age) {
            Ok(issued) => {
                self.session = Session::authenticated(issued.token, issued.principal);
                Ok(&self.session)
            }
            Err(e) => {
                self.session = Session::unauthenticated();
                Err(e)
            }
        }
    }

    /// Revoke the local session unconditionally.
    ///
    /// The local session is dropped before the provider is told, and a
    /// failing revocation call cannot undo it — logout is never blocked
    /// by a remote fault.
    pub fn logout(&mut self) -> &Session {
        self.session = Session::unauthenticated();
        let _ = self.provider.logout();
        &self.session
    }
}

// ── Tests ────────────────────────────────────────────────────────────
