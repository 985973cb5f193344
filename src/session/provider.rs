//! Identity provider boundary.
//!
//! `IdentityProvider` is the seam between the session state machine and
//! whatever actually issues identity tokens.  The production
//! implementation (`HttpIdentityProvider`) talks to the provider over
//! HTTP and keeps the issued token in the local session cache; tests
//! substitute scripted providers.

use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use zeroize::Zeroizing;

use crate::errors::{HexLockError, Result};
use crate::session::{cache, IdentityToken};

/// A valid session as reported by the identity provider.
///
/// `Debug` goes through `IdentityToken`, so the token never prints.
#[derive(Debug)]
pub struct ProviderSession {
    pub token: IdentityToken,
    pub principal: String,
    pub expires_at: DateTime<Utc>,
}

/// The identity provider as the session layer sees it.
///
/// - `check` answers "is there an existing valid session?" and must not
///   run any interactive ceremony.
/// - `login` runs the provider's interactive sign-in ceremony; the
///   caller supplies the maximum session lifetime it will accept.
/// - `logout` revokes the provider-side session; callers treat it as
///   best-effort.
pub trait IdentityProvider {
    fn check(&self) -> Result<Option<ProviderSession>>;
    fn login(&mut self, max_age: Duration) -> Result<ProviderSession>;
    fn logout(&mut self) -> Result<()>;
}

/// What the provider returns from a successful sign-in.
#[derive(Deserialize)]
struct LoginResponse {
    token: String,
    principal: String,
    /// Provider-side lifetime, when shorter than what we asked for.
    #[serde(default)]
    expires_in_secs: Option<u64>,
}

/// HTTP identity provider with a local session cache.
pub struct HttpIdentityProvider {
    agent: ureq::Agent,
    base_url: String,
    cache_dir: PathBuf,
}

impl HttpIdentityProvider {
    /// Create a provider client for `base_url`, caching sessions under
    /// `cache_dir`.
    ///
    /// The request timeout doubles as the upper bound on how long any
    /// session probe can block.
    pub fn new(base_url: &str, cache_dir: PathBuf, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .build();
        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            cache_dir,
        }
    }

    fn session_url(&self) -> String {
        format!("{}/v1/session", self.base_url)
    }

    /// Read the cached session, pulling the token from the OS keyring
    /// when the `keyring-store` feature keeps it there.
    fn read_cached(&self) -> Option<cache::CachedSession> {
        #[allow(unused_mut)]
        let mut cached = cache::read(&self.cache_dir)?;

        #[cfg(feature = "keyring-store")]
        if cached.token.is_empty() {
            match crate::keyring::get_token(&self.base_url) {
                Ok(Some(token)) => cached.token = token,
                _ => {}
            }
        }

        if cached.token.is_empty() {
            return None;
        }
        Some(cached)
    }

    /// Drop the cached session everywhere it may live.
    fn clear_cached(&self) {
        cache::clear(&self.cache_dir);

        #[cfg(feature = "keyring-store")]
        let _ = crate::keyring::delete_token(&self.base_url);
    }

    /// Persist a freshly issued session.
    #[allow(unused_mut)]
    fn store_cached(&self, mut cached: cache::CachedSession) -> Result<()> {
        #[cfg(feature = "keyring-store")]
        {
            crate::keyring::store_token(&self.base_url, &cached.token)?;
            cached.token.clear();
        }

        cache::write(&self.cache_dir, &cached)
    }

    /// Obtain the sign-in passphrase: `HEXLOCK_PASSPHRASE` for CI/CD,
    /// otherwise an interactive prompt.  An aborted prompt is the user
    /// cancelling the ceremony.
    fn obtain_passphrase() -> Result<Zeroizing<String>> {
        if let Ok(pw) = std::env::var("HEXLOCK_PASSPHRASE") {
            if !pw.is_empty() {
                return Ok(Zeroizing::new(pw));
            }
        }

        let pw = dialoguer::Password::new()
            .with_prompt("Identity passphrase")
            .interact()
            .map_err(|_| HexLockError::ProviderCanceled)?;
        Ok(Zeroizing::new(pw))
    }
}

impl IdentityProvider for HttpIdentityProvider {
    /// Validate any cached session against the provider.
    ///
    /// An expired or provider-rejected cache entry is discarded and
    /// reported as "no session".  Transport faults are returned as
    /// errors; the session manager fails closed on them.
    fn check(&self) -> Result<Option<ProviderSession>> {
        let Some(cached) = self.read_cached() else {
            return Ok(None);
        };

        if cached.is_expired() {
            self.clear_cached();
            return Ok(None);
        }

        let bearer = format!("Bearer {}", cached.token);
        match self
            .agent
            .get(&self.session_url())
            .set("Authorization", &bearer)
            .call()
        {
            Ok(_) => Ok(Some(ProviderSession {
                token: IdentityToken::new(cached.token),
                principal: cached.principal,
                expires_at: cached.expires_at,
            })),
            Err(ureq::Error::Status(401 | 403, _)) => {
                // The provider no longer recognizes this token.
                self.clear_cached();
                Ok(None)
            }
            Err(ureq::Error::Status(code, _)) => Err(HexLockError::RemoteUnavailable(format!(
                "identity provider returned HTTP {code}"
            ))),
            Err(ureq::Error::Transport(t)) => {
                Err(HexLockError::RemoteUnavailable(t.to_string()))
            }
        }
    }

    /// The interactive sign-in ceremony.
    ///
    /// Resolves to the issued session or an error; there is no callback
    /// path.  A rejected passphrase is reported at the form level and is
    /// never retried automatically.
    fn login(&mut self, max_age: Duration) -> Result<ProviderSession> {
        let passphrase = Self::obtain_passphrase()?;

        let response = self
            .agent
            .post(&self.session_url())
            .send_json(serde_json::json!({
                "passphrase": passphrase.as_str(),
                "max_age_secs": max_age.as_secs(),
            }));

        let issued: LoginResponse = match response {
            Ok(resp) => resp
                .into_json()
                .map_err(|e| HexLockError::SerializationError(e.to_string()))?,
            Err(ureq::Error::Status(401 | 403, _)) => {
                return Err(HexLockError::InvalidArgument(
                    "identity provider rejected the sign-in".into(),
                ));
            }
            Err(ureq::Error::Status(code, _)) => {
                return Err(HexLockError::RemoteUnavailable(format!(
                    "identity provider returned HTTP {code}"
                )));
            }
            Err(ureq::Error::Transport(t)) => {
                return Err(HexLockError::RemoteUnavailable(t.to_string()));
            }
        };

        // The provider may cap the lifetime below what we requested.
        let lifetime_secs = issued
            .expires_in_secs
            .map_or(max_age.as_secs(), |provider| provider.min(max_age.as_secs()));
        let now = Utc::now();
        let expires_at = now + chrono::Duration::seconds(lifetime_secs as i64);

        self.store_cached(cache::CachedSession {
            token: issued.token.clone(),
            principal: issued.principal.clone(),
            issued_at: now,
            expires_at,
        })?;

        Ok(ProviderSession {
            token: IdentityToken::new(issued.token),
            principal: issued.principal,
            expires_at,
        })
    }

    /// Revoke the session.
    ///
    /// The local cache is dropped before the provider is told, so a
    /// failing revocation call leaves no usable session behind.
    fn logout(&mut self) -> Result<()> {
        let cached = self.read_cached();
        self.clear_cached();

        let Some(cached) = cached else {
            return Ok(());
        };

        let bearer = format!("Bearer {}", cached.token);
        match self
            .agent
            .delete(&self.session_url())
            .set("Authorization", &bearer)
            .call()
        {
            Ok(_) => Ok(()),
            Err(ureq::Error::Status(401 | 403, _)) => Ok(()), // already revoked
            Err(ureq::Error::Status(code, _)) => Err(HexLockError::RemoteUnavailable(format!(
                "identity provider returned HTTP {code}"
            ))),
            Err(ureq::Error::Transport(t)) => {
                Err(HexLockError::RemoteUnavailable(t.to_string()))
            }
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────
