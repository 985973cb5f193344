//! Remote vault boundary.
//!
//! `RemoteVault` mirrors the four operations the remote actor exposes,
//! keyed by identity token.  `edit_entry` and `delete_entry` return
//! what the remote reports: whether a record was actually touched.  The
//! gateway layer above decides what those booleans mean for callers.
//!
//! `HttpRemoteVault` speaks JSON over an authenticated channel, one
//! request per operation (no streaming).  Transport and protocol faults
//! surface as `RemoteUnavailable` / `Unauthorized` / `InvalidArgument`
//! so nothing above this file ever handles a raw HTTP error.

use std::time::Duration;

use crate::errors::{HexLockError, Result};
use crate::gateway::record::CredentialRecord;
use crate::session::IdentityToken;

/// The remote credential actor as the gateway sees it.
pub trait RemoteVault {
    /// Create or overwrite the record keyed by `site`.
    fn add_entry(
        &self,
        token: &IdentityToken,
        site: &str,
        username: &str,
        secret: &str,
    ) -> Result<()>;

    /// All records for this identity, in the remote's return order.
    /// An identity with no records yields an empty list, not an error.
    fn get_entries(&self, token: &IdentityToken) -> Result<Vec<CredentialRecord>>;

    /// Replace username and secret for the record keyed by `site`.
    /// Returns `false` when no such record exists (the remote does not
    /// create one).
    fn edit_entry(
        &self,
        token: &IdentityToken,
        site: &str,
        username: &str,
        secret: &str,
    ) -> Result<bool>;

    /// Remove the record keyed by `site`.  Returns `false` when there
    /// was nothing to remove.
    fn delete_entry(&self, token: &IdentityToken, site: &str) -> Result<bool>;
}

/// What the remote reports back for edit/delete calls.
#[derive(serde::Deserialize)]
struct MutationOutcome {
    /// Whether a record keyed by the given site was found and touched.
    #[serde(default)]
    touched: bool,
}

/// HTTP implementation of the remote vault.
///
/// Operations map onto RPC-style endpoints named after the remote
/// actor's methods, with the record fields in a JSON body and the
/// identity token as a bearer credential.  Site names ride in the body,
/// never in the URL path, so no escaping rules apply to them.
pub struct HttpRemoteVault {
    agent: ureq::Agent,
    base_url: String,
}

impl HttpRemoteVault {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .build();
        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, method: &str) -> String {
        format!("{}/v1/{method}", self.base_url)
    }

    fn bearer(token: &IdentityToken) -> String {
        format!("Bearer {}", token.as_str())
    }

    /// Map an HTTP-level failure into the gateway error taxonomy.
    fn normalize(err: ureq::Error) -> HexLockError {
        match err {
            ureq::Error::Status(401 | 403, _) => HexLockError::Unauthorized,
            ureq::Error::Status(400 | 422, resp) => {
                let detail = resp
                    .into_string()
                    .unwrap_or_else(|_| "rejected by the vault".to_string());
                HexLockError::InvalidArgument(detail)
            }
            ureq::Error::Status(code, _) => {
                HexLockError::RemoteUnavailable(format!("vault returned HTTP {code}"))
            }
            ureq::Error::Transport(t) => HexLockError::RemoteUnavailable(t.to_string()),
        }
    }
}

impl RemoteVault for HttpRemoteVault {
    fn add_entry(
        &self,
        token: &IdentityToken,
        site: &str,
        username: &str,
        secret: &str,
    ) -> Result<()> {
        self.agent
            .post(&self.url("add_entry"))
            .set("Authorization", &Self::bearer(token))
            .send_json(serde_json::json!({
                "site": site,
                "username": username,
                "password": secret,
            }))
            .map_err(Self::normalize)?;
        Ok(())
    }

    fn get_entries(&self, token: &IdentityToken) -> Result<Vec<CredentialRecord>> {
        let resp = self
            .agent
            .get(&self.url("get_entries"))
            .set("Authorization", &Self::bearer(token))
            .call()
            .map_err(Self::normalize)?;

        resp.into_json()
            .map_err(|e| HexLockError::SerializationError(e.to_string()))
    }

    fn edit_entry(
        &self,
        token: &IdentityToken,
        site: &str,
        username: &str,
        secret: &str,
    ) -> Result<bool> {
        let resp = self
            .agent
            .post(&self.url("edit_entry"))
            .set("Authorization", &Self::bearer(token))
            .send_json(serde_json::json!({
                "site": site,
                "username": username,
                "password": secret,
            }))
            .map_err(Self::normalize)?;

        let outcome: MutationOutcome = resp
            .into_json()
            .map_err(|e| HexLockError::SerializationError(e.to_string()))?;
        Ok(outcome.touched)
    }

    fn delete_entry(&self, token: &IdentityToken, site: &str) -> Result<bool> {
        let resp = self
            .agent
            .post(&self.url("delete_entry"))
            .set("Authorization", &Self::bearer(token))
            .send_json(serde_json::json!({ "site": site }))
            .map_err(Self::normalize)?;

        let outcome: MutationOutcome = resp
            .into_json()
            .map_err(|e| HexLockError::SerializationError(e.to_string()))?;
        Ok(outcome.touched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_faults_normalize_to_remote_unavailable() {
        // A closed port produces a transport error, never a panic.
        let vault = HttpRemoteVault::new("http://127.0.0.1:1", Duration::from_millis(200));
        let token = IdentityToken::new("tok");

        let err = vault.get_entries(&token).unwrap_err();
        assert!(matches!(err, HexLockError::RemoteUnavailable(_)));

        let err = vault.add_entry(&token, "a", "b", "c").unwrap_err();
        assert!(matches!(err, HexLockError::RemoteUnavailable(_)));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let vault = HttpRemoteVault::new("http://example.org/", Duration::from_secs(1));
        assert_eq!(vault.url("get_entries"), "http://example.org/v1/get_entries");
    }
}
