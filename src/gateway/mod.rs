//! Gateway module — typed façade over the remote credential actor.
//!
//! This module provides:
//! - `CredentialRecord` (`record`)
//! - The `RemoteVault` boundary trait and its HTTP implementation
//!   (`remote`)
//! - `CredentialGateway`, which gates every operation on an
//!   authenticated session and normalizes remote failures
//!
//! The gateway is the only component allowed to talk to the remote
//! vault.  Its contract: no remote call ever happens without an
//! `Authenticated` session, and no raw transport fault ever escapes it.

pub mod record;
pub mod remote;

pub use record::CredentialRecord;
pub use remote::{HttpRemoteVault, RemoteVault};

use crate::errors::{HexLockError, Result};
use crate::session::{IdentityToken, Session};

/// Longest accepted site or username.
const MAX_FIELD_LEN: usize = 256;

/// Longest accepted secret value.
const MAX_SECRET_LEN: usize = 1024;

/// Typed façade over the remote vault.
pub struct CredentialGateway<R: RemoteVault> {
    remote: R,
}

impl<R: RemoteVault> CredentialGateway<R> {
    pub fn new(remote: R) -> Self {
        Self { remote }
    }

    /// Create or overwrite the record keyed by `site`.
    pub fn add(&self, session: &Session, site: &str, username: &str, secret: &str) -> Result<()> {
        let token = require_token(session)?;
        validate_fields(site, username, secret)?;
        self.remote.add_entry(token, site, username, secret)
    }

    /// All records for the session's identity, in remote return order.
    pub fn list(&self, session: &Session) -> Result<Vec<CredentialRecord>> {
        let token = require_token(session)?;
        self.remote.get_entries(token)
    }

    /// Full replace of the record keyed by `site`.
    ///
    /// Editing a site with no record fails with `RecordNotFound`; the
    /// remote reports "nothing touched" and does not create a record.
    pub fn edit(&self, session: &Session, site: &str, username: &str, secret: &str) -> Result<()> {
        let token = require_token(session)?;
        validate_fields(site, username, secret)?;
        if self.remote.edit_entry(token, site, username, secret)? {
            Ok(())
        } else {
            Err(HexLockError::RecordNotFound(site.to_string()))
        }
    }

    /// Remove the record keyed by `site`.
    ///
    /// Idempotent: deleting a site that has no record is still success.
    pub fn delete(&self, session: &Session, site: &str) -> Result<()> {
        let token = require_token(session)?;
        validate_site(site)?;
        self.remote.delete_entry(token, site)?;
        Ok(())
    }
}

/// Every operation needs an authenticated session's token; anything
/// else fails `Unauthorized` before any remote call is made.
fn require_token(session: &Session) -> Result<&IdentityToken> {
    if !session.is_authenticated() {
        return Err(HexLockError::Unauthorized);
    }
    session.token().ok_or(HexLockError::Unauthorized)
}

fn validate_site(site: &str) -> Result<()> {
    if site.trim().is_empty() {
        return Err(HexLockError::InvalidArgument("site cannot be empty".into()));
    }
    if site.len() > MAX_FIELD_LEN {
        return Err(HexLockError::InvalidArgument(format!(
            "site cannot exceed {MAX_FIELD_LEN} characters"
        )));
    }
    Ok(())
}

/// Reject malformed record fields locally, before spending a round
/// trip.  Values are stored verbatim — validation never trims or
/// case-folds what gets sent.
fn validate_fields(site: &str, username: &str, secret: &str) -> Result<()> {
    validate_site(site)?;
    if username.trim().is_empty() {
        return Err(HexLockError::InvalidArgument(
            "username cannot be empty".into(),
        ));
    }
    if username.len() > MAX_FIELD_LEN {
        return Err(HexLockError::InvalidArgument(format!(
            "username cannot exceed {MAX_FIELD_LEN} characters"
        )));
    }
    if secret.is_empty() {
        return Err(HexLockError::InvalidArgument(
            "password cannot be empty".into(),
        ));
    }
    if secret.len() > MAX_SECRET_LEN {
        return Err(HexLockError::InvalidArgument(format!(
            "password cannot exceed {MAX_SECRET_LEN} characters"
        )));
    }
    Ok(())
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;
    use std::cell::{Cell, RefCell};

    /// In-memory remote that counts every call it receives.
    #[derive(Default)]
    struct CountingRemote {
        entries: RefCell<Vec<CredentialRecord>>,
        calls: Cell<usize>,
    }

    impl RemoteVault for CountingRemote {
        fn add_entry(
            &self,
            _token: &IdentityToken,
            site: &str,
            username: &str,
            secret: &str,
        ) -> Result<()> {
            self.calls.set(self.calls.get() + 1);
            let mut entries = self.entries.borrow_mut();
            entries.retain(|r| r.site != site);
            entries.push(CredentialRecord::new(site, username, secret));
            Ok(())
        }

        fn get_entries(&self, _token: &IdentityToken) -> Result<Vec<CredentialRecord>> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.entries.borrow().clone())
        }

        fn edit_entry(
            &self,
            _token: &IdentityToken,
            site: &str,
            username: &str,
            secret: &str,
        ) -> Result<bool> {
            self.calls.set(self.calls.get() + 1);
            let mut entries = self.entries.borrow_mut();
            match entries.iter_mut().find(|r| r.site == site) {
                Some(r) => {
                    r.username = username.to_string();
                    r.secret = secret.to_string();
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        fn delete_entry(&self, _token: &IdentityToken, site: &str) -> Result<bool> {
            self.calls.set(self.calls.get() + 1);
            let mut entries = self.entries.borrow_mut();
            let before = entries.len();
            entries.retain(|r| r.site != site);
            Ok(entries.len() < before)
        }
    }

    fn authenticated() -> Session {
        Session::authenticated(IdentityToken::new("tok"), "alice".to_string())
    }

    #[test]
    fn unauthenticated_session_makes_zero_remote_calls() {
        let gateway = CredentialGateway::new(CountingRemote::default());
        let session = Session::unauthenticated();

        assert!(matches!(
            gateway.list(&session),
            Err(HexLockError::Unauthorized)
        ));
        assert!(matches!(
            gateway.add(&session, "s", "u", "p"),
            Err(HexLockError::Unauthorized)
        ));
        assert!(matches!(
            gateway.edit(&session, "s", "u", "p"),
            Err(HexLockError::Unauthorized)
        ));
        assert!(matches!(
            gateway.delete(&session, "s"),
            Err(HexLockError::Unauthorized)
        ));
        assert_eq!(gateway.remote.calls.get(), 0);
    }

    #[test]
    fn checking_session_is_not_authenticated_either() {
        let gateway = CredentialGateway::new(CountingRemote::default());
        let session = Session::checking();

        assert!(matches!(
            gateway.list(&session),
            Err(HexLockError::Unauthorized)
        ));
        assert_eq!(gateway.remote.calls.get(), 0);
    }

    #[test]
    fn empty_fields_are_rejected_before_any_remote_call() {
        let gateway = CredentialGateway::new(CountingRemote::default());
        let session = authenticated();

        for (site, username, secret) in
            [("", "u", "p"), ("s", "", "p"), ("s", "u", ""), ("  ", "u", "p")]
        {
            let err = gateway.add(&session, site, username, secret).unwrap_err();
            assert!(matches!(err, HexLockError::InvalidArgument(_)));
        }
        assert_eq!(gateway.remote.calls.get(), 0);
    }

    #[test]
    fn oversized_fields_are_rejected() {
        let gateway = CredentialGateway::new(CountingRemote::default());
        let session = authenticated();

        let long = "a".repeat(MAX_FIELD_LEN + 1);
        let err = gateway.add(&session, &long, "u", "p").unwrap_err();
        assert!(matches!(err, HexLockError::InvalidArgument(_)));

        let long_secret = "a".repeat(MAX_SECRET_LEN + 1);
        let err = gateway.add(&session, "s", "u", &long_secret).unwrap_err();
        assert!(matches!(err, HexLockError::InvalidArgument(_)));
        assert_eq!(gateway.remote.calls.get(), 0);
    }

    #[test]
    fn add_then_list_round_trips() {
        let gateway = CredentialGateway::new(CountingRemote::default());
        let session = authenticated();

        gateway
            .add(&session, "example.com", "alice", "x1y2")
            .unwrap();
        let records = gateway.list(&session).unwrap();
        assert_eq!(
            records,
            vec![CredentialRecord::new("example.com", "alice", "x1y2")]
        );
    }

    #[test]
    fn list_with_no_records_is_empty_not_an_error() {
        let gateway = CredentialGateway::new(CountingRemote::default());
        assert!(gateway.list(&authenticated()).unwrap().is_empty());
    }

    #[test]
    fn edit_replaces_username_and_secret() {
        let gateway = CredentialGateway::new(CountingRemote::default());
        let session = authenticated();

        gateway.add(&session, "example.com", "alice", "old").unwrap();
        gateway.edit(&session, "example.com", "bob", "new").unwrap();

        let records = gateway.list(&session).unwrap();
        assert_eq!(
            records,
            vec![CredentialRecord::new("example.com", "bob", "new")]
        );
    }

    #[test]
    fn edit_on_missing_site_fails_with_record_not_found() {
        let gateway = CredentialGateway::new(CountingRemote::default());
        let session = authenticated();

        let err = gateway.edit(&session, "missing.com", "u", "p").unwrap_err();
        assert!(matches!(err, HexLockError::RecordNotFound(site) if site == "missing.com"));
    }

    #[test]
    fn delete_is_idempotent() {
        let gateway = CredentialGateway::new(CountingRemote::default());
        let session = authenticated();

        gateway.add(&session, "example.com", "alice", "x").unwrap();
        gateway.delete(&session, "example.com").unwrap();
        // Second delete of the same site is still success.
        gateway.delete(&session, "example.com").unwrap();
        assert!(gateway.list(&session).unwrap().is_empty());
    }
}
