//! Store module — client-side view state over the remote vault.
//!
//! `VaultStore` owns everything the UI renders: the cached record list,
//! the search filter, per-record reveal flags, and the pending add
//! form.  It is the single owner of that state; no other component
//! mutates it.
//!
//! Consistency policy: the record list is never patched optimistically.
//! Every mutation goes to the gateway and is followed by a full `list`
//! refetch, so the view can only ever show a state the remote store
//! actually reached.  The extra round trip is cheap at credential-vault
//! write rates.

use std::collections::HashSet;

use crate::clipboard;
use crate::errors::Result;
use crate::gateway::{CredentialGateway, CredentialRecord, RemoteVault};
use crate::session::Session;

/// Handle for one in-flight `list` refetch.
///
/// Tickets are ordered: completing a refresh with anything but the most
/// recently issued ticket discards the response, so two refetches
/// finishing out of order can never leave a stale list displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket(u64);

/// Client-side state holder for the credential list.
pub struct VaultStore<R: RemoteVault> {
    gateway: CredentialGateway<R>,
    records: Vec<CredentialRecord>,
    search_term: String,
    /// Reveal flags keyed by the stable `site` key, not list index, so
    /// a refetch that reorders records cannot misalign them.
    revealed: HashSet<String>,
    draft: Option<CredentialRecord>,
    is_loading: bool,
    /// Sequence number of the most recently issued refresh ticket.
    refresh_seq: u64,
}

impl<R: RemoteVault> VaultStore<R> {
    pub fn new(gateway: CredentialGateway<R>) -> Self {
        Self {
            gateway,
            records: Vec::new(),
            search_term: String::new(),
            revealed: HashSet::new(),
            draft: None,
            is_loading: false,
            refresh_seq: 0,
        }
    }

    // ------------------------------------------------------------------
    // Read model
    // ------------------------------------------------------------------

    /// The cached record list, in remote return order.
    pub fn records(&self) -> &[CredentialRecord] {
        &self.records
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn draft(&self) -> Option<&CredentialRecord> {
        self.draft.as_ref()
    }

    pub fn is_revealed(&self, site: &str) -> bool {
        self.revealed.contains(site)
    }

    /// Records matching the current search term: case-insensitive
    /// substring match against site OR username.  An empty term matches
    /// everything.
    pub fn filtered_records(&self) -> Vec<&CredentialRecord> {
        let needle = self.search_term.to_lowercase();
        self.records
            .iter()
            .filter(|r| {
                needle.is_empty()
                    || r.site.to_lowercase().contains(&needle)
                    || r.username.to_lowercase().contains(&needle)
            })
            .collect()
    }

    // ------------------------------------------------------------------
    // User intents
    // ------------------------------------------------------------------

    /// First fetch after the session is established.
    ///
    /// On error the record list stays empty and the error is surfaced;
    /// the caller can simply retry.
    pub fn initialize(&mut self, session: &Session) -> Result<()> {
        self.refresh(session)
    }

    /// Pure local filter; never touches the remote store.
    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
    }

    /// Stage the pending add form.
    pub fn set_draft(&mut self, draft: CredentialRecord) {
        self.draft = Some(draft);
    }

    /// Submit a new record, then refetch the list.
    ///
    /// Field validation mirrors what the remote accepts, so malformed
    /// drafts fail locally with `InvalidArgument` before any round
    /// trip.  The staged draft is cleared only on success — a rejected
    /// form keeps its values.
    pub fn submit_new_record(&mut self, session: &Session, draft: &CredentialRecord) -> Result<()> {
        self.gateway
            .add(session, &draft.site, &draft.username, &draft.secret)?;
        self.draft = None;
        self.refresh(session)
    }

    /// Full replace of the record keyed by `site`, then refetch.
    pub fn update_record(
        &mut self,
        session: &Session,
        site: &str,
        username: &str,
        secret: &str,
    ) -> Result<()> {
        self.gateway.edit(session, site, username, secret)?;
        self.refresh(session)
    }

    /// Delete the record keyed by `site`, then refetch.
    ///
    /// Deletion is irreversible, so callers must have collected an
    /// explicit user confirmation before invoking this.
    pub fn remove_record(&mut self, session: &Session, site: &str) -> Result<()> {
        self.gateway.delete(session, site)?;
        self.refresh(session)
    }

    /// Flip the reveal flag for one record.  Purely local.
    pub fn toggle_reveal(&mut self, site: &str) {
        if !self.revealed.remove(site) {
            self.revealed.insert(site.to_string());
        }
    }

    /// Copy a value verbatim to the platform clipboard.
    ///
    /// The value is never transformed and never logged.
    pub fn copy_value(&self, text: &str) -> Result<()> {
        clipboard::copy_to_clipboard(text)
    }

    /// Forget everything tied to the current identity.
    ///
    /// Called on logout: no credential record may outlive its session.
    /// Also invalidates any in-flight refresh.
    pub fn clear(&mut self) {
        self.records.clear();
        self.revealed.clear();
        self.draft = None;
        self.search_term.clear();
        self.abandon_refreshes();
    }

    // ------------------------------------------------------------------
    // Refresh plumbing
    // ------------------------------------------------------------------

    /// Issue a ticket for a `list` refetch and mark the view loading.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.refresh_seq += 1;
        self.is_loading = true;
        RefreshTicket(self.refresh_seq)
    }

    /// Apply the outcome of a refetch.
    ///
    /// Returns `Ok(true)` when the response was applied, `Ok(false)`
    /// when it was stale (a newer ticket has been issued since) and was
    /// discarded — stale errors are discarded silently too.  A current
    /// fetch error empties the list and propagates, so the view never
    /// keeps showing records the last fetch could not confirm.
    pub fn complete_refresh(
        &mut self,
        ticket: RefreshTicket,
        result: Result<Vec<CredentialRecord>>,
    ) -> Result<bool> {
        if ticket.0 != self.refresh_seq {
            return Ok(false);
        }

        self.is_loading = false;
        match result {
            Ok(records) => {
                // Prune reveal flags for records that no longer exist.
                self.revealed
                    .retain(|site| records.iter().any(|r| &r.site == site));
                self.records = records;
                Ok(true)
            }
            Err(e) => {
                self.records.clear();
                self.revealed.clear();
                Err(e)
            }
        }
    }

    /// Invalidate every in-flight refresh.
    ///
    /// Used when navigating away from the authenticated view: abandoned
    /// fetches must not surface their results later.
    pub fn abandon_refreshes(&mut self) {
        self.refresh_seq += 1;
        self.is_loading = false;
    }

    /// One full refetch cycle against the gateway.
    fn refresh(&mut self, session: &Session) -> Result<()> {
        let ticket = self.begin_refresh();
        let result = self.gateway.list(session);
        self.complete_refresh(ticket, result).map(|_| ())
    }
}

// ── Tests ────────────────────────────────────────────────────────────
