//! The credential record type.
//!
//! `site` is the record key: unique per identity, addressed verbatim
//! (no case normalization — "GitHub.com" and "github.com" are two
//! different records).  The authoritative copy of every record lives in
//! the remote vault; anything held locally is a display cache.

use serde::{Deserialize, Serialize};

/// One named credential: where it is used, who it is for, and the
/// secret itself.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    /// Record key — the site or service this credential belongs to.
    pub site: String,

    /// Account name at that site.
    pub username: String,

    /// The secret value.  Never logged; `Debug` redacts it.
    /// On the wire this field is called `password`, matching what the
    /// vault accepts in `add_entry`/`edit_entry` bodies.
    #[serde(rename = "password")]
    pub secret: String,
}

impl CredentialRecord {
    pub fn new(
        site: impl Into<String>,
        username: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        Self {
            site: site.into(),
            username: username.into(),
            secret: secret.into(),
        }
    }
}

impl std::fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("site", &self.site)
            .field("username", &self.username)
            .field("secret", &"<redacted>")
            .finish()
    }
}
