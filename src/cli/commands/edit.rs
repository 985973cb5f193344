//! `hexlock edit` — replace the username and password for a site.
//!
//! The replace is total: both fields are overwritten.  Editing a site
//! with no stored credential fails — the vault does not create records
//! through edit.

use crate::cli::{
    load_settings, obtain_password, output, record_audit, require_session, session_manager,
    vault_store, Cli,
};
use crate::errors::Result;

/// Execute the `edit` command.
pub fn execute(
    cli: &Cli,
    site: &str,
    username: &str,
    password: Option<&str>,
    generate: bool,
) -> Result<()> {
    let settings = load_settings(cli)?;
    let mut manager = session_manager(&settings)?;
    let session = require_session(&mut manager)?;

    let value = obtain_password(site, password, generate)?;

    let mut store = vault_store(&settings);
    store.update_record(&session, site, username, value.as_str())?;

    record_audit(&session, "edit", Some(site), Some("replaced"));
    output::success(&format!("Credential for '{site}' updated"));

    Ok(())
}
