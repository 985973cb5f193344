//! `hexlock add` — store a new credential in the remote vault.

use crate::cli::{
    load_settings, obtain_password, output, record_audit, require_session, session_manager,
    vault_store, Cli,
};
use crate::errors::Result;
use crate::gateway::CredentialRecord;

/// Execute the `add` command.
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
    let draft = CredentialRecord::new(site, username, value.as_str());
    store.set_draft(draft.clone());
    store.submit_new_record(&session, &draft)?;

    record_audit(&session, "add", Some(site), None);
    output::success(&format!(
        "Credential for '{}' saved ({} total)",
        site,
        store.records().len()
    ));

    Ok(())
}
