//! `hexlock delete` — remove a credential from the remote vault.

use dialoguer::Confirm;

use crate::cli::{
    load_settings, output, record_audit, require_session, session_manager, vault_store, Cli,
};
use crate::errors::{HexLockError, Result};

/// Execute the `delete` command.
pub fn execute(cli: &Cli, site: &str, force: bool) -> Result<()> {
    // Deletion is irreversible: unless --force is set, ask first.
    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete the credential for '{site}'?"))
            .default(false)
            .interact()
            .map_err(|e| HexLockError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    let settings = load_settings(cli)?;
    let mut manager = session_manager(&settings)?;
    let session = require_session(&mut manager)?;

    let mut store = vault_store(&settings);
    store.remove_record(&session, site)?;

    record_audit(&session, "delete", Some(site), None);
    output::success(&format!("Deleted credential for '{site}'"));

    Ok(())
}
