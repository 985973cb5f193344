//! `hexlock get` — print or copy one credential's password.

use crate::cli::{load_settings, output, require_session, session_manager, vault_store, Cli};
use crate::errors::{HexLockError, Result};

/// Execute the `get` command.
pub fn execute(cli: &Cli, site: &str, copy: bool, copy_username: bool) -> Result<()> {
    let settings = load_settings(cli)?;
    let mut manager = session_manager(&settings)?;
    let session = require_session(&mut manager)?;

    let mut store = vault_store(&settings);
    store.initialize(&session)?;

    let record = store
        .records()
        .iter()
        .find(|r| r.site == site)
        .cloned()
        .ok_or_else(|| HexLockError::RecordNotFound(site.to_string()))?;

    if copy_username {
        store.copy_value(&record.username)?;
        output::success(&format!("Username for '{site}' copied to clipboard."));
        return Ok(());
    }

    if copy {
        store.copy_value(&record.secret)?;
        output::success(&format!("Password for '{site}' copied to clipboard."));
        return Ok(());
    }

    // Plain value on stdout for scripting; metadata stays on stderr.
    println!("{}", record.secret);
    Ok(())
}
