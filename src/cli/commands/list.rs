//! `hexlock list` — display stored credentials in a table.

use crate::cli::{load_settings, output, require_session, session_manager, vault_store, Cli};
use crate::errors::Result;

/// Execute the `list` command.
pub fn execute(cli: &Cli, filter: Option<&str>, reveal: &[String]) -> Result<()> {
    let settings = load_settings(cli)?;
    let mut manager = session_manager(&settings)?;
    let session = require_session(&mut manager)?;

    let mut store = vault_store(&settings);
    store.initialize(&session)?;

    if let Some(term) = filter {
        store.set_search_term(term);
    }
    for site in reveal {
        store.toggle_reveal(site);
    }

    let records = store.filtered_records();
    output::info(&format!(
        "{} — {} credential(s)",
        session.principal().unwrap_or("-"),
        records.len()
    ));
    output::print_credentials_table(&records, |site| store.is_revealed(site));

    Ok(())
}
