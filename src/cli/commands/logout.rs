//! `hexlock logout` — sign out and revoke the session.

use crate::cli::{load_settings, output, record_audit, session_manager, Cli};
use crate::errors::Result;

/// Execute the `logout` command.
///
/// Logout always succeeds locally: the session and any cached identity
/// state are dropped even when provider-side revocation cannot be
/// reported.
pub fn execute(cli: &Cli) -> Result<()> {
    let settings = load_settings(cli)?;
    let mut manager = session_manager(&settings)?;

    let before = manager.check_session().clone();
    if !before.is_authenticated() {
        output::info("Not signed in.");
        return Ok(());
    }

    record_audit(&before, "logout", None, None);
    manager.logout();
    output::success("Signed out.");
    Ok(())
}
