//! `hexlock login` — sign in through the identity provider.

use crate::cli::{load_settings, output, record_audit, session_manager, Cli};
use crate::errors::{HexLockError, Result};

/// Execute the `login` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let settings = load_settings(cli)?;
    let mut manager = session_manager(&settings)?;

    // Nothing to do when a valid session already exists.
    let existing = manager.check_session();
    if existing.is_authenticated() {
        let principal = existing.principal().unwrap_or("-").to_string();
        output::info(&format!("Already signed in as {principal}."));
        output::tip("Run `hexlock logout` first to switch identities.");
        return Ok(());
    }

    match manager.login() {
        Ok(session) => {
            let principal = session.principal().unwrap_or("-").to_string();
            record_audit(session, "login", None, Some("session issued"));
            output::success(&format!("Signed in as {principal}."));
            output::tip("Run `hexlock list` to see your credentials.");
            Ok(())
        }
        // An aborted ceremony returns to the signed-out state silently.
        Err(HexLockError::ProviderCanceled) => {
            output::info("Sign-in cancelled.");
            Ok(())
        }
        Err(e) => Err(e),
    }
}
