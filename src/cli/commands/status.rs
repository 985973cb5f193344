//! `hexlock status` — show whether a session exists and who owns it.

use crate::cli::{load_settings, output, session_manager, Cli};
use crate::config::Settings;
use crate::errors::Result;
use crate::session::cache;

/// Execute the `status` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let settings = load_settings(cli)?;
    let mut manager = session_manager(&settings)?;

    let session = manager.check_session();
    if !session.is_authenticated() {
        output::info("Not signed in.");
        output::tip("Run `hexlock login` to sign in.");
        return Ok(());
    }

    let principal = session.principal().unwrap_or("-").to_string();
    output::success(&format!("Signed in as {principal}."));

    // Expiry lives in the session cache, not the session itself.
    if let Some(cached) = Settings::config_dir().and_then(|dir| cache::read(&dir)) {
        output::info(&format!(
            "Session expires {}.",
            cached.expires_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
    }

    Ok(())
}
