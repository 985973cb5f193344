//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::io::{self, IsTerminal, Read};

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{HexLockError, Result};
use crate::gateway::{CredentialGateway, HttpRemoteVault};
use crate::session::{HttpIdentityProvider, Session, SessionManager};
use crate::store::VaultStore;

/// HexLock CLI: client for the remote credential vault.
#[derive(Parser)]
#[command(
    name = "hexlock",
    about = "Client for the HexLock remote credential vault",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Identity provider base URL (overrides the config file)
    #[arg(long, env = "HEXLOCK_PROVIDER_URL", global = true)]
    pub provider_url: Option<String>,

    /// Vault service base URL (overrides the config file)
    #[arg(long, env = "HEXLOCK_VAULT_URL", global = true)]
    pub vault_url: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Sign in through the identity provider
    Login,

    /// Sign out and revoke the session
    Logout,

    /// Show whether a session exists and who it belongs to
    Status,

    /// List stored credentials
    List {
        /// Show only records whose site or username contains this text
        filter: Option<String>,

        /// Reveal the password for these sites (repeatable)
        #[arg(long)]
        reveal: Vec<String>,
    },

    /// Store a new credential
    Add {
        /// Site or service the credential belongs to
        site: String,
        /// Account name at that site
        username: String,
        /// Password (omit for interactive prompt)
        password: Option<String>,
        /// Generate a random password instead of prompting
        #[arg(short, long)]
        generate: bool,
    },

    /// Print or copy one credential's password
    Get {
        /// Site of the credential
        site: String,
        /// Copy the password to the clipboard instead of printing it
        #[arg(long)]
        copy: bool,
        /// Copy the username to the clipboard instead
        #[arg(long)]
        copy_username: bool,
    },

    /// Replace the username and password for a site
    Edit {
        /// Site of the credential to replace
        site: String,
        /// New account name
        username: String,
        /// New password (omit for interactive prompt)
        password: Option<String>,
        /// Generate a random password instead of prompting
        #[arg(short, long)]
        generate: bool,
    },

    /// Delete a credential
    Delete {
        /// Site of the credential to delete
        site: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Generate a random password without storing anything
    Generate {
        /// Entropy in bytes (output is twice as many hex characters)
        #[arg(long, default_value = "16")]
        bytes: usize,
        /// Copy to the clipboard instead of printing
        #[arg(long)]
        copy: bool,
    },

    /// View the audit log of vault operations
    #[cfg(feature = "audit-log")]
    Audit {
        /// Number of entries to show (default: 50)
        #[arg(long, default_value = "50")]
        last: usize,
        /// Show entries since a duration ago (e.g. 7d, 24h, 30m)
        #[arg(long)]
        since: Option<String>,
    },

    /// Show version and check for updates
    Version,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Load settings and apply any CLI/env overrides.
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = Settings::load_default()?;
    if let Some(url) = &cli.provider_url {
        settings.provider_url = url.clone();
    }
    if let Some(url) = &cli.vault_url {
        settings.vault_url = url.clone();
    }
    Ok(settings)
}

/// Build the session manager wired to the HTTP identity provider.
pub fn session_manager(settings: &Settings) -> Result<SessionManager<HttpIdentityProvider>> {
    let cache_dir = Settings::config_dir().ok_or_else(|| {
        HexLockError::ConfigError("cannot determine home directory for the session cache".into())
    })?;

    let provider = HttpIdentityProvider::new(
        &settings.provider_url,
        cache_dir,
        settings.request_timeout(),
    );
    Ok(SessionManager::new(provider, settings.session_max_age()))
}

/// Build a fresh vault store wired to the HTTP remote vault.
pub fn vault_store(settings: &Settings) -> VaultStore<HttpRemoteVault> {
    let remote = HttpRemoteVault::new(&settings.vault_url, settings.request_timeout());
    VaultStore::new(CredentialGateway::new(remote))
}

/// Probe for an existing session and insist on one.
///
/// Commands that read or mutate the vault call this first; without a
/// valid session they fail with `Unauthorized` before any vault call,
/// pointing the user at `hexlock login`.
pub fn require_session(
    manager: &mut SessionManager<HttpIdentityProvider>,
) -> Result<Session> {
    let session = manager.check_session().clone();
    if session.is_authenticated() {
        Ok(session)
    } else {
        Err(HexLockError::Unauthorized)
    }
}

/// Determine the password value for `add`/`edit`, trying in order:
/// 1. Inline value on the command line (with a shell-history warning)
/// 2. `--generate` (fresh random value, echoed once so it can be kept)
/// 3. Piped input (stdin is not a terminal)
/// 4. Interactive secure prompt
///
/// Returns `Zeroizing<String>` so the value is wiped from memory on drop.
pub fn obtain_password(
    site: &str,
    provided: Option<&str>,
    generate: bool,
) -> Result<Zeroizing<String>> {
    if let Some(v) = provided {
        output::warning("Password provided on command line — it may appear in shell history.");
        return Ok(Zeroizing::new(v.to_string()));
    }

    if generate {
        let value = crate::generator::generate_default()?;
        output::info(&format!("Generated password for {site}: {value}"));
        output::tip("Store it somewhere safe — it is shown only once.");
        return Ok(Zeroizing::new(value));
    }

    if !io::stdin().is_terminal() {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(Zeroizing::new(buf.trim_end().to_string()));
    }

    let value = dialoguer::Password::new()
        .with_prompt(format!("Password for {site}"))
        .interact()
        .map_err(|e| HexLockError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(value))
}

/// Record an audit event when the `audit-log` feature is compiled in.
#[cfg(feature = "audit-log")]
pub(crate) fn record_audit(session: &Session, op: &str, site: Option<&str>, details: Option<&str>) {
    let principal = session.principal().unwrap_or("-");
    crate::audit::log_audit(principal, op, site, details);
}

#[cfg(not(feature = "audit-log"))]
pub(crate) fn record_audit(
    _session: &Session,
    _op: &str,
    _site: Option<&str>,
    _details: Option<&str>,
) {
}
