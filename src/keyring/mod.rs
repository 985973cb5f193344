//! OS keyring integration for session token storage.
//!
//! Stores and retrieves the identity token from the operating system's
//! secure credential store:
//! - macOS: Keychain
//! - Windows: Credential Manager
//! - Linux: Secret Service (GNOME Keyring / KDE Wallet)
//!
//! All operations fail gracefully — if the keyring is unavailable, the
//! error is returned and the session layer falls back to the plain
//! session cache file.

use crate::errors::{HexLockError, Result};

/// Service name used in the OS keyring.
const SERVICE_NAME: &str = "hexlock";

/// Build a keyring entry key from the identity provider URL.
///
/// Tokens from different providers must not collide, so the provider
/// URL is part of the key.
fn entry_key(provider_url: &str) -> String {
    format!("session:{provider_url}")
}

/// Store an identity token in the OS keyring.
pub fn store_token(provider_url: &str, token: &str) -> Result<()> {
    let entry = keyring::Entry::new(SERVICE_NAME, &entry_key(provider_url))
        .map_err(|e| HexLockError::KeyringError(format!("failed to create keyring entry: {e}")))?;

    entry.set_password(token).map_err(|e| {
        HexLockError::KeyringError(format!("failed to store token in keyring: {e}"))
    })?;

    Ok(())
}

/// Retrieve an identity token from the OS keyring.
///
/// Returns `None` if no token is stored (rather than an error).
pub fn get_token(provider_url: &str) -> Result<Option<String>> {
    let entry = keyring::Entry::new(SERVICE_NAME, &entry_key(provider_url))
        .map_err(|e| HexLockError::KeyringError(format!("failed to create keyring entry: {e}")))?;

    match entry.get_password() {
        Ok(token) => Ok(Some(token)),
        Err(keyring::Error::NoEntry) => Ok(None),
        Err(e) => Err(HexLockError::KeyringError(format!(
            "failed to read from keyring: {e}"
        ))),
    }
}

/// Delete a stored identity token from the OS keyring.
pub fn delete_token(provider_url: &str) -> Result<()> {
    let entry = keyring::Entry::new(SERVICE_NAME, &entry_key(provider_url))
        .map_err(|e| HexLockError::KeyringError(format!("failed to create keyring entry: {e}")))?;

    match entry.delete_credential() {
        Ok(()) => Ok(()),
        Err(keyring::Error::NoEntry) => Ok(()), // Already gone, that's fine.
        Err(e) => Err(HexLockError::KeyringError(format!(
            "failed to delete from keyring: {e}"
        ))),
    }
}
