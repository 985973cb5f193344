//! On-disk session cache.
//!
//! The provider issues a token once per interactive sign-in; between
//! runs of the CLI the token lives in `<config_dir>/session.json`
//! (owner-only permissions on Unix).  With the `keyring-store` feature
//! the token itself moves into the OS keyring and only the metadata
//! stays on disk.
//!
//! Reads never fail — a missing or unparsable cache file is simply "no
//! session".

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{HexLockError, Result};

/// File name inside the config directory.
const CACHE_FILE: &str = "session.json";

/// A cached session as stored on disk.
///
/// `token` is empty when the `keyring-store` feature keeps the token in
/// the OS keyring instead.
#[derive(Debug, Serialize, Deserialize)]
pub struct CachedSession {
    #[serde(default)]
    pub token: String,
    pub principal: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl CachedSession {
    /// Whether the cached session has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

/// Path to the cache file inside `config_dir`.
fn cache_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CACHE_FILE)
}

/// Read the cached session, if any.
///
/// Returns `None` when the file is missing or unreadable.
pub fn read(config_dir: &Path) -> Option<CachedSession> {
    let content = fs::read_to_string(cache_path(config_dir)).ok()?;
    serde_json::from_str(&content).ok()
}

/// Write a session to the cache file, creating the config directory if
/// needed.
pub fn write(config_dir: &Path, session: &CachedSession) -> Result<()> {
    fs::create_dir_all(config_dir)?;

    let path = cache_path(config_dir);
    let content = serde_json::to_string_pretty(session)
        .map_err(|e| HexLockError::SerializationError(e.to_string()))?;
    fs::write(&path, content)?;

    // Restrict the cache file to the owner (it holds the token unless
    // the keyring feature is in use).
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = fs::Permissions::from_mode(0o600);
        let _ = fs::set_permissions(&path, perms);
    }

    Ok(())
}

/// Remove the cache file.  Missing files are fine.
pub fn clear(config_dir: &Path) {
    let _ = fs::remove_file(cache_path(config_dir));
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample(expires_in_mins: i64) -> CachedSession {
        CachedSession {
            token: "tok-abc".to_string(),
            principal: "w3gef-oqbai".to_string(),
            issued_at: Utc::now(),
            expires_at: Utc::now() + chrono::Duration::minutes(expires_in_mins),
        }
    }

    #[test]
    fn roundtrip() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), &sample(30)).unwrap();

        let back = read(dir.path()).expect("cache should read back");
        assert_eq!(back.token, "tok-abc");
        assert_eq!(back.principal, "w3gef-oqbai");
        assert!(!back.is_expired());
    }

    #[test]
    fn read_missing_returns_none() {
        let dir = TempDir::new().unwrap();
        assert!(read(dir.path()).is_none());
    }

    #[test]
    fn read_garbage_returns_none() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CACHE_FILE), "not json").unwrap();
        assert!(read(dir.path()).is_none());
    }

    #[test]
    fn expired_session_reports_expired() {
        assert!(sample(-5).is_expired());
    }

    #[test]
    fn clear_removes_file() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), &sample(30)).unwrap();
        clear(dir.path());
        assert!(read(dir.path()).is_none());

        // Clearing again is a no-op.
        clear(dir.path());
    }

    #[cfg(unix)]
    #[test]
    fn cache_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        write(dir.path(), &sample(30)).unwrap();

        let meta = fs::metadata(dir.path().join(CACHE_FILE)).unwrap();
        assert_eq!(meta.permissions().mode() & 0o777, 0o600);
    }
}
