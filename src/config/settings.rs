use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::{HexLockError, Result};

/// User-level configuration, loaded from `~/.config/hexlock/config.toml`.
///
/// Every field has a sensible default so HexLock works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Base URL of the identity provider that issues session tokens.
    #[serde(default = "default_provider_url")]
    pub provider_url: String,

    /// Base URL of the remote credential vault.
    #[serde(default = "default_vault_url")]
    pub vault_url: String,

    /// Timeout in seconds for any single request to the provider or
    /// the vault.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Maximum session lifetime in seconds requested at sign-in
    /// (default: 7 days).
    #[serde(default = "default_session_max_age_secs")]
    pub session_max_age_secs: u64,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_provider_url() -> String {
    "https://identity.hexlock.app".to_string()
}

fn default_vault_url() -> String {
    "https://vault.hexlock.app".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_session_max_age_secs() -> u64 {
    7 * 24 * 60 * 60
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            provider_url: default_provider_url(),
            vault_url: default_vault_url(),
            request_timeout_secs: default_request_timeout_secs(),
            session_max_age_secs: default_session_max_age_secs(),
        }
    }
}

impl Settings {
    /// Name of the config file inside the config directory.
    const FILE_NAME: &'static str = "config.toml";

    /// The HexLock config directory: `$HOME/.config/hexlock`.
    ///
    /// Falls back to `USERPROFILE` on Windows. Returns `None` when
    /// neither variable is set.
    pub fn config_dir() -> Option<PathBuf> {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .ok()?;
        Some(PathBuf::from(home).join(".config").join("hexlock"))
    }

    /// Load settings from `<config_dir>/config.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(config_dir: &Path) -> Result<Self> {
        let config_path = config_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            HexLockError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Load settings from the default config directory, or defaults when
    /// no home directory can be determined.
    pub fn load_default() -> Result<Self> {
        match Self::config_dir() {
            Some(dir) => Self::load(&dir),
            None => Ok(Self::default()),
        }
    }

    /// Request timeout as a `Duration` for the HTTP agent.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Maximum session lifetime as a `Duration`.
    pub fn session_max_age(&self) -> Duration {
        Duration::from_secs(self.session_max_age_secs)
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_settings_are_sensible() {
        let s = Settings::default();
        assert_eq!(s.provider_url, "https://identity.hexlock.app");
        assert_eq!(s.vault_url, "https://vault.hexlock.app");
        assert_eq!(s.request_timeout_secs, 30);
        assert_eq!(s.session_max_age_secs, 604_800);
    }

    #[test]
    fn load_returns_defaults_when_no_config_file() {
        let tmp = TempDir::new().unwrap();
        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.vault_url, "https://vault.hexlock.app");
    }

    #[test]
    fn load_parses_toml_file() {
        let tmp = TempDir::new().unwrap();
        let config = r#"
provider_url = "https://id.example.org"
vault_url = "https://vault.example.org"
request_timeout_secs = 10
session_max_age_secs = 3600
"#;
        fs::write(tmp.path().join("config.toml"), config).unwrap();

        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.provider_url, "https://id.example.org");
        assert_eq!(settings.vault_url, "https://vault.example.org");
        assert_eq!(settings.request_timeout_secs, 10);
        assert_eq!(settings.session_max_age_secs, 3600);
    }

    #[test]
    fn load_uses_defaults_for_missing_fields() {
        let tmp = TempDir::new().unwrap();
        let config = "vault_url = \"https://vault.example.org\"\n";
        fs::write(tmp.path().join("config.toml"), config).unwrap();

        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.vault_url, "https://vault.example.org");
        // Rest should be defaults
        assert_eq!(settings.provider_url, "https://identity.hexlock.app");
        assert_eq!(settings.request_timeout_secs, 30);
    }

    #[test]
    fn load_errors_on_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "not valid {{toml").unwrap();

        let result = Settings::load(tmp.path());
        assert!(result.is_err());
    }

    #[test]
    fn durations_convert_correctly() {
        let s = Settings {
            request_timeout_secs: 5,
            session_max_age_secs: 60,
            ..Settings::default()
        };
        assert_eq!(s.request_timeout(), Duration::from_secs(5));
        assert_eq!(s.session_max_age(), Duration::from_secs(60));
    }
}
