//! Update probe — is a newer hexlock-cli published on crates.io?
//!
//! The network call only exists behind the `version-check` feature;
//! without it the probe answers from the on-disk cache or not at all.
//! Results are cached next to the session cache in the config
//! directory, and nothing in here can fail the calling command.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// File name inside the config directory.
const CACHE_FILE: &str = "update-check.json";

/// How long a probe result stays usable.
const TTL_HOURS: i64 = 24;

/// One recorded probe of the registry.
#[derive(Serialize, Deserialize)]
struct UpdateProbe {
    latest: String,
    checked_at: DateTime<Utc>,
}

impl UpdateProbe {
    fn is_fresh(&self) -> bool {
        Utc::now() - self.checked_at < chrono::Duration::hours(TTL_HOURS)
    }
}

/// The latest published version, when it differs from `current`.
///
/// Answers from a fresh cached probe when one exists; otherwise asks
/// the registry and records the answer. Returns `None` when already
/// up to date or when no answer can be had.
pub fn newer_release(config_dir: &Path, current: &str) -> Option<String> {
    let latest = match read_probe(config_dir).filter(UpdateProbe::is_fresh) {
        Some(probe) => probe.latest,
        None => {
            let fetched = fetch_latest()?;
            write_probe(config_dir, &fetched);
            fetched
        }
    };

    (latest != current).then_some(latest)
}

fn read_probe(config_dir: &Path) -> Option<UpdateProbe> {
    let content = fs::read_to_string(config_dir.join(CACHE_FILE)).ok()?;
    serde_json::from_str(&content).ok()
}

/// Record a probe result. Fire-and-forget — a cache that cannot be
/// written just means another fetch next time.
fn write_probe(config_dir: &Path, latest: &str) {
    let probe = UpdateProbe {
        latest: latest.to_string(),
        checked_at: Utc::now(),
    };
    if fs::create_dir_all(config_dir).is_err() {
        return;
    }
    if let Ok(content) = serde_json::to_string_pretty(&probe) {
        let _ = fs::write(config_dir.join(CACHE_FILE), content);
    }
}

#[cfg(feature = "version-check")]
fn fetch_latest() -> Option<String> {
    let resp = ureq::get("https://crates.io/api/v1/crates/hexlock-cli")
        .set(
            "User-Agent",
            &format!("hexlock/{}", env!("CARGO_PKG_VERSION")),
        )
        .call()
        .ok()?;

    let body: serde_json::Value = resp.into_json().ok()?;
    Some(body.get("crate")?.get("max_version")?.as_str()?.to_string())
}

#[cfg(not(feature = "version-check"))]
fn fetch_latest() -> Option<String> {
    None
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn seed(dir: &Path, latest: &str, checked_at: DateTime<Utc>) {
        let probe = UpdateProbe {
            latest: latest.to_string(),
            checked_at,
        };
        fs::write(
            dir.join(CACHE_FILE),
            serde_json::to_string(&probe).unwrap(),
        )
        .unwrap();
    }

    #[test]
    fn fresh_cached_probe_answers_without_the_network() {
        let dir = TempDir::new().unwrap();
        seed(dir.path(), "9.9.9", Utc::now());

        // Works even in builds where fetching is compiled out.
        assert_eq!(
            newer_release(dir.path(), "0.3.0"),
            Some("9.9.9".to_string())
        );
    }

    #[test]
    fn matching_version_reports_nothing() {
        let dir = TempDir::new().unwrap();
        seed(dir.path(), "0.3.0", Utc::now());

        assert_eq!(newer_release(dir.path(), "0.3.0"), None);
    }

    #[test]
    fn stale_probe_is_ignored() {
        let dir = TempDir::new().unwrap();
        seed(
            dir.path(),
            "9.9.9",
            Utc::now() - chrono::Duration::hours(TTL_HOURS + 1),
        );

        #[cfg(not(feature = "version-check"))]
        assert_eq!(
            newer_release(dir.path(), "0.3.0"),
            None,
            "a stale probe must not be trusted"
        );
    }

    #[test]
    fn garbage_cache_file_is_ignored() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CACHE_FILE), "not json").unwrap();
        assert!(read_probe(dir.path()).is_none());
    }

    #[test]
    fn probe_round_trips_through_the_cache_file() {
        let dir = TempDir::new().unwrap();
        write_probe(dir.path(), "1.2.3");

        let probe = read_probe(dir.path()).unwrap();
        assert_eq!(probe.latest, "1.2.3");
        assert!(probe.is_fresh());
    }
}
