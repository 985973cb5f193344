//! Secret generation.
//!
//! Produces random secret values for new credential entries: raw bytes
//! from the operating system's CSPRNG, rendered as fixed-width
//! lowercase hex.  Stateless — every call draws fresh entropy.

use rand::TryRngCore;

use crate::errors::{HexLockError, Result};

/// Default entropy per generated secret (16 bytes → 32 hex chars).
pub const DEFAULT_SECRET_BYTES: usize = 16;

/// Generate `length_bytes` of OS randomness as a lowercase hex string
/// of `2 × length_bytes` characters.
///
/// The OS random source is the only generator used here — a
/// statistical PRNG is never acceptable for credential material.
pub fn generate(length_bytes: usize) -> Result<String> {
    let mut buf = vec![0u8; length_bytes];
    rand::rngs::OsRng
        .try_fill_bytes(&mut buf)
        .map_err(|e| HexLockError::RandomSource(e.to_string()))?;

    Ok(buf.iter().map(|b| format!("{b:02x}")).collect())
}

/// `generate` with the default length.
pub fn generate_default() -> Result<String> {
    generate(DEFAULT_SECRET_BYTES)
}

// ── Tests ────────────────────────────────────────────────────────────
