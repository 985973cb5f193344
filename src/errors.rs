use thiserror::Error;

/// All errors that can occur in HexLock.
///
/// The first five variants are the normalized taxonomy that the session
/// and gateway layers translate every lower-level fault into before it
/// reaches the store or the CLI.  Nothing above those layers ever sees a
/// raw transport error.
#[derive(Debug, Error)]
pub enum HexLockError {
    // --- Session / gateway taxonomy ---
    #[error("Not signed in — run `hexlock login` first")]
    Unauthorized,

    #[error("Vault service unavailable: {0}")]
    RemoteUnavailable(String),

    #[error("Invalid input: {0}")]
    InvalidArgument(String),

    #[error("Sign-in cancelled")]
    ProviderCanceled,

    #[error("No credential stored for '{0}'")]
    RecordNotFound(String),

    // --- Secret generation errors ---
    #[error("Random generator failed: {0}")]
    RandomSource(String),

    // --- Clipboard errors ---
    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    // --- Keyring errors ---
    #[error("Keyring error: {0}")]
    KeyringError(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    // --- Audit errors ---
    #[error("Audit error: {0}")]
    AuditError(String),
}

/// Convenience type alias for HexLock results.
pub type Result<T> = std::result::Result<T, HexLockError>;
