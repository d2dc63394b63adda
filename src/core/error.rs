//! Error types for credential property checks

use thiserror::Error;

use super::types::WifiMode;

/// Result type for checks on a single credential value
pub type CredentialResult<T> = Result<T, CredentialError>;

/// Result type for checks on a station or access point credential pair
pub type CheckResult<T> = Result<T, CheckError>;

/// A property violated by a single SSID or passphrase
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    #[error("SSID must not be empty")]
    EmptySsid,

    #[error("SSID too long: at most 32 bytes, got {0}")]
    SsidTooLong(usize),

    #[error("Passphrase too short: at least 8 bytes, got {0}")]
    PassphraseTooShort(usize),

    #[error("Passphrase too long: at most 63 bytes, got {0}")]
    PassphraseTooLong(usize),

    #[error("Passphrase contains a non-printable ASCII character at byte {position}")]
    InvalidPassphraseCharacter { position: usize },
}

/// A credential error tagged with the operating mode it belongs to
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{mode} credentials: {source}")]
pub struct CheckError {
    pub mode: WifiMode,
    #[source]
    pub source: CredentialError,
}

impl CheckError {
    pub fn new(mode: WifiMode, source: CredentialError) -> Self {
        Self { mode, source }
    }
}
