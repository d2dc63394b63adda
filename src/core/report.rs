//! Redacted summary of a credential set
//!
//! Passphrases are shown as a length and a short SHA3-256 fingerprint over
//! SSID and passphrase, so two builds can be compared without printing the
//! secret itself.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha3::{Digest, Sha3_256};

use crate::core::types::{CredentialSet, NetworkCredentials, Security, WifiMode};

/// Number of digest bytes kept in a fingerprint
const FINGERPRINT_LEN: usize = 8;

/// Fingerprint of an SSID/passphrase pair, `None` for open networks
pub fn fingerprint(credentials: &NetworkCredentials<'_>) -> Option<String> {
    if credentials.passphrase.is_open() {
        return None;
    }

    let mut hasher = Sha3_256::new();
    hasher.update(credentials.ssid.as_str().as_bytes());
    hasher.update([0u8]);
    hasher.update(credentials.passphrase.expose_secret().as_bytes());
    let digest = hasher.finalize();

    Some(hex::encode(&digest[..FINGERPRINT_LEN]))
}

/// Report entry for one operating mode
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkReport {
    pub mode: WifiMode,
    pub ssid: String,
    pub ssid_len: usize,
    pub security: Security,
    pub passphrase_len: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
    /// Clear text, only present when explicitly revealed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passphrase: Option<String>,
    pub problems: Vec<String>,
}

impl NetworkReport {
    pub fn new(credentials: &NetworkCredentials<'_>, reveal: bool) -> Self {
        Self {
            mode: credentials.mode,
            ssid: credentials.ssid.as_str().to_string(),
            ssid_len: credentials.ssid.len(),
            security: credentials.security(),
            passphrase_len: credentials.passphrase.len(),
            fingerprint: fingerprint(credentials),
            passphrase: reveal.then(|| credentials.passphrase.expose_secret().to_string()),
            problems: credentials
                .problems()
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.problems.is_empty()
    }
}

/// Report over station and access point credentials
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CredentialReport {
    pub valid: bool,
    pub networks: Vec<NetworkReport>,
}

impl CredentialReport {
    pub fn from_set(set: &CredentialSet<'_>, reveal: bool) -> Self {
        let networks: Vec<NetworkReport> = set
            .iter()
            .map(|network| NetworkReport::new(network, reveal))
            .collect();
        let valid = networks.iter().all(NetworkReport::is_valid);

        Self { valid, networks }
    }

    /// Number of violated properties across all modes
    pub fn problem_count(&self) -> usize {
        self.networks.iter().map(|n| n.problems.len()).sum()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for NetworkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.mode)?;
        writeln!(f, "  ssid:       {} ({} bytes)", self.ssid, self.ssid_len)?;
        writeln!(f, "  security:   {}", self.security)?;

        match (&self.passphrase, &self.fingerprint) {
            (Some(passphrase), _) => {
                writeln!(f, "  passphrase: {passphrase} ({} bytes)", self.passphrase_len)?
            }
            (None, Some(fingerprint)) => writeln!(
                f,
                "  passphrase: {} bytes, fingerprint {fingerprint}",
                self.passphrase_len
            )?,
            (None, None) => writeln!(f, "  passphrase: <open>")?,
        }

        if self.problems.is_empty() {
            write!(f, "  status:     ok")
        } else {
            write!(f, "  status:     invalid")?;
            for problem in &self.problems {
                write!(f, "\n    - {problem}")?;
            }
            Ok(())
        }
    }
}

impl fmt::Display for CredentialReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for network in &self.networks {
            writeln!(f, "{network}")?;
        }

        if self.valid {
            write!(f, "all credentials valid")
        } else {
            write!(f, "{} problem(s) found", self.problem_count())
        }
    }
}
