//! Typed views over Wi-Fi credentials

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{CheckError, CheckResult, CredentialError, CredentialResult};

/// Maximum SSID length in bytes (IEEE 802.11)
pub const MAX_SSID_LEN: usize = 32;

/// Minimum WPA2 passphrase length in bytes
pub const MIN_PASSPHRASE_LEN: usize = 8;

/// Maximum WPA2 passphrase length in bytes
pub const MAX_PASSPHRASE_LEN: usize = 63;

/// Wi-Fi operating mode a credential pair is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WifiMode {
    /// Join an existing network as a client
    Station,
    /// Host a network for other clients
    AccessPoint,
}

impl WifiMode {
    pub const ALL: [WifiMode; 2] = [WifiMode::Station, WifiMode::AccessPoint];

    pub fn as_str(&self) -> &'static str {
        match self {
            WifiMode::Station => "station",
            WifiMode::AccessPoint => "access_point",
        }
    }
}

impl fmt::Display for WifiMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Security implied by a passphrase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Security {
    Open,
    Wpa2Personal,
}

impl Security {
    pub fn as_str(&self) -> &'static str {
        match self {
            Security::Open => "open",
            Security::Wpa2Personal => "wpa2_personal",
        }
    }
}

impl fmt::Display for Security {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Network name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Ssid<'a>(&'a str);

impl<'a> Ssid<'a> {
    pub const fn new(ssid: &'a str) -> Self {
        Self(ssid)
    }

    pub const fn as_str(&self) -> &'a str {
        self.0
    }

    /// Length in bytes, which is what the 32 byte limit applies to
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check that the SSID is non-empty and fits in 32 bytes
    pub fn check(&self) -> CredentialResult<()> {
        if self.is_empty() {
            return Err(CredentialError::EmptySsid);
        }

        if self.len() > MAX_SSID_LEN {
            return Err(CredentialError::SsidTooLong(self.len()));
        }

        Ok(())
    }
}

impl fmt::Display for Ssid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Shared secret for a network
///
/// `Debug` and `Display` never print the secret. Use [`Passphrase::expose_secret`]
/// where the clear text is actually needed.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Passphrase<'a>(&'a str);

impl<'a> Passphrase<'a> {
    pub const fn new(passphrase: &'a str) -> Self {
        Self(passphrase)
    }

    pub const fn expose_secret(&self) -> &'a str {
        self.0
    }

    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// An empty passphrase denotes an open network
    pub const fn is_open(&self) -> bool {
        self.0.is_empty()
    }

    pub fn security(&self) -> Security {
        if self.is_open() {
            Security::Open
        } else {
            Security::Wpa2Personal
        }
    }

    /// Check WPA2 passphrase rules: 8 to 63 printable ASCII bytes, or empty
    pub fn check(&self) -> CredentialResult<()> {
        if self.is_open() {
            return Ok(());
        }

        let len = self.len();
        if len < MIN_PASSPHRASE_LEN {
            return Err(CredentialError::PassphraseTooShort(len));
        }
        if len > MAX_PASSPHRASE_LEN {
            return Err(CredentialError::PassphraseTooLong(len));
        }

        match self.0.bytes().position(|b| !(0x20..=0x7e).contains(&b)) {
            Some(position) => Err(CredentialError::InvalidPassphraseCharacter { position }),
            None => Ok(()),
        }
    }
}

impl fmt::Display for Passphrase<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_open() {
            f.write_str("<open>")
        } else {
            f.write_str("********")
        }
    }
}

impl fmt::Debug for Passphrase<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Passphrase")
            .field(&format_args!("{self}"))
            .finish()
    }
}

/// SSID and passphrase used for one operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkCredentials<'a> {
    pub mode: WifiMode,
    pub ssid: Ssid<'a>,
    pub passphrase: Passphrase<'a>,
}

impl<'a> NetworkCredentials<'a> {
    pub const fn new(mode: WifiMode, ssid: &'a str, passphrase: &'a str) -> Self {
        Self {
            mode,
            ssid: Ssid::new(ssid),
            passphrase: Passphrase::new(passphrase),
        }
    }

    pub fn security(&self) -> Security {
        self.passphrase.security()
    }

    /// All violated properties of this pair, SSID first
    pub fn problems(&self) -> Vec<CredentialError> {
        [self.ssid.check(), self.passphrase.check()]
            .into_iter()
            .filter_map(Result::err)
            .collect()
    }

    /// Check the pair, reporting the first violated property
    pub fn check(&self) -> CheckResult<()> {
        match self.problems().into_iter().next() {
            Some(source) => Err(CheckError::new(self.mode, source)),
            None => Ok(()),
        }
    }
}

/// Station and access point credentials of one firmware build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialSet<'a> {
    pub station: NetworkCredentials<'a>,
    pub access_point: NetworkCredentials<'a>,
}

impl<'a> CredentialSet<'a> {
    pub const fn new(
        station_ssid: &'a str,
        station_passphrase: &'a str,
        access_point_ssid: &'a str,
        access_point_passphrase: &'a str,
    ) -> Self {
        Self {
            station: NetworkCredentials::new(WifiMode::Station, station_ssid, station_passphrase),
            access_point: NetworkCredentials::new(
                WifiMode::AccessPoint,
                access_point_ssid,
                access_point_passphrase,
            ),
        }
    }

    pub fn get(&self, mode: WifiMode) -> &NetworkCredentials<'a> {
        match mode {
            WifiMode::Station => &self.station,
            WifiMode::AccessPoint => &self.access_point,
        }
    }

    /// Both pairs, station first
    pub fn iter(&self) -> impl Iterator<Item = &NetworkCredentials<'a>> {
        WifiMode::ALL.into_iter().map(move |mode| self.get(mode))
    }

    /// Every violated property across both modes
    pub fn check_all(&self) -> Vec<CheckError> {
        let errors: Vec<CheckError> = self
            .iter()
            .flat_map(|network| {
                network
                    .problems()
                    .into_iter()
                    .map(move |source| CheckError::new(network.mode, source))
            })
            .collect();

        debug!(errors = errors.len(), "Checked station and access point credentials");
        errors
    }

    pub fn is_valid(&self) -> bool {
        self.check_all().is_empty()
    }
}
