//! Wi-Fi Credentials
//!
//! Build-time credentials for an embedded Wi-Fi module:
//! - Station mode: the network the module joins
//! - Access point mode: the network the module hosts itself
//!
//! The values are plain constants. Property checks and a redacted report are
//! provided for tooling; nothing here talks to a radio.

pub mod config;
pub mod core;

pub use crate::core::{
    credentials::{
        ACCESS_POINT_PASSPHRASE, ACCESS_POINT_SSID, CREDENTIALS, STATION_PASSPHRASE, STATION_SSID,
        credentials,
    },
    error::{CheckError, CredentialError},
    report::CredentialReport,
    types::{CredentialSet, NetworkCredentials, Passphrase, Security, Ssid, WifiMode},
};
