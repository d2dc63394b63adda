//! Station and access point credentials compiled into the firmware
//!
//! Edit the defaults below, or override them when building:
//!
//! ```bash
//! WIFI_STA_SSID=HomeNet WIFI_STA_PASS=correcthorse cargo build --release
//! ```
//!
//! The station pair is used to join the local network. The access point pair
//! names the network the module hosts itself, e.g. for configuration when no
//! local network is reachable.

use super::types::CredentialSet;

macro_rules! env_or_default {
    ($env:literal, $default:literal) => {
        match option_env!($env) {
            Some(val) => val,
            None => $default,
        }
    };
}

/// SSID of the network to join in station mode
pub const STATION_SSID: &str = env_or_default!("WIFI_STA_SSID", "MyWiFiNetwork");

/// Passphrase of the network to join in station mode, empty for open networks
pub const STATION_PASSPHRASE: &str = env_or_default!("WIFI_STA_PASS", "password1234");

/// SSID advertised in access point mode
pub const ACCESS_POINT_SSID: &str = env_or_default!("WIFI_AP_SSID", "ESP-07-Access-Point");

/// Passphrase required to join the access point, empty for an open AP
pub const ACCESS_POINT_PASSPHRASE: &str = env_or_default!("WIFI_AP_PASS", "123456789");

/// All four values grouped by mode
pub static CREDENTIALS: CredentialSet<'static> = CredentialSet::new(
    STATION_SSID,
    STATION_PASSPHRASE,
    ACCESS_POINT_SSID,
    ACCESS_POINT_PASSPHRASE,
);

pub fn credentials() -> &'static CredentialSet<'static> {
    &CREDENTIALS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Security, WifiMode};

    fn built_with_defaults() -> bool {
        option_env!("WIFI_STA_SSID").is_none()
            && option_env!("WIFI_STA_PASS").is_none()
            && option_env!("WIFI_AP_SSID").is_none()
            && option_env!("WIFI_AP_PASS").is_none()
    }

    #[test]
    fn test_default_values() {
        if !built_with_defaults() {
            return;
        }

        assert_eq!(STATION_SSID, "MyWiFiNetwork");
        assert_eq!(STATION_PASSPHRASE, "password1234");
        assert_eq!(ACCESS_POINT_SSID, "ESP-07-Access-Point");
        assert_eq!(ACCESS_POINT_PASSPHRASE, "123456789");
    }

    #[test]
    fn test_default_values_pass_checks() {
        let defaults = CredentialSet::new(
            "MyWiFiNetwork",
            "password1234",
            "ESP-07-Access-Point",
            "123456789",
        );

        assert!(defaults.check_all().is_empty());
        assert_eq!(defaults.station.security(), Security::Wpa2Personal);
        assert_eq!(defaults.access_point.security(), Security::Wpa2Personal);
    }

    #[test]
    fn test_compiled_credentials_pass_checks() {
        assert!(credentials().is_valid(), "{:?}", credentials().check_all());
    }

    #[test]
    fn test_grouped_view_matches_constants() {
        let set = credentials();
        assert_eq!(set.get(WifiMode::Station).ssid.as_str(), STATION_SSID);
        assert_eq!(set.station.passphrase.expose_secret(), STATION_PASSPHRASE);
        assert_eq!(set.get(WifiMode::AccessPoint).ssid.as_str(), ACCESS_POINT_SSID);
        assert_eq!(set.access_point.passphrase.expose_secret(), ACCESS_POINT_PASSPHRASE);
    }

    #[test]
    fn test_rereading_is_stable() {
        assert!(std::ptr::eq(credentials(), credentials()));
        assert_eq!(*credentials(), CREDENTIALS);
        assert_eq!(STATION_SSID, credentials().station.ssid.as_str());
    }
}
