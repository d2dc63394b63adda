use pretty_assertions::assert_eq;
use wifi_credentials::{
    ACCESS_POINT_PASSPHRASE, ACCESS_POINT_SSID, CredentialReport, CredentialSet, STATION_PASSPHRASE,
    STATION_SSID, Security, WifiMode, credentials,
};

#[test]
fn compiled_ssids_are_within_limits() {
    for ssid in [STATION_SSID, ACCESS_POINT_SSID] {
        assert!(!ssid.is_empty());
        assert!(ssid.len() <= 32, "{ssid} is {} bytes", ssid.len());
    }
}

#[test]
fn compiled_passphrases_are_open_or_wpa2() {
    for passphrase in [STATION_PASSPHRASE, ACCESS_POINT_PASSPHRASE] {
        assert!(
            passphrase.is_empty() || (8..=63).contains(&passphrase.len()),
            "passphrase of {} bytes",
            passphrase.len()
        );
    }
}

#[test]
fn initializer_reads_pairs_by_mode() {
    let set = credentials();

    let station = set.get(WifiMode::Station);
    assert_eq!(station.ssid.as_str(), STATION_SSID);
    assert_eq!(station.passphrase.expose_secret(), STATION_PASSPHRASE);

    let access_point = set.get(WifiMode::AccessPoint);
    assert_eq!(access_point.ssid.as_str(), ACCESS_POINT_SSID);
    assert_eq!(access_point.passphrase.expose_secret(), ACCESS_POINT_PASSPHRASE);
}

#[test]
fn open_access_point_reports_cleanly() {
    let set = CredentialSet::new("MyWiFiNetwork", "password1234", "ESP-07-Setup", "");
    let report = CredentialReport::from_set(&set, false);

    assert!(report.valid);
    assert_eq!(report.networks[1].security, Security::Open);
    assert_eq!(report.networks[1].fingerprint, None);
    assert!(report.networks[0].fingerprint.is_some());
}

#[test]
fn report_of_compiled_credentials_is_repeatable() {
    let first = CredentialReport::from_set(credentials(), false);
    let second = CredentialReport::from_set(credentials(), false);

    assert_eq!(first, second);
    assert!(first.valid);
}
