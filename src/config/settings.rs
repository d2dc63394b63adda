//! Runtime settings

use std::fmt;

use crate::config::cli::{CliArgs, Command, OutputFormat};
use crate::core::{
    credentials::{
        ACCESS_POINT_PASSPHRASE, ACCESS_POINT_SSID, STATION_PASSPHRASE, STATION_SSID,
    },
    types::CredentialSet,
};

/// What the binary does with the credentials
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Show,
    Check,
}

/// Runtime configuration settings
///
/// Candidate values fall back to the compiled-in credentials.
#[derive(Clone)]
pub struct Settings {
    pub station_ssid: String,
    pub station_passphrase: String,
    pub ap_ssid: String,
    pub ap_passphrase: String,
    pub overridden: bool,
    pub action: Action,
    pub format: OutputFormat,
    pub reveal: bool,
}

impl Settings {
    /// Borrowed view over the candidate values
    pub fn credentials(&self) -> CredentialSet<'_> {
        CredentialSet::new(
            &self.station_ssid,
            &self.station_passphrase,
            &self.ap_ssid,
            &self.ap_passphrase,
        )
    }
}

impl From<CliArgs> for Settings {
    fn from(args: CliArgs) -> Self {
        let overridden = args.station_ssid.is_some()
            || args.station_passphrase.is_some()
            || args.ap_ssid.is_some()
            || args.ap_passphrase.is_some();

        let (action, output) = match args.command {
            Command::Show(output) => (Action::Show, output),
            Command::Check(output) => (Action::Check, output),
        };

        Settings {
            station_ssid: args.station_ssid.unwrap_or_else(|| STATION_SSID.to_string()),
            station_passphrase: args
                .station_passphrase
                .unwrap_or_else(|| STATION_PASSPHRASE.to_string()),
            ap_ssid: args.ap_ssid.unwrap_or_else(|| ACCESS_POINT_SSID.to_string()),
            ap_passphrase: args
                .ap_passphrase
                .unwrap_or_else(|| ACCESS_POINT_PASSPHRASE.to_string()),
            overridden,
            action,
            format: output.format,
            reveal: output.reveal,
        }
    }
}

// Passphrases go through the redacting Debug of `CredentialSet`
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("credentials", &self.credentials())
            .field("overridden", &self.overridden)
            .field("action", &self.action)
            .field("format", &self.format)
            .field("reveal", &self.reveal)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Settings {
        Settings::from(CliArgs::try_parse_from(args).unwrap())
    }

    #[test]
    fn test_falls_back_to_compiled_credentials() {
        let settings = parse(&["wifi-credentials", "show"]);

        assert_eq!(settings.station_ssid, STATION_SSID);
        assert_eq!(settings.ap_passphrase, ACCESS_POINT_PASSPHRASE);
        assert!(!settings.overridden);
        assert_eq!(settings.action, Action::Show);
        assert_eq!(settings.credentials(), *crate::core::credentials::credentials());
    }

    #[test]
    fn test_overrides_replace_single_values() {
        let settings = parse(&[
            "wifi-credentials",
            "--ap-ssid",
            "Setup-AP",
            "check",
            "--format",
            "json",
        ]);

        assert!(settings.overridden);
        assert_eq!(settings.action, Action::Check);
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.credentials().access_point.ssid.as_str(), "Setup-AP");
        assert_eq!(settings.station_ssid, STATION_SSID);
    }

    #[test]
    fn test_debug_redacts_passphrases() {
        let settings = parse(&[
            "wifi-credentials",
            "--station-passphrase",
            "hunter2hunter2",
            "show",
        ]);

        let debug = format!("{settings:?}");
        assert!(!debug.contains("hunter2hunter2"));
        assert!(debug.contains("Passphrase(********)"));
    }
}
