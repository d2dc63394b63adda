//! Command-line argument parsing

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug, Clone)]
#[clap(name = "wifi-credentials", version, author)]
#[clap(about = "Inspect and check the Wi-Fi credentials compiled into the firmware")]
pub struct CliArgs {
    /// Candidate station SSID (defaults to the compiled-in value)
    #[clap(long, env = "WIFI_STA_SSID")]
    pub station_ssid: Option<String>,

    /// Candidate station passphrase, empty for an open network
    #[clap(long, env = "WIFI_STA_PASS", hide_env_values = true)]
    pub station_passphrase: Option<String>,

    /// Candidate access point SSID
    #[clap(long, env = "WIFI_AP_SSID")]
    pub ap_ssid: Option<String>,

    /// Candidate access point passphrase, empty for an open AP
    #[clap(long, env = "WIFI_AP_PASS", hide_env_values = true)]
    pub ap_passphrase: Option<String>,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print a redacted report of the credentials
    Show(OutputArgs),

    /// Print the report and fail if any credential is invalid
    Check(OutputArgs),
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct OutputArgs {
    /// Output format
    #[clap(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Include passphrases in clear text
    #[clap(long)]
    pub reveal: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
