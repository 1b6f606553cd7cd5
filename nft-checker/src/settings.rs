use address_svc_client::{DEFAULT_ADDRESS_BASE_URL, DEFAULT_SYMBOL_BASE_URL};
use config::{Config, ConfigError};
use http_client::HttpClientSettings;
use serde::Deserialize;

pub static DEFAULT_SETTINGS_FILE: &str = "settings.toml";
pub static ENV_PREFIX: &str = "NFT_CHECKER";

#[derive(Deserialize, Debug, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub http: HttpClientSettings,
    #[serde(default = "Settings::default_symbol_base_url")]
    pub symbol_base_url: String,
    #[serde(default = "Settings::default_address_base_url")]
    pub address_base_url: String,
    #[serde(default = "Settings::default_output_path")]
    pub output_path: String,
}

impl Settings {
    fn default_symbol_base_url() -> String {
        DEFAULT_SYMBOL_BASE_URL.to_owned()
    }

    fn default_address_base_url() -> String {
        DEFAULT_ADDRESS_BASE_URL.to_owned()
    }

    fn default_output_path() -> String {
        "results.csv".to_owned()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            http: HttpClientSettings::default(),
            symbol_base_url: Self::default_symbol_base_url(),
            address_base_url: Self::default_address_base_url(),
            output_path: Self::default_output_path(),
        }
    }
}

/// Reads settings from an optional TOML file layered with `NFT_CHECKER__*`
/// environment variables; missing sources fall back to defaults.
pub fn try_read_file_config(file: &str, env_prefix: &str) -> Result<Settings, ConfigError> {
    Config::builder()
        .add_source(config::File::with_name(file).required(false))
        .add_source(config::Environment::with_prefix(env_prefix).separator("__"))
        .build()
        .and_then(Config::try_deserialize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_file_yields_defaults() {
        let settings = try_read_file_config("no-such-settings-file", "NFT_CHECKER_TEST_ABSENT").unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.output_path, "results.csv");
        assert_eq!(settings.symbol_base_url, DEFAULT_SYMBOL_BASE_URL);
    }
}
