//! Environment-derived API configuration exposed on `/api/config`.

use serde::Serialize;
use std::env;

/// Names of the environment variables the config endpoint reports on.
pub const BLOCKCYPHER_VAR: &str = "BLOCKCYPHER_API_KEY";
pub const ELECTRUM_VAR: &str = "ELECTRUM_RPC_PASSWORD";

/// The JSON record returned by `/api/config`
///
/// Field names serialize in camelCase to match what the frontend expects.
/// Invariant: each `has_*` flag is true exactly when the corresponding value
/// is non-empty. Note that `electrum_password` is handed to any client that
/// asks; the endpoint has no access control.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfig {
    pub blockcypher_token: String,
    pub electrum_password: String,
    pub has_blockcypher: bool,
    pub has_electrum: bool,
}

impl ApiConfig {
    /// Builds the record from the two secret values, deriving the presence flags
    pub fn new(blockcypher_token: String, electrum_password: String) -> Self {
        Self {
            has_blockcypher: !blockcypher_token.is_empty(),
            has_electrum: !electrum_password.is_empty(),
            blockcypher_token,
            electrum_password,
        }
    }

    /// Reads the two variables from the process environment, treating unset as empty
    ///
    /// Called once at startup; handlers only ever see the captured copy.
    pub fn from_env() -> Self {
        Self::new(
            env::var(BLOCKCYPHER_VAR).unwrap_or_default(),
            env::var(ELECTRUM_VAR).unwrap_or_default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_track_presence() {
        let config = ApiConfig::new(String::new(), String::new());
        assert!(!config.has_blockcypher);
        assert!(!config.has_electrum);

        let config = ApiConfig::new("abc123".to_string(), String::new());
        assert!(config.has_blockcypher);
        assert!(!config.has_electrum);
    }

    #[test]
    fn test_serializes_camel_case() {
        let config = ApiConfig::new("abc123".to_string(), String::new());
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "blockcypherToken": "abc123",
                "electrumPassword": "",
                "hasBlockcypher": true,
                "hasElectrum": false,
            })
        );
    }
}
