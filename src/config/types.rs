// Configuration type definitions

use serde::Deserialize;

use crate::autocomplete::DEFAULT_DEBOUNCE_MS;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_MAX_VISIBLE_SUGGESTIONS: usize = 8;

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_max_visible_suggestions() -> usize {
    DEFAULT_MAX_VISIBLE_SUGGESTIONS
}

/// Search endpoint configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchConfig {
    /// Base URL; `/search_ticker` is appended
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Idle time after the last keystroke before a search is sent
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Upper bound for a single search request
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            endpoint: default_endpoint(),
            debounce_ms: default_debounce_ms(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Display configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_max_visible_suggestions")]
    pub max_visible_suggestions: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            max_visible_suggestions: default_max_visible_suggestions(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.search.endpoint, "http://127.0.0.1:5000");
        assert_eq!(config.search.debounce_ms, 300);
        assert_eq!(config.search.timeout_ms, 5000);
        assert_eq!(config.ui.max_visible_suggestions, 8);
    }

    #[test]
    fn test_full_config() {
        let config: Config = toml::from_str(
            r#"
[search]
endpoint = "https://tickers.example.com"
debounce_ms = 150
timeout_ms = 2000

[ui]
max_visible_suggestions = 12
"#,
        )
        .unwrap();

        assert_eq!(config.search.endpoint, "https://tickers.example.com");
        assert_eq!(config.search.debounce_ms, 150);
        assert_eq!(config.search.timeout_ms, 2000);
        assert_eq!(config.ui.max_visible_suggestions, 12);
    }

    #[test]
    fn test_wrong_type_is_error() {
        let result: Result<Config, _> = toml::from_str("[search]\ndebounce_ms = \"fast\"\n");
        assert!(result.is_err());
    }

    // For any subset of fields present in [search], the missing ones fall back to defaults
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_missing_fields_use_defaults(
            include_endpoint in prop::bool::ANY,
            include_debounce in prop::bool::ANY,
            debounce in 0u64..5000u64,
        ) {
            let mut toml_content = String::from("[search]\n");
            if include_endpoint {
                toml_content.push_str("endpoint = \"http://localhost:8080\"\n");
            }
            if include_debounce {
                toml_content.push_str(&format!("debounce_ms = {}\n", debounce));
            }

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse config with missing fields");
            let config = config.unwrap();

            let expected_endpoint = if include_endpoint { "http://localhost:8080" } else { DEFAULT_ENDPOINT };
            let expected_debounce = if include_debounce { debounce } else { DEFAULT_DEBOUNCE_MS };
            prop_assert_eq!(config.search.endpoint.as_str(), expected_endpoint);
            prop_assert_eq!(config.search.debounce_ms, expected_debounce);
            prop_assert_eq!(config.search.timeout_ms, DEFAULT_TIMEOUT_MS);
            prop_assert_eq!(config.ui, UiConfig::default());
        }
    }
}
