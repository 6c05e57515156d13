use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::time::Duration;

pub const DEFAULT_TEXT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Deserialize)]
pub struct NotesConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub google: GoogleConfig,
    pub models: ModelConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleConfig {
    /// Absent or blank keys disable text generation entirely.
    pub api_key: Option<Secret<String>>,
}

impl GoogleConfig {
    /// The credential, if one is usable.
    pub fn api_key(&self) -> Option<&Secret<String>> {
        self.api_key
            .as_ref()
            .filter(|key| !key.expose_secret().trim().is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Model used for every note (e.g., gemini-3-flash-preview)
    pub text_model: String,
    /// Base URL of the generative language API
    pub api_base: String,
    /// Upper bound on a single generation call
    pub request_timeout_secs: u64,
}

impl ModelConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl NotesConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;

        let api_key = resolve_api_key(|key| env::var(key).ok());

        Ok(NotesConfig {
            common: common_config,
            google: GoogleConfig { api_key },
            models: ModelConfig {
                text_model: get_env("GENAI_TEXT_MODEL", DEFAULT_TEXT_MODEL),
                api_base: get_env("GENAI_API_BASE", DEFAULT_API_BASE),
                request_timeout_secs: get_env(
                    "GENAI_REQUEST_TIMEOUT_SECS",
                    &DEFAULT_REQUEST_TIMEOUT_SECS.to_string(),
                )
                .parse()
                .map_err(|e| {
                    AppError::ConfigError(anyhow::anyhow!(
                        "GENAI_REQUEST_TIMEOUT_SECS must be a whole number of seconds: {}",
                        e
                    ))
                })?,
            },
        })
    }
}

/// First non-blank of `GOOGLE_API_KEY` and `API_KEY`.
fn resolve_api_key(lookup: impl Fn(&str) -> Option<String>) -> Option<Secret<String>> {
    ["GOOGLE_API_KEY", "API_KEY"]
        .into_iter()
        .filter_map(|name| lookup(name))
        .find(|value| !value.trim().is_empty())
        .map(Secret::new)
}

fn get_env(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_api_key_counts_as_missing() {
        let google = GoogleConfig {
            api_key: Some(Secret::new("   ".to_string())),
        };
        assert!(google.api_key().is_none());

        let google = GoogleConfig { api_key: None };
        assert!(google.api_key().is_none());
    }

    #[test]
    fn present_api_key_is_usable() {
        let google = GoogleConfig {
            api_key: Some(Secret::new("key-123".to_string())),
        };
        assert_eq!(google.api_key().unwrap().expose_secret(), "key-123");
    }

    #[test]
    fn model_defaults_point_at_gemini() {
        let models = ModelConfig::default();
        assert_eq!(models.text_model, "gemini-3-flash-preview");
        assert_eq!(models.request_timeout(), Duration::from_secs(30));
    }

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: Vec<(String, String)> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| {
            vars.iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        }
    }

    #[test]
    fn blank_google_key_falls_back_to_api_key() {
        let key = resolve_api_key(lookup(&[("GOOGLE_API_KEY", ""), ("API_KEY", "real-key")]));
        assert_eq!(key.unwrap().expose_secret(), "real-key");

        let key = resolve_api_key(lookup(&[("GOOGLE_API_KEY", "  "), ("API_KEY", "real-key")]));
        assert_eq!(key.unwrap().expose_secret(), "real-key");
    }

    #[test]
    fn google_key_wins_when_both_are_set() {
        let key = resolve_api_key(lookup(&[("GOOGLE_API_KEY", "g-key"), ("API_KEY", "a-key")]));
        assert_eq!(key.unwrap().expose_secret(), "g-key");
    }

    #[test]
    fn no_usable_key_disables_generation() {
        assert!(resolve_api_key(lookup(&[])).is_none());
        assert!(resolve_api_key(lookup(&[("GOOGLE_API_KEY", ""), ("API_KEY", " ")])).is_none());
    }
}
