use crate::constants::*;
use crate::error::{ConfigError, Result};
use crate::models::NormTable;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::env::{self, VarError};
use std::fmt;
use std::sync::OnceLock;

const REDACTED: &str = "[redacted]";

/// Where the resolved API key came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiKeySource {
    Environment,
    Fallback,
}

/// Groq API credential.
///
/// The raw value never shows up in `Debug`, `Display` or serialized output;
/// use [`ApiKey::expose`] when building an authorization header.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey {
    value: String,
    source: ApiKeySource,
}

impl ApiKey {
    /// Resolve the key through `lookup`, falling back to the placeholder when
    /// the variable is absent. An empty value counts as unset. Never fails.
    pub fn resolve_with<F>(lookup: F) -> Self
    where
        F: FnOnce(&str) -> Option<String>,
    {
        match lookup(GROQ_API_KEY_ENV) {
            Some(value) if !value.is_empty() => ApiKey {
                value,
                source: ApiKeySource::Environment,
            },
            _ => ApiKey {
                value: FALLBACK_GROQ_API_KEY.to_string(),
                source: ApiKeySource::Fallback,
            },
        }
    }

    pub fn from_env() -> Self {
        let key = Self::resolve_with(read_env);
        let unset = env::var_os(GROQ_API_KEY_ENV).map_or(true, |v| v.is_empty());
        if key.is_fallback() && unset {
            tracing::warn!(
                "{} is not set; using placeholder key, inference requests will fail",
                GROQ_API_KEY_ENV
            );
        }
        key
    }

    pub fn expose(&self) -> &str {
        &self.value
    }

    pub fn source(&self) -> ApiKeySource {
        self.source
    }

    pub fn is_fallback(&self) -> bool {
        self.source == ApiKeySource::Fallback
    }
}

/// Non-UTF-8 values are logged and treated as unset.
fn read_env(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) => Some(value),
        Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(_)) => {
            tracing::warn!(
                "{} is not valid UTF-8; using placeholder key, inference requests will fail",
                name
            );
            None
        }
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKey")
            .field("value", &REDACTED)
            .field("source", &self.source)
            .finish()
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", REDACTED)
    }
}

impl Serialize for ApiKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ApiKey", 2)?;
        state.serialize_field("value", REDACTED)?;
        state.serialize_field("source", &self.source)?;
        state.end()
    }
}

/// Settings for the metrics analysis server.
///
/// Everything except the API key is a compile-time constant.
#[derive(Debug, Clone, Serialize)]
pub struct Settings {
    pub groq_api_key: ApiKey,
    pub groq_model: String,
    pub host: String,
    pub port: u16,
    pub health_norms: NormTable,
}

impl Settings {
    /// Load settings, falling back to the placeholder key when `GROQ_API_KEY`
    /// is missing. Reads `.env` from the working directory if present.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::with_api_key(ApiKey::from_env())
    }

    /// Like [`Settings::from_env`], but a missing `GROQ_API_KEY` is an error.
    pub fn from_env_strict() -> Result<Self> {
        dotenv::dotenv().ok();

        let api_key = ApiKey::resolve_with(read_env);
        if api_key.is_fallback() {
            return Err(ConfigError::MissingApiKey);
        }

        Ok(Self::with_api_key(api_key))
    }

    pub fn with_api_key(groq_api_key: ApiKey) -> Self {
        tracing::debug!(
            model = GROQ_MODEL,
            host = DEFAULT_HOST,
            port = DEFAULT_PORT,
            key_source = ?groq_api_key.source(),
            "Settings assembled"
        );

        Settings {
            groq_api_key,
            groq_model: GROQ_MODEL.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            health_norms: NormTable::standard(),
        }
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Process-wide settings, resolved from the environment on first access.
pub fn settings() -> &'static Settings {
    SETTINGS.get_or_init(Settings::from_env)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_from(value: Option<&str>) -> ApiKey {
        ApiKey::resolve_with(|name| {
            assert_eq!(name, GROQ_API_KEY_ENV);
            value.map(str::to_string)
        })
    }

    #[test]
    fn test_missing_key_uses_fallback() {
        let key = key_from(None);
        assert_eq!(key.expose(), FALLBACK_GROQ_API_KEY);
        assert!(key.is_fallback());
    }

    #[test]
    fn test_empty_key_uses_fallback() {
        let key = key_from(Some(""));
        assert_eq!(key.expose(), FALLBACK_GROQ_API_KEY);
        assert_eq!(key.source(), ApiKeySource::Fallback);
    }

    #[test]
    fn test_present_key_is_used_verbatim() {
        let key = key_from(Some(" gsk_test_123 "));
        assert_eq!(key.expose(), " gsk_test_123 ");
        assert_eq!(key.source(), ApiKeySource::Environment);
    }

    #[test]
    fn test_key_is_redacted() {
        let key = key_from(Some("gsk_secret"));
        assert!(!format!("{:?}", key).contains("gsk_secret"));
        assert!(!key.to_string().contains("gsk_secret"));

        let json = serde_json::to_value(&key).unwrap();
        assert_eq!(json["value"], REDACTED);
        assert_eq!(json["source"], "environment");
    }

    #[test]
    fn test_constant_settings() {
        let settings = Settings::with_api_key(key_from(None));
        assert_eq!(settings.groq_model, "llama-3.1-70b-versatile");
        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.port, 8000);
        assert_eq!(settings.server_address(), "0.0.0.0:8000");
        assert_eq!(settings.health_norms, NormTable::standard());
    }
}
