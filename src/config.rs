//! Run configuration: the API key and the upload endpoint.

use crate::error::{Error, Result};

/// Environment variable carrying the API key.
pub const API_KEY_VAR: &str = "API_KEY";

/// Upload endpoint; `x` and `y` are appended as query parameters.
pub const DEFAULT_ENDPOINT: &str = "https://fontys.cloud-builders.nl/api/v1/send-image";

#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: String,
    pub endpoint: String,
}

impl Config {
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Config {
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        }
    }

    /// Read the API key from the process environment. The endpoint is
    /// always [`DEFAULT_ENDPOINT`].
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`Config::from_env`] over an arbitrary variable lookup.
    /// An unset or empty key is rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(API_KEY_VAR) {
            Some(key) if !key.is_empty() => Ok(Config::new(key, DEFAULT_ENDPOINT)),
            _ => Err(Error::MissingApiKey(API_KEY_VAR)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_lookup() {
        let config = Config::from_lookup(|name| {
            assert_eq!(name, "API_KEY");
            Some("secret123".to_string())
        })
        .unwrap();
        assert_eq!(config.api_key, "secret123");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_missing_key() {
        let err = Config::from_lookup(|_| None).unwrap_err();
        assert!(matches!(err, Error::MissingApiKey("API_KEY")));
        assert_eq!(err.to_string(), "Environment variable API_KEY is not set");
    }

    #[test]
    fn test_empty_key_is_missing() {
        let err = Config::from_lookup(|_| Some(String::new())).unwrap_err();
        assert!(matches!(err, Error::MissingApiKey(_)));
    }
}
