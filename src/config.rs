use crate::errors::ConfigError;
use std::{env, path::PathBuf};
use url::Url;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8080";
pub const PUBLIC_BASE: &str = "/webapp/";

/// Where the loader may take the auth token from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenPolicy {
    /// Only the host-injected context counts.
    #[default]
    HostOnly,
    /// Host context first, then `init_data` from the page query.
    QueryFallback,
}

impl TokenPolicy {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim() {
            "host-only" => Ok(Self::HostOnly),
            "query-fallback" => Ok(Self::QueryFallback),
            other => Err(ConfigError::invalid(
                "TOKEN_POLICY",
                format!("expected 'host-only' or 'query-fallback', got '{other}'"),
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoaderConfig {
    pub api_base: Url,
    pub token_policy: TokenPolicy,
}

impl LoaderConfig {
    pub fn new(api_base: Url) -> Self {
        Self {
            api_base,
            token_policy: TokenPolicy::default(),
        }
    }

    pub fn with_token_policy(mut self, policy: TokenPolicy) -> Self {
        self.token_policy = policy;
        self
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let api_base = Url::parse(&raw).map_err(|err| ConfigError::invalid("API_BASE_URL", err))?;

        let token_policy = match env::var("TOKEN_POLICY") {
            Ok(value) => TokenPolicy::parse(&value)?,
            Err(_) => TokenPolicy::default(),
        };

        Ok(Self {
            api_base,
            token_policy,
        })
    }
}

pub fn resolve_init_data() -> Option<String> {
    env::var("TELEGRAM_INIT_DATA").ok()
}

pub fn resolve_page_query() -> String {
    env::var("PAGE_QUERY").unwrap_or_default()
}

pub fn resolve_output_dir() -> Option<PathBuf> {
    env::var("OUTPUT_DIR")
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_policy_parses_known_values() {
        assert_eq!(TokenPolicy::parse("host-only").unwrap(), TokenPolicy::HostOnly);
        assert_eq!(
            TokenPolicy::parse(" query-fallback ").unwrap(),
            TokenPolicy::QueryFallback
        );
        let err = TokenPolicy::parse("always").unwrap_err();
        assert_eq!(err.key, "TOKEN_POLICY");
    }
}
