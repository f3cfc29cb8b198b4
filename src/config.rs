// src/config.rs
use std::env;

use anyhow::{Context, Result};

pub const DEFAULT_GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub gemini: GeminiConfig,
}

#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub api_url: String,
}

// Keep the key out of debug output.
impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key_len", &self.api_key.len())
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl GeminiConfig {
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

impl AppConfig {
    /// Read configuration from the environment (and `.env`, if present).
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from `lookup`, which returns a variable's value if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: get("HOST", DEFAULT_HOST),
            port,
            gemini: GeminiConfig {
                api_key: get("GEMINI_API_KEY", "").trim().to_string(),
                api_url: get("GEMINI_API_URL", DEFAULT_GEMINI_API_URL),
            },
        })
    }

    /// Host and port in the form `TcpListener::bind` resolves.
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load_from(vars: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = load_from(&[]).unwrap();
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.port, 8000);
        assert_eq!(cfg.gemini.api_url, DEFAULT_GEMINI_API_URL);
        assert_eq!(cfg.gemini.api_key, "");
        assert!(!cfg.gemini.is_configured());
    }

    #[test]
    fn reads_overrides_and_trims_key() {
        let cfg = load_from(&[
            ("HOST", "localhost"),
            ("PORT", " 9000 "),
            ("GEMINI_API_KEY", "  abc123\n"),
            ("GEMINI_API_URL", "http://127.0.0.1:1234/generate"),
        ])
        .unwrap();
        assert_eq!(cfg.bind_addr(), ("localhost", 9000));
        assert_eq!(cfg.gemini.api_key, "abc123");
        assert!(cfg.gemini.is_configured());
        assert_eq!(cfg.gemini.api_url, "http://127.0.0.1:1234/generate");
    }

    #[tokio::test]
    async fn hostnames_are_resolved_when_binding() {
        let cfg = load_from(&[("HOST", "localhost"), ("PORT", "0")]).unwrap();
        let listener = tokio::net::TcpListener::bind(cfg.bind_addr()).await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }

    #[test]
    fn invalid_port_is_a_startup_error() {
        for bad in ["eighty", "70000", "-1", ""] {
            let err = load_from(&[("PORT", bad)]).unwrap_err();
            assert!(err.to_string().contains("PORT must be a valid port number"));
        }
    }

    #[test]
    fn debug_output_hides_api_key() {
        let cfg = load_from(&[("GEMINI_API_KEY", "super-secret-key")]).unwrap();
        let rendered = format!("{:?}", cfg);
        assert!(!rendered.contains("super-secret-key"));
        assert!(rendered.contains("api_key_len: 16"));
    }
}
