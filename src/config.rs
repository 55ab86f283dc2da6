// src/config.rs
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";
pub const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_TEMPERATURE: f32 = 0.4;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_STATIC_DIR: &str = "public";

/// Backend settings, read from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_url: String,
    pub temperature: f32,
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        // A missing .env file is fine; real env vars still apply.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let temperature = match get("GROQ_TEMPERATURE") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid GROQ_TEMPERATURE {raw:?}: {e}"))?,
            None => DEFAULT_TEMPERATURE,
        };

        let bind_raw = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid BIND_ADDR {bind_raw:?}: {e}"))?;

        Ok(Self {
            api_key: get("GROQ_API_KEY"),
            model: get("GROQ_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_url: get("GROQ_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            temperature,
            bind_addr,
            static_dir: get("STATIC_DIR")
                .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())
                .into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.api_key, None);
        assert_eq!(cfg.model, DEFAULT_MODEL);
        assert_eq!(cfg.api_url, DEFAULT_API_URL);
        assert_eq!(cfg.temperature, DEFAULT_TEMPERATURE);
        assert_eq!(cfg.bind_addr.port(), 5000);
        assert_eq!(cfg.static_dir, PathBuf::from("public"));
    }

    #[test]
    fn overrides_are_read() {
        let cfg = ServerConfig::from_lookup(lookup(&[
            ("GROQ_API_KEY", "gsk_test"),
            ("GROQ_MODEL", "llama-3.3-70b-versatile"),
            ("GROQ_TEMPERATURE", "0.9"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("STATIC_DIR", "static"),
        ]))
        .unwrap();
        assert_eq!(cfg.api_key.as_deref(), Some("gsk_test"));
        assert_eq!(cfg.model, "llama-3.3-70b-versatile");
        assert_eq!(cfg.temperature, 0.9);
        assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(cfg.static_dir, PathBuf::from("static"));
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let cfg = ServerConfig::from_lookup(lookup(&[("GROQ_API_KEY", "  ")])).unwrap();
        assert!(cfg.api_key.is_none());
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(ServerConfig::from_lookup(lookup(&[("GROQ_TEMPERATURE", "warm")])).is_err());
        assert!(ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "nowhere")])).is_err());
    }
}
