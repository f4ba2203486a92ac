use std::env;

use tracing::warn;

pub const DEFAULT_BIND: &str = "127.0.0.1:8787";
pub const DEFAULT_ENDPOINT: &str = "https://rag-endpoints.onrender.com/market/translate";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

// O idioma NÃO é configuração do serviço: viaja em cada requisição.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind: String,
    pub upstream_endpoint: String,
    pub upstream_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        let bind = env::var("MERCADO_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());

        let upstream_endpoint = env::var("MERCADO_TRANSLATE_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

        let upstream_timeout_secs = match env::var("MERCADO_TIMEOUT_SECS") {
            Ok(raw) => match raw.parse::<u64>() {
                Ok(secs) => secs,
                Err(_) => {
                    warn!(value = %raw, "invalid MERCADO_TIMEOUT_SECS, using default");
                    DEFAULT_TIMEOUT_SECS
                }
            },
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Config {
            bind,
            upstream_endpoint,
            upstream_timeout_secs,
        }
    }
}
