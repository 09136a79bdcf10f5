use anyhow::{Context, Result};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api/v1/";
pub const DEFAULT_PROXY_TARGET: &str = "http://localhost:8080";

#[derive(Debug, Clone)]
pub struct Config {
    // Backend REST API
    pub api_base_url: String,

    // Development proxy (/api prefix is stripped before forwarding)
    pub proxy_target: String,

    // Server
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_base_url: std::env::var("API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),

            proxy_target: std::env::var("PROXY_TARGET")
                .unwrap_or_else(|_| DEFAULT_PROXY_TARGET.to_string()),

            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: match std::env::var("PORT") {
                Ok(v) => v.parse().context("PORT must be a valid port number")?,
                Err(_) => 8000,
            },
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            proxy_target: DEFAULT_PROXY_TARGET.to_string(),
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}
