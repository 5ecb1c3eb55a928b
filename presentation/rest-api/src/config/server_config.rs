use std::env;

use super::error::ConfigError;

const DEFAULT_IP: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// Where the marketplace API listens
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    /// Environment variables:
    /// - SERVICE_IP: address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: port to bind, 1-65535 (default: 8080)
    pub fn from_env() -> Result<Self, ConfigError> {
        let ip = env::var("SERVICE_IP")
            .ok()
            .map(|ip| ip.trim().to_string())
            .filter(|ip| !ip.is_empty())
            .unwrap_or_else(|| DEFAULT_IP.to_string());
        let port = parse_port(env::var("SERVICE_PORT").ok())?;

        Ok(Self { ip, port })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

fn parse_port(raw: Option<String>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .trim()
            .parse::<u16>()
            .ok()
            .filter(|port| *port != 0)
            .ok_or(ConfigError::InvalidVariable("SERVICE_PORT")),
    }
}
