use std::net::SocketAddr;
use anyhow::{Context, Result};
use lib::env_keys::{AWS_LAMBDA_RUNTIME_API, EMOTION_BACKEND, HOST, PORT};
use lib::service::DetectorBackend;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub backend: DetectorBackend,
    pub lambda: bool,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = lookup(HOST).unwrap_or(DEFAULT_HOST.to_owned());
        let port = match lookup(PORT) {
            Some(port) => port.parse().with_context(|| format!("Invalid {}: {}", PORT, port))?,
            None => DEFAULT_PORT,
        };
        let backend = match lookup(EMOTION_BACKEND) {
            Some(backend) => backend.parse()?,
            None => DetectorBackend::default(),
        };

        Ok(Self {
            host,
            port,
            backend,
            lambda: lookup(AWS_LAMBDA_RUNTIME_API).is_some(),
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid bind address {}:{}", self.host, self.port))
    }
}
