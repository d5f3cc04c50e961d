use anyhow::Context;
use std::env;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// Server settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    /// Reads `HOST` and `PORT`, falling back to `0.0.0.0:3000`.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(env::var("HOST").ok(), env::var("PORT").ok())
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> anyhow::Result<Self> {
        let host = host
            .filter(|host| !host.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_owned());

        let port = match port.filter(|port| !port.is_empty()) {
            Some(port) => port
                .parse::<u16>()
                .with_context(|| format!("invalid PORT: {:?}", port))?,
            None => DEFAULT_PORT,
        };

        Ok(AppConfig { host, port })
    }
}
