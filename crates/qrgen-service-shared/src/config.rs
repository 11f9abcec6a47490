//! Listener configuration.

use std::net::SocketAddr;

/// Port used when `SERVICE_PORT` is unset or unparseable.
pub const DEFAULT_PORT: u16 = 8080;

/// Service settings, read once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceConfig {
    pub port: u16,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

impl ServiceConfig {
    /// Read `SERVICE_PORT` from the environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("SERVICE_PORT")
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self { port }
    }

    /// Address to bind: all interfaces on the configured port.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port() {
        let config = ServiceConfig::from_lookup(|_| None);
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_port_from_lookup() {
        let config = ServiceConfig::from_lookup(|key| {
            (key == "SERVICE_PORT").then(|| "9090".to_string())
        });
        assert_eq!(config.port, 9090);
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:9090");
    }

    #[test]
    fn test_invalid_port_falls_back_to_default() {
        for raw in ["", "http", "70000", "-1"] {
            let config = ServiceConfig::from_lookup(|_| Some(raw.to_string()));
            assert_eq!(config.port, DEFAULT_PORT, "input {raw:?}");
        }
    }
}
