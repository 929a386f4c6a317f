//! Host configuration loaded from the environment.
//!
//! The binary reads `PORT` and `NEARU_BIND_ADDR` once at startup. Leptos site
//! options (site root, pkg dir) come separately from `get_configuration`.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: '{value}' is not a port number")]
    InvalidPort { var: &'static str, value: String },

    #[error("invalid {var}: '{value}' is not an IP address")]
    InvalidBindAddr { var: &'static str, value: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub bind_addr: IpAddr,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, bind_addr: DEFAULT_BIND_ADDR }
    }
}

impl HostConfig {
    /// Read host settings from process env vars.
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read host settings through `lookup`, which maps a variable name to its
    /// value. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is set but cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort { var: "PORT", value })?,
            None => DEFAULT_PORT,
        };
        let bind_addr = match get("NEARU_BIND_ADDR") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddr { var: "NEARU_BIND_ADDR", value })?,
            None => DEFAULT_BIND_ADDR,
        };

        Ok(Self { port, bind_addr })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
