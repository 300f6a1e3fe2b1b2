//! Client Configuration
//!
//! Endpoints derived from the page location at startup.

use thiserror::Error;

const SOCKET_PATH: &str = "/ws";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no window object")]
    NoWindow,
    #[error("could not read page location: {0}")]
    Location(String),
}

/// Where the items API and the change socket live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for API paths; empty means same origin
    pub api_base: String,
    pub socket_url: String,
}

impl ClientConfig {
    pub fn from_location() -> Result<Self, ConfigError> {
        let location = web_sys::window().ok_or(ConfigError::NoWindow)?.location();
        let protocol = location
            .protocol()
            .map_err(|e| ConfigError::Location(format!("{:?}", e)))?;
        let host = location
            .host()
            .map_err(|e| ConfigError::Location(format!("{:?}", e)))?;
        Ok(Self::for_origin(&protocol, &host))
    }

    /// `protocol` is in `Location.protocol` form, e.g. `"https:"`.
    pub fn for_origin(protocol: &str, host: &str) -> Self {
        let scheme = if protocol == "https:" { "wss" } else { "ws" };
        Self {
            api_base: String::new(),
            socket_url: format!("{scheme}://{host}{SOCKET_PATH}"),
        }
    }
}
