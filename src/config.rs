//! Constants and connection settings for the NetBox inventory.

use crate::error::{KbError, Result};

/// Number of objects requested per page on list endpoints.
pub const PAGE_LIMIT: u32 = 1000;

/// Timeout applied to every HTTP request.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Port used when none is given.
pub const DEFAULT_PORT: u16 = 80;

pub const INTERFACES_PATH: &str = "/api/dcim/interfaces/";
pub const DEVICES_PATH: &str = "/api/dcim/devices/";
pub const IP_ADDRESSES_PATH: &str = "/api/ipam/ip-addresses/";
pub const PREFIXES_PATH: &str = "/api/ipam/prefixes/";
pub const IP_RANGES_PATH: &str = "/api/ipam/ip-ranges/";

/// Where the NetBox API lives and how to authenticate against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetboxConfig {
    /// `http` or `https`.
    pub scheme: String,
    /// Host name, e.g. `netbox.example.com`.
    pub server: String,
    pub port: u16,
    /// API token sent as `Authorization: Token <token>`.
    pub token: String,
}

impl NetboxConfig {
    /// Build a config, rejecting empty server or token values.
    pub fn new(scheme: &str, server: &str, port: u16, token: &str) -> Result<NetboxConfig> {
        let server = server.trim();
        let token = token.trim();
        if server.is_empty() {
            return Err(KbError::Config("NetBox server is empty".to_string()));
        }
        if server.contains("://") || server.contains('/') {
            return Err(KbError::Config(format!(
                "NetBox server must be a host name, got '{server}'"
            )));
        }
        if token.is_empty() {
            return Err(KbError::Config("NetBox token is empty".to_string()));
        }
        let scheme = scheme.trim().to_lowercase();
        if scheme != "http" && scheme != "https" {
            return Err(KbError::Config(format!("Unsupported scheme '{scheme}'")));
        }
        Ok(NetboxConfig {
            scheme,
            server: server.to_string(),
            port,
            token: token.to_string(),
        })
    }

    /// Base URL without trailing slash, e.g. `http://netbox.example.com:80`.
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.server, self.port)
    }

    /// First page URL of a list endpoint.
    pub fn list_url(&self, path: &str) -> String {
        format!("{}{path}?limit={PAGE_LIMIT}", self.base_url())
    }

    /// URL of a single object on a list endpoint.
    pub fn object_url(&self, path: &str, id: u64) -> String {
        format!("{}{path}{id}/", self.base_url())
    }
}
