//! Command line arguments.

use crate::config::{NetboxConfig, DEFAULT_PORT};
use crate::error::{KbError, Result};
use crate::output::Format;
use clap::Parser;
use std::path::PathBuf;

/// Build a DHCP knowledge base (devices, interfaces, prefixes, ranges) from NetBox.
#[derive(Parser, Debug)]
#[command(name = "netbox-kb", version, about)]
pub struct Args {
    /// NetBox server host name
    #[arg(long, env = "NETBOX_SERVER")]
    pub server: Option<String>,

    /// NetBox port
    #[arg(long, env = "NETBOX_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// NetBox API token
    #[arg(long, env = "NETBOX_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// URL scheme used to reach NetBox
    #[arg(long, env = "NETBOX_SCHEME", default_value = "http")]
    pub scheme: String,

    /// Read the inventory from a JSON snapshot instead of NetBox; server and
    /// token are then ignored
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Yaml)]
    pub format: Format,

    /// Write the document to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// log4rs configuration file
    #[arg(long, default_value = "log4rs.yml")]
    pub log_config: PathBuf,
}

/// Where the inventory is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventorySource {
    Snapshot(PathBuf),
    Netbox(NetboxConfig),
}

impl Args {
    /// A snapshot takes precedence over NetBox settings from args or env.
    pub fn inventory_source(&self) -> Result<InventorySource> {
        match &self.snapshot {
            Some(path) => Ok(InventorySource::Snapshot(path.clone())),
            None => Ok(InventorySource::Netbox(self.netbox_config()?)),
        }
    }

    /// NetBox connection settings; server and token are required here.
    pub fn netbox_config(&self) -> Result<NetboxConfig> {
        let server = self
            .server
            .as_deref()
            .ok_or_else(|| KbError::Config("--server or NETBOX_SERVER is required".to_string()))?;
        let token = self
            .token
            .as_deref()
            .ok_or_else(|| KbError::Config("--token or NETBOX_TOKEN is required".to_string()))?;
        NetboxConfig::new(&self.scheme, server, self.port, token)
    }
}
