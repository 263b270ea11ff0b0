//! Inventory held in memory, loaded from a JSON snapshot file.
//!
//! The file holds one array per collection, each entry shaped like the NetBox
//! API object it stands for.

use super::{
    DeviceResource, InterfaceResource, Inventory, IpAddressResource, IpRangeResource,
    PrefixResource,
};
use crate::error::{KbError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// All five collections, in enumeration order.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct SnapshotInventory {
    #[serde(default)]
    pub interfaces: Vec<InterfaceResource>,
    #[serde(default)]
    pub ip_addresses: Vec<IpAddressResource>,
    #[serde(default)]
    pub devices: Vec<DeviceResource>,
    #[serde(default)]
    pub prefixes: Vec<PrefixResource>,
    #[serde(default)]
    pub ip_ranges: Vec<IpRangeResource>,
}

impl SnapshotInventory {
    /// Read a snapshot file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<SnapshotInventory> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        log::info!("Reading inventory snapshot: {}", path.display());
        Self::from_json(&json, &path.display().to_string())
    }

    /// Decode a snapshot from a JSON string; `origin` names it in errors.
    pub fn from_json(json: &str, origin: &str) -> Result<SnapshotInventory> {
        let mut deserializer = serde_json::Deserializer::from_str(json);
        serde_path_to_error::deserialize(&mut deserializer).map_err(|e| KbError::Decode {
            url: origin.to_string(),
            path: e.path().to_string(),
            message: e.inner().to_string(),
        })
    }
}

impl Inventory for SnapshotInventory {
    fn interfaces(&self) -> Result<Vec<InterfaceResource>> {
        Ok(self.interfaces.clone())
    }

    fn ip_addresses(&self) -> Result<Vec<IpAddressResource>> {
        Ok(self.ip_addresses.clone())
    }

    fn prefixes(&self) -> Result<Vec<PrefixResource>> {
        Ok(self.prefixes.clone())
    }

    fn ip_ranges(&self) -> Result<Vec<IpRangeResource>> {
        Ok(self.ip_ranges.clone())
    }

    fn interface(&self, id: u64) -> Result<Option<InterfaceResource>> {
        Ok(self.interfaces.iter().find(|i| i.id == id).cloned())
    }

    fn device(&self, id: u64) -> Result<Option<DeviceResource>> {
        Ok(self.devices.iter().find(|d| d.id == id).cloned())
    }
}
