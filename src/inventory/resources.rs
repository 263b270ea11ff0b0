//! NetBox API resource shapes, reduced to the fields the knowledge base uses.
//!
//! Unknown fields are ignored so full NetBox responses decode directly.

use serde::{Deserialize, Serialize};

/// Object type NetBox uses for device interfaces in `assigned_object_type`.
pub const DCIM_INTERFACE: &str = "dcim.interface";

/// Device reference nested inside an interface.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NestedDevice {
    pub id: u64,
    pub name: Option<String>,
    #[serde(default)]
    pub display: Option<String>,
}

impl NestedDevice {
    /// Name shown for the device: `name`, then `display`, then `device-<id>`.
    pub fn label(&self) -> String {
        device_label(self.id, self.name.as_deref(), self.display.as_deref())
    }
}

/// `/api/dcim/interfaces/` entry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct InterfaceResource {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub mac_address: Option<String>,
    pub device: NestedDevice,
}

/// `/api/ipam/ip-addresses/` entry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct IpAddressResource {
    #[serde(default)]
    pub id: u64,
    /// Address with mask, e.g. `10.0.0.5/24`.
    pub address: String,
    #[serde(default)]
    pub assigned_object_type: Option<String>,
    #[serde(default)]
    pub assigned_object_id: Option<u64>,
}

impl IpAddressResource {
    /// True when the address is bound to something other than a device interface.
    pub fn assigned_elsewhere(&self) -> bool {
        matches!(&self.assigned_object_type, Some(t) if t != DCIM_INTERFACE)
    }
}

/// `/api/dcim/devices/{id}/` entry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DeviceResource {
    pub id: u64,
    pub name: Option<String>,
    #[serde(default)]
    pub display: Option<String>,
}

impl DeviceResource {
    pub fn label(&self) -> String {
        device_label(self.id, self.name.as_deref(), self.display.as_deref())
    }
}

/// `/api/ipam/prefixes/` entry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PrefixResource {
    #[serde(default)]
    pub id: u64,
    /// CIDR, e.g. `10.0.0.0/24`.
    pub prefix: String,
    #[serde(default)]
    pub is_pool: bool,
}

/// `/api/ipam/ip-ranges/` entry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct IpRangeResource {
    #[serde(default)]
    pub id: u64,
    pub start_address: String,
    pub end_address: String,
}

fn device_label(id: u64, name: Option<&str>, display: Option<&str>) -> String {
    name.or(display)
        .map(str::to_string)
        .unwrap_or_else(|| format!("device-{id}"))
}
