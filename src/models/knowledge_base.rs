//! Knowledge base document model.
//!
//! Field names and nesting are the output contract read by provisioning tools.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

/// A device interface with its MAC and IP bindings.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    pub id: u64,
    pub ifname: String,
    /// Lowercased MAC address, `None` when the interface has none.
    pub mac: Option<String>,
    /// Assigned addresses with mask, in address enumeration order.
    pub ip_addresses: Vec<String>,
    /// Set once the owning device is resolved.
    pub device_name: Option<String>,
}

impl Interface {
    /// New record with no addresses and no owning device.
    pub fn new(id: u64, ifname: &str, mac: Option<&str>) -> Interface {
        Interface {
            id,
            ifname: ifname.to_string(),
            mac: mac.map(str::to_lowercase),
            ip_addresses: vec![],
            device_name: None,
        }
    }
}

/// A device and the interfaces it owns, in first-seen order.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Device {
    pub id: u64,
    pub name: String,
    pub interfaces: Vec<Interface>,
}

impl Device {
    pub fn new(id: u64, name: &str) -> Device {
        Device {
            id,
            name: name.to_string(),
            interfaces: vec![],
        }
    }

    pub fn add_interface(&mut self, interface: Interface) {
        self.interfaces.push(interface);
    }
}

/// A range nested under its prefix; addresses carry no mask.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Range {
    pub start_address: String,
    pub end_address: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Prefix {
    pub prefix: String,
    pub is_pool: bool,
    pub ranges: Vec<Range>,
}

/// Devices keyed by name, iterated and serialized in insertion order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DeviceMap {
    entries: Vec<(String, Device)>,
    index: HashMap<String, usize>,
}

impl DeviceMap {
    pub fn new() -> DeviceMap {
        DeviceMap::default()
    }

    /// Insert a device under `name`.
    ///
    /// An existing entry keeps its position and has its value replaced; the
    /// replaced device is returned.
    pub fn insert(&mut self, name: String, device: Device) -> Option<Device> {
        match self.index.get(&name) {
            Some(&i) => Some(std::mem::replace(&mut self.entries[i].1, device)),
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, device));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Device> {
        self.index.get(name).map(|&i| &self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Device)> {
        self.entries.iter().map(|(k, d)| (k.as_str(), d))
    }
}

impl Serialize for DeviceMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, device) in &self.entries {
            map.serialize_entry(name, device)?;
        }
        map.end()
    }
}

/// The document handed to provisioning tooling.
#[derive(Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct KnowledgeBase {
    pub prefixes: Vec<Prefix>,
    pub devices: DeviceMap,
}
