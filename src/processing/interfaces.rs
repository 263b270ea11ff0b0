//! Interface indexing.
//!
//! Builds the interface index that address linking and device assembly enrich.

use crate::error::Result;
use crate::inventory::{InterfaceResource, Inventory};
use crate::models::Interface;
use std::collections::HashMap;

/// Interface records keyed by NetBox interface id.
///
/// Single owner of every [`Interface`] until devices are assembled.
#[derive(Debug, Default)]
pub struct InterfaceIndex {
    pub interfaces: HashMap<u64, Interface>,
}

impl InterfaceIndex {
    pub fn new() -> InterfaceIndex {
        InterfaceIndex::default()
    }

    /// Add a record for `resource` unless its id is already indexed.
    ///
    /// Returns false when the id was already present.
    pub fn add_interface(&mut self, resource: &InterfaceResource) -> bool {
        if self.interfaces.contains_key(&resource.id) {
            return false;
        }
        self.interfaces.insert(
            resource.id,
            Interface::new(resource.id, &resource.name, resource.mac_address.as_deref()),
        );
        true
    }

    pub fn get(&self, id: u64) -> Option<&Interface> {
        self.interfaces.get(&id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut Interface> {
        self.interfaces.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.interfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty()
    }
}

/// Enumerate all interfaces and index them by id.
///
/// Duplicate ids keep the first record seen.
pub fn index_interfaces(inventory: &dyn Inventory) -> Result<InterfaceIndex> {
    let mut index = InterfaceIndex::new();
    let resources = inventory.interfaces()?;

    for resource in resources.iter() {
        if !index.add_interface(resource) {
            log::warn!(
                "Interface #{} '{}' enumerated twice, keeping first record",
                resource.id,
                resource.name
            );
        }
    }

    log::info!(
        "Indexed {} interfaces from {} records",
        index.len(),
        resources.len()
    );
    Ok(index)
}
