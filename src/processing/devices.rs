//! Device assembly.
//!
//! Groups the enriched interface records under their owning devices.

use super::InterfaceIndex;
use crate::error::{KbError, Result};
use crate::inventory::Inventory;
use crate::models::Device;
use std::collections::HashMap;

/// Devices in first-seen order, indexed by NetBox device id.
#[derive(Debug, Default)]
pub struct DeviceList {
    pub devices: Vec<Device>,
    index: HashMap<u64, usize>,
}

impl DeviceList {
    pub fn new() -> DeviceList {
        DeviceList::default()
    }

    /// Position of the device with `id` in [`DeviceList::devices`].
    pub fn position(&self, id: u64) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Append a new device and return its position; it must not be present yet.
    pub fn add_device(&mut self, device: Device) -> usize {
        let i = self.devices.len();
        self.index.insert(device.id, i);
        self.devices.push(device);
        i
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

/// Enumerate interfaces and attach each indexed record to its owning device.
///
/// The owning device is looked up once, the first time one of its interfaces
/// is seen. Each record gets `device_name` from the interface's own device
/// reference before it is placed under the device.
pub fn assemble_devices(
    inventory: &dyn Inventory,
    index: &mut InterfaceIndex,
) -> Result<DeviceList> {
    let mut devices = DeviceList::new();
    let resources = inventory.interfaces()?;

    for resource in resources.iter() {
        let device_id = resource.device.id;
        let slot = match devices.position(device_id) {
            Some(slot) => slot,
            None => {
                let found = inventory.device(device_id)?.ok_or_else(|| {
                    KbError::dangling(format!("interface #{}", resource.id), "device", device_id)
                })?;
                log::debug!("New device #{} '{}'", found.id, found.label());
                devices.add_device(Device::new(device_id, &found.label()))
            }
        };

        let interface = index.get_mut(resource.id).ok_or_else(|| {
            KbError::dangling(format!("device #{device_id}"), "interface", resource.id)
        })?;
        interface.device_name = Some(resource.device.label());

        devices.devices[slot].add_interface(interface.clone());
    }

    log::info!(
        "Assembled {} devices from {} interfaces",
        devices.len(),
        resources.len()
    );
    Ok(devices)
}
