//! Final assembly of the knowledge base document.

use super::DeviceList;
use crate::models::{DeviceMap, KnowledgeBase, Prefix};

/// Combine devices and prefixes into the output document.
///
/// Devices are re-keyed by name. When two devices share a name the later one
/// replaces the earlier under the first key position, with a warning.
pub fn merge(devices: DeviceList, prefixes: Vec<Prefix>) -> KnowledgeBase {
    let mut by_name = DeviceMap::new();
    for device in devices.devices {
        let name = device.name.clone();
        let id = device.id;
        if let Some(replaced) = by_name.insert(name.clone(), device) {
            log::warn!(
                "Device name '{name}' used by device #{} and #{id}, keeping #{id}",
                replaced.id
            );
        }
    }

    KnowledgeBase {
        prefixes,
        devices: by_name,
    }
}
