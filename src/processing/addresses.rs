//! Linking IP addresses to the interfaces they are assigned to.

use super::InterfaceIndex;
use crate::error::{KbError, Result};
use crate::inventory::Inventory;

/// Append every assigned IP address to its interface's address list.
///
/// Unassigned addresses are skipped, as are addresses bound to objects other
/// than device interfaces. An assignment that cannot be resolved to an indexed
/// interface is a [`KbError::DanglingReference`].
///
/// # Returns
/// The number of addresses linked.
pub fn link_addresses(inventory: &dyn Inventory, index: &mut InterfaceIndex) -> Result<usize> {
    let addresses = inventory.ip_addresses()?;
    let mut linked = 0;

    for ip in addresses.iter() {
        let Some(assigned_id) = ip.assigned_object_id else {
            log::trace!("{} is unassigned, skipping", ip.address);
            continue;
        };
        if ip.assigned_elsewhere() {
            log::debug!(
                "{} is assigned to {:?} #{assigned_id}, not a device interface, skipping",
                ip.address,
                ip.assigned_object_type
            );
            continue;
        }

        let from = format!("ip address {}", ip.address);
        let resolved = inventory
            .interface(assigned_id)?
            .ok_or_else(|| KbError::dangling(from.as_str(), "interface", assigned_id))?;
        let interface = index
            .get_mut(resolved.id)
            .ok_or_else(|| KbError::dangling(from.as_str(), "interface", resolved.id))?;

        interface.ip_addresses.push(ip.address.clone());
        linked += 1;
    }

    log::info!(
        "Linked {linked} of {} IP addresses to interfaces",
        addresses.len()
    );
    Ok(linked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{
        InterfaceResource, IpAddressResource, NestedDevice, SnapshotInventory, DCIM_INTERFACE,
    };
    use crate::processing::index_interfaces;

    fn iface(id: u64, name: &str) -> InterfaceResource {
        InterfaceResource {
            id,
            name: name.to_string(),
            mac_address: None,
            device: NestedDevice {
                id: 1,
                name: Some("router1".to_string()),
                display: None,
            },
        }
    }

    fn ip(address: &str, assigned: Option<u64>) -> IpAddressResource {
        IpAddressResource {
            id: 0,
            address: address.to_string(),
            assigned_object_type: assigned.map(|_| DCIM_INTERFACE.to_string()),
            assigned_object_id: assigned,
        }
    }

    #[test]
    fn test_link_addresses_order() {
        let inv = SnapshotInventory {
            interfaces: vec![iface(1, "eth0"), iface(2, "eth1")],
            ip_addresses: vec![
                ip("10.0.0.2/24", Some(1)),
                ip("10.0.1.1/24", Some(2)),
                ip("10.0.0.1/24", Some(1)),
            ],
            ..Default::default()
        };
        let mut index = index_interfaces(&inv).unwrap();
        let linked = link_addresses(&inv, &mut index).unwrap();
        assert_eq!(linked, 3);
        assert_eq!(
            index.get(1).unwrap().ip_addresses,
            vec!["10.0.0.2/24", "10.0.0.1/24"]
        );
        assert_eq!(index.get(2).unwrap().ip_addresses, vec!["10.0.1.1/24"]);
    }

    #[test]
    fn test_unassigned_skipped() {
        let inv = SnapshotInventory {
            interfaces: vec![iface(1, "eth0")],
            ip_addresses: vec![ip("10.0.0.9/24", None)],
            ..Default::default()
        };
        let mut index = index_interfaces(&inv).unwrap();
        assert_eq!(link_addresses(&inv, &mut index).unwrap(), 0);
        assert!(index.get(1).unwrap().ip_addresses.is_empty());
    }

    #[test]
    fn test_vm_interface_skipped() {
        let mut vm_ip = ip("172.16.0.5/16", Some(1));
        vm_ip.assigned_object_type = Some("virtualization.vminterface".to_string());
        let inv = SnapshotInventory {
            interfaces: vec![iface(1, "eth0")],
            ip_addresses: vec![vm_ip],
            ..Default::default()
        };
        let mut index = index_interfaces(&inv).unwrap();
        assert_eq!(link_addresses(&inv, &mut index).unwrap(), 0);
        assert!(index.get(1).unwrap().ip_addresses.is_empty());
    }

    #[test]
    fn test_unknown_interface_is_dangling() {
        let inv = SnapshotInventory {
            interfaces: vec![iface(1, "eth0")],
            ip_addresses: vec![ip("10.0.0.1/24", Some(99))],
            ..Default::default()
        };
        let mut index = index_interfaces(&inv).unwrap();
        match link_addresses(&inv, &mut index) {
            Err(KbError::DanglingReference { target, id, .. }) => {
                assert_eq!(target, "interface");
                assert_eq!(id, 99);
            }
            other => panic!("expected dangling reference, got {other:?}"),
        }
    }

    #[test]
    fn test_interface_missing_from_index_is_dangling() {
        let inv = SnapshotInventory {
            interfaces: vec![iface(1, "eth0")],
            ip_addresses: vec![ip("10.0.0.1/24", Some(1))],
            ..Default::default()
        };
        let mut index = InterfaceIndex::new();
        assert!(matches!(
            link_addresses(&inv, &mut index),
            Err(KbError::DanglingReference { id: 1, .. })
        ));
        assert!(index.is_empty());
    }
}
