//! Build a DHCP knowledge base from a NetBox inventory.
//!
//! Interfaces, IP addresses, devices, prefixes and IP ranges are read from the
//! NetBox REST API (or a JSON snapshot) and linked into one document:
//! devices with their interfaces and MAC/IP bindings, and prefixes with the
//! ranges they contain.
//!
//! - [`inventory`] - The inventory contract and the snapshot implementation
//! - [`netbox`] - NetBox REST client
//! - [`processing`] - Pipeline stages
//! - [`models`] - Document records and network parsing
//! - [`output`] - YAML/JSON rendering

pub mod args;
pub mod config;
pub mod error;
pub mod inventory;
pub mod logging;
pub mod models;
pub mod netbox;
pub mod output;
pub mod processing;

pub use error::{KbError, Result};
pub use inventory::{Inventory, SnapshotInventory};
pub use models::KnowledgeBase;
pub use netbox::NetboxClient;

use processing::{
    assemble_devices, index_interfaces, link_addresses, match_prefix_ranges, merge,
};

/// Run the full pipeline against `inventory`.
///
/// Stages run strictly in order; the first error aborts the run.
pub fn build_knowledge_base(inventory: &dyn Inventory) -> Result<KnowledgeBase> {
    log::info!("#Start build_knowledge_base()");

    let mut interfaces = index_interfaces(inventory)?;
    link_addresses(inventory, &mut interfaces)?;
    let devices = assemble_devices(inventory, &mut interfaces)?;
    let prefixes = match_prefix_ranges(inventory)?;

    let kb = merge(devices, prefixes);
    log::info!(
        "Knowledge base has {} devices and {} prefixes",
        kb.devices.len(),
        kb.prefixes.len()
    );
    Ok(kb)
}
