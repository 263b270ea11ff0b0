//! Knowledge base assembly pipeline.
//!
//! Stages run in order, threading one [`InterfaceIndex`] through the first three:
//! - [`interfaces`] - Index interfaces by id
//! - [`addresses`] - Link IP addresses to interfaces
//! - [`devices`] - Group interfaces under devices
//! - [`prefixes`] - Match IP ranges to prefixes
//! - [`merge`] - Build the output document

mod addresses;
mod devices;
mod interfaces;
mod merge;
mod prefixes;

// Re-export public functions
pub use addresses::link_addresses;
pub use devices::{assemble_devices, DeviceList};
pub use interfaces::{index_interfaces, InterfaceIndex};
pub use merge::merge;
pub use prefixes::match_prefix_ranges;
