//! The inventory contract the knowledge base is built from.
//!
//! - [`resources`] - NetBox resource shapes
//! - [`snapshot`] - In-memory inventory loaded from a JSON file

mod resources;
mod snapshot;

pub use resources::{
    DeviceResource, InterfaceResource, IpAddressResource, IpRangeResource, NestedDevice,
    PrefixResource, DCIM_INTERFACE,
};
pub use snapshot::SnapshotInventory;

use crate::error::Result;

/// Read access to the five inventory collections.
///
/// Enumerations return the whole collection in the order the service yields it.
/// Lookups return `Ok(None)` when no object has the identity.
pub trait Inventory {
    fn interfaces(&self) -> Result<Vec<InterfaceResource>>;
    fn ip_addresses(&self) -> Result<Vec<IpAddressResource>>;
    fn prefixes(&self) -> Result<Vec<PrefixResource>>;
    fn ip_ranges(&self) -> Result<Vec<IpRangeResource>>;

    fn interface(&self, id: u64) -> Result<Option<InterfaceResource>>;
    fn device(&self, id: u64) -> Result<Option<DeviceResource>>;
}
