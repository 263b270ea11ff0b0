//! NetBox REST API interaction.
//!
//! - [`client`] - Paginated HTTP client implementing [`crate::inventory::Inventory`]

mod client;

// Re-export public types and functions
pub use client::{check_status, collect_pages, decode, NetboxClient, Page};
