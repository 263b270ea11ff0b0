//! Domain models for the knowledge base.
//!
//! - [`Interface`], [`Device`], [`Prefix`], [`Range`] - document records
//! - [`KnowledgeBase`] and [`DeviceMap`] - the output document
//! - network parsing helpers for the containment test

mod knowledge_base;
mod network;

// Re-export public types
pub use knowledge_base::{Device, DeviceMap, Interface, KnowledgeBase, Prefix, Range};
pub use network::{parse_network_lenient, parse_network_strict, strip_mask};
