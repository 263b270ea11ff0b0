//! Matching IP ranges to the prefixes that contain them.
//!
//! A range belongs to a prefix when its start and end addresses, each taken
//! with its own mask and host bits dropped, both give the prefix's network.

use crate::error::Result;
use crate::inventory::{Inventory, IpRangeResource};
use crate::models::{parse_network_lenient, parse_network_strict, strip_mask, Prefix, Range};
use ipnet::IpNet;
use std::collections::{HashMap, HashSet};

/// A range with the network both its endpoints fall in, if they agree.
#[derive(Debug)]
struct ParsedRange<'a> {
    resource: &'a IpRangeResource,
    network: Option<IpNet>,
}

impl<'a> ParsedRange<'a> {
    fn new(resource: &'a IpRangeResource) -> Result<ParsedRange<'a>> {
        let start = parse_network_lenient(&resource.start_address)?;
        let end = parse_network_lenient(&resource.end_address)?;
        let network = if start == end {
            Some(start)
        } else {
            log::warn!(
                "Range {} - {} spans networks {start} and {end}, not attached to any prefix",
                resource.start_address,
                resource.end_address
            );
            None
        };
        Ok(ParsedRange { resource, network })
    }

    fn to_range(&self) -> Range {
        Range {
            start_address: strip_mask(&self.resource.start_address),
            end_address: strip_mask(&self.resource.end_address),
        }
    }
}

/// Build the prefix list with the ranges each prefix contains.
///
/// Ranges are indexed once by network, so each prefix costs one lookup.
/// Prefixes keep enumeration order and so do the ranges within a prefix.
/// Ranges that end up in no prefix are reported with a warning. Without any
/// prefix the ranges are neither fetched nor parsed.
pub fn match_prefix_ranges(inventory: &dyn Inventory) -> Result<Vec<Prefix>> {
    let prefix_resources = inventory.prefixes()?;
    if prefix_resources.is_empty() {
        log::info!("No prefixes, skipping IP ranges");
        return Ok(vec![]);
    }
    let range_resources = inventory.ip_ranges()?;

    let parsed = range_resources
        .iter()
        .map(ParsedRange::new)
        .collect::<Result<Vec<_>>>()?;

    let mut by_network: HashMap<IpNet, Vec<usize>> = HashMap::new();
    for (i, range) in parsed.iter().enumerate() {
        if let Some(network) = range.network {
            by_network.entry(network).or_default().push(i);
        }
    }

    let mut matched: HashSet<IpNet> = HashSet::new();
    let mut prefixes = Vec::with_capacity(prefix_resources.len());
    for resource in prefix_resources.iter() {
        let network = parse_network_strict(&resource.prefix)?;
        let ranges: Vec<Range> = match by_network.get(&network) {
            Some(members) => {
                matched.insert(network);
                members.iter().map(|&i| parsed[i].to_range()).collect()
            }
            None => vec![],
        };
        log::debug!("Prefix {} has {} ranges", resource.prefix, ranges.len());
        prefixes.push(Prefix {
            prefix: resource.prefix.clone(),
            is_pool: resource.is_pool,
            ranges,
        });
    }

    for range in parsed.iter() {
        if let Some(network) = range.network {
            if !matched.contains(&network) {
                log::warn!(
                    "Range {} - {} in {network} matches no prefix, dropped",
                    range.resource.start_address,
                    range.resource.end_address
                );
            }
        }
    }

    log::info!(
        "Matched {} ranges into {} prefixes",
        prefixes.iter().map(|p| p.ranges.len()).sum::<usize>(),
        prefixes.len()
    );
    Ok(prefixes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KbError;
    use crate::inventory::{PrefixResource, SnapshotInventory};

    fn prefix(cidr: &str, is_pool: bool) -> PrefixResource {
        PrefixResource {
            id: 0,
            prefix: cidr.to_string(),
            is_pool,
        }
    }

    fn range(start: &str, end: &str) -> IpRangeResource {
        IpRangeResource {
            id: 0,
            start_address: start.to_string(),
            end_address: end.to_string(),
        }
    }

    fn r(start: &str, end: &str) -> Range {
        Range {
            start_address: start.to_string(),
            end_address: end.to_string(),
        }
    }

    #[test]
    fn test_single_range_in_prefix() {
        let inv = SnapshotInventory {
            prefixes: vec![prefix("10.0.0.0/24", false)],
            ip_ranges: vec![range("10.0.0.1/24", "10.0.0.254/24")],
            ..Default::default()
        };
        let prefixes = match_prefix_ranges(&inv).unwrap();
        assert_eq!(prefixes.len(), 1);
        assert_eq!(prefixes[0].prefix, "10.0.0.0/24");
        assert!(!prefixes[0].is_pool);
        assert_eq!(prefixes[0].ranges, vec![r("10.0.0.1", "10.0.0.254")]);
    }

    #[test]
    fn test_range_spanning_two_prefixes_dropped() {
        let inv = SnapshotInventory {
            prefixes: vec![prefix("10.0.0.0/24", false), prefix("10.0.1.0/24", true)],
            ip_ranges: vec![range("10.0.0.200/24", "10.0.1.20/24")],
            ..Default::default()
        };
        let prefixes = match_prefix_ranges(&inv).unwrap();
        assert!(prefixes.iter().all(|p| p.ranges.is_empty()));
        assert!(prefixes[1].is_pool);
    }

    #[test]
    fn test_mask_must_match_prefix() {
        // Addresses inside the /24 but carrying a /16 mask imply 10.0.0.0/16.
        let inv = SnapshotInventory {
            prefixes: vec![prefix("10.0.0.0/24", false), prefix("10.0.0.0/16", false)],
            ip_ranges: vec![range("10.0.0.10/16", "10.0.0.20/16")],
            ..Default::default()
        };
        let prefixes = match_prefix_ranges(&inv).unwrap();
        assert!(prefixes[0].ranges.is_empty());
        assert_eq!(prefixes[1].ranges, vec![r("10.0.0.10", "10.0.0.20")]);
    }

    #[test]
    fn test_range_order_and_duplicate_prefixes() {
        let inv = SnapshotInventory {
            prefixes: vec![prefix("192.168.1.0/24", true), prefix("192.168.1.0/24", false)],
            ip_ranges: vec![
                range("192.168.1.200/24", "192.168.1.250/24"),
                range("10.9.9.1/24", "10.9.9.2/24"),
                range("192.168.1.100/24", "192.168.1.150/24"),
            ],
            ..Default::default()
        };
        let prefixes = match_prefix_ranges(&inv).unwrap();
        let expected = vec![
            r("192.168.1.200", "192.168.1.250"),
            r("192.168.1.100", "192.168.1.150"),
        ];
        assert_eq!(prefixes[0].ranges, expected);
        assert_eq!(prefixes[1].ranges, expected);
    }

    #[test]
    fn test_ipv6_range() {
        let inv = SnapshotInventory {
            prefixes: vec![prefix("2001:db8::/64", false), prefix("10.0.0.0/24", false)],
            ip_ranges: vec![range("2001:db8::100/64", "2001:db8::1ff/64")],
            ..Default::default()
        };
        let prefixes = match_prefix_ranges(&inv).unwrap();
        assert_eq!(prefixes[0].ranges, vec![r("2001:db8::100", "2001:db8::1ff")]);
        assert!(prefixes[1].ranges.is_empty());
    }

    #[test]
    fn test_malformed_range_is_fatal() {
        let inv = SnapshotInventory {
            prefixes: vec![prefix("10.0.0.0/24", false)],
            ip_ranges: vec![range("10.0.0.1/24", "10.0.0/24")],
            ..Default::default()
        };
        assert!(matches!(
            match_prefix_ranges(&inv),
            Err(KbError::InvalidAddress { .. })
        ));
    }

    #[test]
    fn test_no_prefixes_ignores_ranges() {
        let inv = SnapshotInventory {
            ip_ranges: vec![range("bogus", "10.0.0.9/24")],
            ..Default::default()
        };
        assert!(match_prefix_ranges(&inv).unwrap().is_empty());
    }

    #[test]
    fn test_padded_range_is_fatal() {
        let inv = SnapshotInventory {
            prefixes: vec![prefix("10.0.0.0/24", false)],
            ip_ranges: vec![range(" 10.0.0.1/24", "10.0.0.9/24")],
            ..Default::default()
        };
        assert!(matches!(
            match_prefix_ranges(&inv),
            Err(KbError::InvalidAddress { .. })
        ));
    }

    #[test]
    fn test_prefix_with_host_bits_is_fatal() {
        let inv = SnapshotInventory {
            prefixes: vec![prefix("10.0.0.5/24", false)],
            ..Default::default()
        };
        assert!(matches!(
            match_prefix_ranges(&inv),
            Err(KbError::InvalidAddress { .. })
        ));
    }

    #[test]
    fn test_index_agrees_with_nested_scan() {
        let inv = SnapshotInventory {
            prefixes: vec![
                prefix("10.0.0.0/24", false),
                prefix("10.0.0.0/16", true),
                prefix("10.0.1.0/24", false),
                prefix("172.16.0.0/12", false),
            ],
            ip_ranges: vec![
                range("10.0.0.1/24", "10.0.0.9/24"),
                range("10.0.0.1/16", "10.0.200.9/16"),
                range("10.0.0.250/24", "10.0.1.5/24"),
                range("10.0.1.1/24", "10.0.1.2/24"),
                range("172.16.0.1/12", "172.31.255.254/12"),
                range("10.0.1.3/24", "10.0.1.4/24"),
            ],
            ..Default::default()
        };
        let prefixes = match_prefix_ranges(&inv).unwrap();

        for (p, out) in inv.prefixes.iter().zip(prefixes.iter()) {
            let net = parse_network_strict(&p.prefix).unwrap();
            let expected: Vec<Range> = inv
                .ip_ranges
                .iter()
                .filter(|ip_range| {
                    let start = parse_network_lenient(&ip_range.start_address).unwrap();
                    let end = parse_network_lenient(&ip_range.end_address).unwrap();
                    start == net && end == net
                })
                .map(|ip_range| {
                    r(
                        &strip_mask(&ip_range.start_address),
                        &strip_mask(&ip_range.end_address),
                    )
                })
                .collect();
            assert_eq!(out.ranges, expected, "prefix {}", p.prefix);
        }
    }
}
