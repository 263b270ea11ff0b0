//! Network parsing for the prefix/range containment test.
//!
//! Both IPv4 and IPv6 are handled through [`IpNet`].

use crate::error::{KbError, Result};
use ipnet::IpNet;
use regex::Regex;
use std::net::IpAddr;
use std::sync::OnceLock;

/// Regex matching a mask suffix such as `/24`.
static MASK_SUFFIX_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_mask_suffix_regex() -> &'static Regex {
    MASK_SUFFIX_REGEX.get_or_init(|| Regex::new(r"/\d+").expect("Invalid Regex"))
}

/// Parse a CIDR string that must name a network exactly.
///
/// Host bits set below the mask are rejected. A bare address is a single-host
/// network.
///
/// # Examples
/// ```
/// use netbox_kb::models::parse_network_strict;
/// assert!(parse_network_strict("10.0.0.0/24").is_ok());
/// assert!(parse_network_strict("10.0.0.1/24").is_err());
/// ```
pub fn parse_network_strict(cidr: &str) -> Result<IpNet> {
    let net = parse_net(cidr)?;
    if net != net.trunc() {
        return Err(KbError::InvalidAddress {
            value: cidr.to_string(),
            reason: "host bits set".to_string(),
        });
    }
    Ok(net)
}

/// Parse an address with optional mask and return the network it implies.
///
/// Host bits are dropped, so `10.0.0.7/24` gives `10.0.0.0/24`.
///
/// # Examples
/// ```
/// use netbox_kb::models::parse_network_lenient;
/// assert_eq!(
///     parse_network_lenient("10.0.0.7/24").unwrap().to_string(),
///     "10.0.0.0/24"
/// );
/// ```
pub fn parse_network_lenient(addr: &str) -> Result<IpNet> {
    Ok(parse_net(addr)?.trunc())
}

/// Remove every `/<digits>` suffix from an address string.
pub fn strip_mask(addr: &str) -> String {
    get_mask_suffix_regex().replace_all(addr, "").into_owned()
}

/// Whitespace is not tolerated; the same string is later emitted as-is.
fn parse_net(value: &str) -> Result<IpNet> {
    if value.contains('/') {
        value
            .parse::<IpNet>()
            .map_err(|e| KbError::InvalidAddress {
                value: value.to_string(),
                reason: e.to_string(),
            })
    } else {
        value
            .parse::<IpAddr>()
            .map(IpNet::from)
            .map_err(|e| KbError::InvalidAddress {
                value: value.to_string(),
                reason: e.to_string(),
            })
    }
}
