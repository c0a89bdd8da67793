//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4`] struct for representing IPv4 addresses with prefix
//! lengths, along with the bit arithmetic used by the subnet engine and the
//! VLSM planner.

use crate::errors::{NetcalcError, Result};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use netcalc::models::cidr_mask;
/// assert_eq!(cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn cidr_mask(len: u8) -> Result<u32> {
    if len > MAX_LENGTH {
        Err(NetcalcError::InvalidPrefixLength(format!(
            "/{len} (IPv4 maximum is /{MAX_LENGTH})"
        )))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Convert a CIDR prefix length to its wildcard (inverse) mask.
pub fn wildcard_mask(len: u8) -> Result<u32> {
    Ok(!cidr_mask(len)?)
}

/// Get the network address for a given IP and prefix length.
pub fn network_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    let mask = cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    let mask = cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    Ok(Ipv4Addr::from(network_bits | !mask))
}

/// Calculate the number of usable host addresses for a prefix length.
///
/// A /31 yields both addresses (RFC 3021 point-to-point) and a /32 yields
/// one (host route); every shorter prefix excludes the network and
/// broadcast addresses.
pub fn usable_hosts(len: u8) -> Result<u64> {
    match len {
        MAX_LENGTH => Ok(1),
        31 => Ok(2),
        l if l < 31 => Ok((1u64 << (MAX_LENGTH - l)) - 2),
        _ => Err(NetcalcError::InvalidPrefixLength(format!(
            "/{len} (IPv4 maximum is /{MAX_LENGTH})"
        ))),
    }
}

/// First and last usable host addresses for a network/broadcast pair.
///
/// Follows the same /31 and /32 special cases as [`usable_hosts`].
pub fn host_range(network: Ipv4Addr, broadcast: Ipv4Addr, len: u8) -> (Ipv4Addr, Ipv4Addr) {
    match len {
        MAX_LENGTH => (network, network),
        31 => (network, broadcast),
        _ => (
            Ipv4Addr::from(u32::from(network) + 1),
            Ipv4Addr::from(u32::from(broadcast) - 1),
        ),
    }
}

/// IPv4 address with CIDR notation support.
#[derive(Eq, Ord, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.mask);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4::new(&s).map_err(de::Error::custom)
    }
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<Ipv4> {
        let addr_cidr = addr_cidr.trim();
        let parts: Vec<&str> = addr_cidr.split('/').collect();
        if parts.len() != 2 {
            return Err(NetcalcError::InvalidAddressFormat(format!(
                "expected address/prefix, got \"{addr_cidr}\""
            )));
        }
        let addr = Ipv4Addr::from_str(parts[0]).map_err(|_| {
            NetcalcError::InvalidAddressFormat(format!("invalid IPv4 address \"{}\"", parts[0]))
        })?;
        let mask: u8 = parts[1].parse().map_err(|_| {
            NetcalcError::InvalidPrefixLength(format!("\"{}\" is not a prefix length", parts[1]))
        })?;
        if mask > MAX_LENGTH {
            return Err(NetcalcError::InvalidPrefixLength(format!(
                "/{mask} (IPv4 maximum is /{MAX_LENGTH})"
            )));
        }
        Ok(Ipv4 { addr, mask })
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        debug_assert!(self.mask <= MAX_LENGTH);
        let right_len = u32::from(MAX_LENGTH - self.mask.min(MAX_LENGTH));
        let bits = (u64::from(u32::from(self.addr)) >> right_len) << right_len;
        Ipv4Addr::from(bits as u32)
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        let right_len = u32::from(MAX_LENGTH - self.mask.min(MAX_LENGTH));
        let wildcard = if right_len == 0 {
            0
        } else {
            (u64::from(u32::MAX) >> (32 - right_len)) as u32
        };
        Ipv4Addr::from(u32::from(self.lo()) | wildcard)
    }

    /// True if `ip` falls inside this subnet.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        self.lo() <= ip && ip <= self.hi()
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

impl PartialEq for Ipv4 {
    fn eq(&self, other: &Ipv4) -> bool {
        self.addr == other.addr && self.mask == other.mask
    }
}

impl PartialOrd for Ipv4 {
    fn partial_cmp(&self, other: &Ipv4) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cidr_mask() {
        assert_eq!(cidr_mask(0).unwrap(), 0x00000000);
        assert_eq!(cidr_mask(8).unwrap(), 0xFF000000);
        assert_eq!(cidr_mask(16).unwrap(), 0xFFFF0000);
        assert_eq!(cidr_mask(24).unwrap(), 0xFFFFFF00);
        assert_eq!(cidr_mask(32).unwrap(), 0xFFFFFFFF);
        assert!(cidr_mask(33).is_err());
    }

    #[test]
    fn test_wildcard_mask() {
        assert_eq!(wildcard_mask(24).unwrap(), 0x000000FF);
        assert_eq!(wildcard_mask(0).unwrap(), 0xFFFFFFFF);
        assert_eq!(wildcard_mask(32).unwrap(), 0x00000000);
    }

    #[test]
    fn test_network_and_broadcast() {
        let ip = Ipv4Addr::new(192, 168, 1, 42);
        assert_eq!(network_addr(ip, 24).unwrap(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(network_addr(ip, 16).unwrap(), Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(network_addr(ip, 32).unwrap(), ip);
        assert!(network_addr(ip, 33).is_err());

        assert_eq!(
            broadcast_addr(ip, 24).unwrap(),
            Ipv4Addr::new(192, 168, 1, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 8).unwrap(),
            Ipv4Addr::new(192, 255, 255, 255)
        );
        assert_eq!(broadcast_addr(ip, 32).unwrap(), ip);
    }

    #[test]
    fn test_usable_hosts() {
        assert_eq!(usable_hosts(0).unwrap(), 4294967294);
        assert_eq!(usable_hosts(8).unwrap(), 16777214);
        assert_eq!(usable_hosts(24).unwrap(), 254);
        assert_eq!(usable_hosts(30).unwrap(), 2);
        assert_eq!(usable_hosts(31).unwrap(), 2);
        assert_eq!(usable_hosts(32).unwrap(), 1);
        assert!(usable_hosts(33).is_err());
    }

    #[test]
    fn test_host_range_specials() {
        let net = Ipv4Addr::new(192, 0, 2, 10);
        let bc = Ipv4Addr::new(192, 0, 2, 11);
        assert_eq!(host_range(net, bc, 31), (net, bc));
        assert_eq!(host_range(net, net, 32), (net, net));

        let net = Ipv4Addr::new(192, 168, 1, 0);
        let bc = Ipv4Addr::new(192, 168, 1, 255);
        assert_eq!(
            host_range(net, bc, 24),
            (
                Ipv4Addr::new(192, 168, 1, 1),
                Ipv4Addr::new(192, 168, 1, 254)
            )
        );
    }

    #[test]
    fn test_ipv4_new_errors() {
        assert!(matches!(
            Ipv4::new("10.0.0.0"),
            Err(NetcalcError::InvalidAddressFormat(_))
        ));
        assert!(matches!(
            Ipv4::new("300.0.0.0/8"),
            Err(NetcalcError::InvalidAddressFormat(_))
        ));
        assert!(matches!(
            Ipv4::new("10.0.0.0/33"),
            Err(NetcalcError::InvalidPrefixLength(_))
        ));
        assert!(matches!(
            Ipv4::new("10.0.0.0/abc"),
            Err(NetcalcError::InvalidPrefixLength(_))
        ));
    }

    #[test]
    fn test_lo_hi_contains() {
        let net = Ipv4::new("10.0.10.0/24").unwrap();
        assert_eq!(net.lo(), Ipv4Addr::new(10, 0, 10, 0));
        assert_eq!(net.hi(), Ipv4Addr::new(10, 0, 10, 255));
        assert!(net.contains(Ipv4Addr::new(10, 0, 10, 77)));
        assert!(!net.contains(Ipv4Addr::new(10, 0, 11, 0)));

        let all = Ipv4::new("0.0.0.0/0").unwrap();
        assert_eq!(all.hi(), Ipv4Addr::new(255, 255, 255, 255));
        assert!(all.contains(Ipv4Addr::new(8, 8, 8, 8)));
    }

    #[test]
    fn test_ip4_cmp() {
        let ip1 = Ipv4::new("10.0.0.1/24").unwrap();
        let ip2 = Ipv4::new("10.0.0.2/24").unwrap();
        let ip3 = Ipv4::new("10.0.0.1/24").unwrap();

        assert!(ip1 < ip2);
        assert!(ip1 == ip3);
        assert!(ip2 > ip1);
        assert!(ip2 >= ip3);
    }

    #[test]
    fn test_serde_roundtrip() {
        let ip = Ipv4::new("192.168.1.0/24").unwrap();
        let json = serde_json::to_string(&ip).unwrap();
        assert_eq!(json, "\"192.168.1.0/24\"");
        let back: Ipv4 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ip);
    }
}
