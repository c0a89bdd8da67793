//! Subnet reports for IPv4 and IPv6 queries.
//!
//! Given an address and a prefix length this computes the full derived
//! view: network, broadcast and masks for IPv4, network text forms and
//! host bits for IPv6, plus the classification of the queried address.

use super::canonical::classify;
use super::eui64::solicited_node;
use crate::errors::Result;
use crate::models::{
    cidr_mask, host_range, usable_hosts, Ipv4, Ipv4SubnetReport, Ipv6, Ipv6Class,
    Ipv6SubnetReport, MAX_PREFIX,
};
use std::net::Ipv4Addr;

/// Compute the full IPv4 subnet view for `addr` under `prefix`.
///
/// The classification flags describe `addr` itself, not the network, since
/// callers may query any address inside the block.
pub fn ipv4_report(addr: Ipv4Addr, prefix: u8) -> Result<Ipv4SubnetReport> {
    let mask = cidr_mask(prefix)?;
    let wildcard = !mask;
    let network = u32::from(addr) & mask;
    let broadcast = network | wildcard;

    let network = Ipv4Addr::from(network);
    let broadcast = Ipv4Addr::from(broadcast);
    let (first_host, last_host) = host_range(network, broadcast, prefix);

    log::debug!("ipv4_report {addr}/{prefix}: network {network}, broadcast {broadcast}");

    Ok(Ipv4SubnetReport {
        cidr: Ipv4 { addr, mask: prefix },
        network,
        broadcast,
        netmask: Ipv4Addr::from(mask),
        wildcard_mask: Ipv4Addr::from(wildcard),
        first_host,
        last_host,
        host_count: usable_hosts(prefix)?,
        is_private: addr.is_private(),
        is_loopback: addr.is_loopback(),
        is_link_local: addr.is_link_local(),
        is_multicast: addr.is_multicast(),
    })
}

/// Compute the full IPv6 subnet view for `addr` under `prefix`.
///
/// The solicited-node address is derived from the queried address and
/// omitted when that address is itself multicast.
pub fn ipv6_report(addr: Ipv6, prefix: u8) -> Result<Ipv6SubnetReport> {
    let network = addr.network(prefix)?;
    let host_bits = MAX_PREFIX - prefix;
    let class = classify(addr);

    let solicited = if class == Ipv6Class::Multicast {
        None
    } else {
        Some(solicited_node(addr).compressed())
    };
    let subnets_64 = if prefix < 64 {
        Some(1u128 << (64 - prefix))
    } else {
        None
    };

    log::debug!("ipv6_report {addr}/{prefix}: network {network}, class {class}");

    Ok(Ipv6SubnetReport {
        address_compressed: addr.compressed(),
        address_expanded: addr.expanded(),
        network_compressed: network.compressed(),
        network_expanded: network.expanded(),
        prefix,
        host_bits,
        subnets_64,
        solicited_node: solicited,
        class,
    })
}
