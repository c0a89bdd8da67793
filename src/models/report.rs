//! Result records produced by the subnet engine, the EUI-64 generator and
//! the VLSM planner.
//!
//! Every record is a plain owned value computed fresh per call and
//! serializable with serde; rendering to JSON, CSV or the terminal lives in
//! the `output` module and never changes the values.

use super::{Ipv4, Ipv6Class, MacAddress};
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// Full computed view of one IPv4 subnet query.
#[derive(Debug, Clone, Serialize)]
pub struct Ipv4SubnetReport {
    /// The queried address with its prefix, as given.
    pub cidr: Ipv4,
    pub network: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    pub netmask: Ipv4Addr,
    pub wildcard_mask: Ipv4Addr,
    pub first_host: Ipv4Addr,
    pub last_host: Ipv4Addr,
    pub host_count: u64,
    /// Flags below describe the queried address itself, not its network.
    pub is_private: bool,
    pub is_loopback: bool,
    pub is_link_local: bool,
    pub is_multicast: bool,
}

/// Full computed view of one IPv6 subnet query.
#[derive(Debug, Clone, Serialize)]
pub struct Ipv6SubnetReport {
    pub address_compressed: String,
    pub address_expanded: String,
    pub network_compressed: String,
    pub network_expanded: String,
    pub prefix: u8,
    pub host_bits: u8,
    /// Number of /64 networks contained, present when the prefix is
    /// shorter than 64 bits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnets_64: Option<u128>,
    /// Solicited-node multicast address of the queried address; absent
    /// when the address is itself multicast.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solicited_node: Option<String>,
    pub class: Ipv6Class,
}

/// EUI-64 derivation results for one MAC address.
#[derive(Debug, Clone, Serialize)]
pub struct Eui64Report {
    pub mac: MacAddress,
    /// The 64-bit interface identifier, as four hex groups.
    pub interface_id: String,
    /// The derived address under the supplied (or fe80::) prefix.
    pub address_compressed: String,
    pub address_expanded: String,
    pub link_local: String,
    pub solicited_node: String,
}

/// The four textual renderings of one IPv4 address.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    pub dotted: String,
    pub decimal: String,
    pub binary: String,
    pub hex: String,
}

/// One caller-supplied VLSM sizing requirement.
///
/// `id` is opaque and must be unique within a plan; the planner copies it
/// into the matching allocation and never mutates the requirement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VlsmRequirement {
    pub id: String,
    pub name: String,
    pub hosts_required: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One placed subnet in a successful VLSM plan.
#[derive(Debug, Clone, Serialize)]
pub struct VlsmAllocation {
    pub id: String,
    pub name: String,
    pub cidr: Ipv4,
    pub prefix: u8,
    pub network: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    pub first_host: Ipv4Addr,
    pub last_host: Ipv4Addr,
    pub hosts_allocated: u64,
    pub slack_hosts: u64,
}

/// Outcome of one VLSM planning pass.
///
/// Allocations are ordered by processing order (largest requirement
/// first), not input order; callers wanting input order re-join by `id`.
/// A failed plan carries no allocations at all.
#[derive(Debug, Clone, Serialize)]
pub struct VlsmPlan {
    pub success: bool,
    pub allocations: Vec<VlsmAllocation>,
    pub total_hosts: u64,
    pub allocated_hosts: u64,
    pub wasted_hosts: u64,
    pub utilization_percent: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}
