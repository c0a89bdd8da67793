//! Domain models for the address calculator.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`Ipv4`] - IPv4 address with CIDR notation support
//! - [`Ipv6`] - 128-bit IPv6 address with RFC 5952 text forms
//! - [`MacAddress`] - 48-bit MAC address
//! - report records produced by the processing layer

mod ipv4;
mod ipv6;
mod mac;
mod report;

// Re-export public types
pub use ipv4::{
    broadcast_addr, cidr_mask, host_range, network_addr, usable_hosts, wildcard_mask, Ipv4,
    MAX_LENGTH,
};
pub use ipv6::{prefix_mask, Ipv6, Ipv6Class, MAX_PREFIX};
pub use mac::MacAddress;
pub use report::{
    ConversionReport, Eui64Report, Ipv4SubnetReport, Ipv6SubnetReport, VlsmAllocation, VlsmPlan,
    VlsmRequirement,
};
