//! Address computation logic.
//!
//! This module contains the calculators that consume decoded addresses:
//! - [`subnet`] - IPv4/IPv6 subnet reports
//! - [`canonical`] - IPv6 special-purpose classification
//! - [`eui64`] - EUI-64, link-local and solicited-node derivation
//! - [`vlsm`] - VLSM planning

mod canonical;
mod eui64;
mod subnet;
mod vlsm;

// Re-export public functions
pub use canonical::classify;
pub use eui64::{
    eui64_address, format_interface_id, interface_identifier, link_local, solicited_node,
};
pub use subnet::{ipv4_report, ipv6_report};
pub use vlsm::plan_subnets;
