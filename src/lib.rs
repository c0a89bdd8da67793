//! Network address computation core: IPv4/IPv6 subnet arithmetic, VLSM
//! planning, and IPv6 canonical forms with EUI-64 derivation.
//!
//! Everything is a pure function over caller-supplied inputs; no state is
//! held between calls and all failures come back as [`NetcalcError`]
//! values.

mod errors;

pub mod codec;
pub mod models;
pub mod output;
pub mod processing;

pub use errors::{NetcalcError, Result};

use codec::{
    format_binary, format_decimal, format_dotted, format_hex, parse_ipv4, parse_ipv6, Ipv4Format,
};
use models::{
    ConversionReport, Eui64Report, Ipv4, Ipv4SubnetReport, Ipv6, Ipv6SubnetReport, MacAddress,
    VlsmPlan, VlsmRequirement, MAX_PREFIX,
};
use processing::{eui64_address, format_interface_id, interface_identifier, solicited_node};

/// Prefix length assumed for a bare IPv6 address with no `/prefix`.
const DEFAULT_IPV6_PREFIX: u8 = 64;

/// Compute the IPv4 subnet report for a CIDR string like `192.168.1.1/24`.
pub fn ipv4_summary(cidr: &str) -> Result<Ipv4SubnetReport> {
    let parsed = Ipv4::new(cidr)?;
    processing::ipv4_report(parsed.addr, parsed.mask)
}

/// Compute the IPv6 subnet report for `addr[/prefix]` text.
///
/// A missing prefix defaults to /64.
pub fn ipv6_summary(text: &str) -> Result<Ipv6SubnetReport> {
    let (addr, prefix) = parse_ipv6_cidr(text)?;
    processing::ipv6_report(addr, prefix)
}

/// Split `addr[/prefix]` text into an address and a validated prefix.
pub fn parse_ipv6_cidr(text: &str) -> Result<(Ipv6, u8)> {
    let text = text.trim();
    match text.split_once('/') {
        None => Ok((parse_ipv6(text)?, DEFAULT_IPV6_PREFIX)),
        Some((addr_text, prefix_text)) => {
            let addr = parse_ipv6(addr_text)?;
            let prefix: u8 = prefix_text.parse().map_err(|_| {
                NetcalcError::InvalidPrefixLength(format!(
                    "\"{prefix_text}\" is not a prefix length"
                ))
            })?;
            if prefix > MAX_PREFIX {
                return Err(NetcalcError::InvalidPrefixLength(format!(
                    "/{prefix} (IPv6 maximum is /{MAX_PREFIX})"
                )));
            }
            Ok((addr, prefix))
        }
    }
}

/// Derive the EUI-64 report for a MAC, under `prefix_text` or fe80::.
pub fn eui64_summary(mac_text: &str, prefix_text: Option<&str>) -> Result<Eui64Report> {
    let mac = MacAddress::parse(mac_text)?;
    let prefix = match prefix_text {
        Some(text) => parse_ipv6(text)?,
        None => Ipv6(0xfe80_u128 << 112),
    };
    let address = eui64_address(prefix, &mac);
    Ok(Eui64Report {
        mac,
        interface_id: format_interface_id(interface_identifier(&mac)),
        address_compressed: address.compressed(),
        address_expanded: address.expanded(),
        link_local: processing::link_local(&mac).compressed(),
        solicited_node: solicited_node(address).compressed(),
    })
}

/// Plan VLSM subnets for `requirements` inside the base network.
pub fn vlsm_summary(base_cidr: &str, requirements: &[VlsmRequirement]) -> Result<VlsmPlan> {
    let base = Ipv4::new(base_cidr)?;
    Ok(processing::plan_subnets(base, requirements))
}

/// Produce all four textual renderings of one IPv4 address given in any of
/// them.
pub fn convert_ipv4(text: &str, format: Ipv4Format) -> Result<ConversionReport> {
    let addr = parse_ipv4(text, format)?;
    Ok(ConversionReport {
        dotted: format_dotted(addr),
        decimal: format_decimal(addr),
        binary: format_binary(addr),
        hex: format_hex(addr),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ipv4_summary() {
        let report = ipv4_summary("192.168.1.1/24").unwrap();
        assert_eq!(report.network.to_string(), "192.168.1.0");
        assert_eq!(report.host_count, 254);
        assert!(ipv4_summary("192.168.1.1").is_err());
        assert!(ipv4_summary("not-an-ip/24").is_err());
    }

    #[test]
    fn test_ipv6_summary_default_prefix() {
        let report = ipv6_summary("2001:db8::1").unwrap();
        assert_eq!(report.prefix, 64);
        let report = ipv6_summary("2001:db8::1/48").unwrap();
        assert_eq!(report.prefix, 48);
        assert!(ipv6_summary("2001:db8::1/129").is_err());
        assert!(ipv6_summary("2001:db8::1/x").is_err());
    }

    #[test]
    fn test_eui64_summary() {
        let report = eui64_summary("00:11:22:33:44:55", None).unwrap();
        assert_eq!(report.address_compressed, "fe80::211:22ff:fe33:4455");
        assert_eq!(report.link_local, "fe80::211:22ff:fe33:4455");
        assert_eq!(report.interface_id, "0211:22ff:fe33:4455");
        assert_eq!(report.solicited_node, "ff02::1:ff33:4455");

        let report = eui64_summary("00:11:22:33:44:55", Some("2001:db8::")).unwrap();
        assert_eq!(report.address_compressed, "2001:db8::211:22ff:fe33:4455");
        assert_eq!(report.link_local, "fe80::211:22ff:fe33:4455");
    }

    #[test]
    fn test_vlsm_summary() {
        let reqs = vec![VlsmRequirement {
            id: "r1".to_string(),
            name: "lan".to_string(),
            hosts_required: 100,
            description: None,
        }];
        let plan = vlsm_summary("10.0.0.0/16", &reqs).unwrap();
        assert!(plan.success);
        assert_eq!(plan.allocations[0].cidr.to_string(), "10.0.0.0/25");
        assert!(vlsm_summary("10.0.0.0", &reqs).is_err());
    }

    #[test]
    fn test_convert_ipv4() {
        let report = convert_ipv4("3232235777", Ipv4Format::Decimal).unwrap();
        assert_eq!(report.dotted, "192.168.1.1");
        assert_eq!(report.binary, "11000000.10101000.00000001.00000001");
        assert_eq!(report.hex, "0xc0a80101");
    }
}
