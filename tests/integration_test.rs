//! Integration tests for netcalc
//!
//! These tests exercise the public pipeline end-to-end: text in, report
//! records out.

use netcalc::codec::{format_dotted, parse_dotted, parse_ipv6, Ipv4Format};
use netcalc::models::{Ipv6Class, VlsmRequirement};
use netcalc::{convert_ipv4, eui64_summary, ipv4_summary, ipv6_summary, vlsm_summary};

fn req(id: &str, name: &str, hosts: u64) -> VlsmRequirement {
    VlsmRequirement {
        id: id.to_string(),
        name: name.to_string(),
        hosts_required: hosts,
        description: None,
    }
}

#[test]
fn test_dotted_roundtrip_is_canonical() {
    for text in ["192.168.1.1", "0.0.0.0", "255.255.255.255", "10.0.0.1"] {
        let addr = parse_dotted(text).expect("valid dotted input");
        assert_eq!(format_dotted(addr), *text);
    }
    // Leading zeros normalize away on the round trip.
    let addr = parse_dotted("010.001.000.001").unwrap();
    assert_eq!(format_dotted(addr), "10.1.0.1");
}

#[test]
fn test_compression_is_lossless() {
    for text in [
        "2001:db8::1",
        "2001:db8:0:1::1",
        "::",
        "::1",
        "fe80::1:2:3:4",
        "1:2:3:4:5:6:7:8",
        "2001:0db8:0000:0000:0000:0000:0000:0001",
    ] {
        let addr = parse_ipv6(text).expect("valid IPv6 input");
        let reparsed = parse_ipv6(&addr.compressed()).expect("compressed form reparses");
        assert_eq!(reparsed.expanded(), addr.expanded(), "lossless for {text}");
    }
}

#[test]
fn test_compression_emits_at_most_one_marker() {
    for text in [
        "0:0:1:0:0:1:0:0",
        "1:0:0:0:1:0:0:1",
        "2001:db8:0:1::1",
        "::ffff:1.2.3.4",
    ] {
        let compressed = parse_ipv6(text).unwrap().compressed();
        assert!(
            compressed.matches("::").count() <= 1,
            "{compressed} has more than one ::"
        );
    }
}

#[test]
fn test_lone_zero_group_is_never_compressed() {
    let compressed = parse_ipv6("2001:db8:0:1:0:0:0:1").unwrap().compressed();
    assert_eq!(compressed, "2001:db8:0:1::1");
    assert!(!compressed.starts_with("2001:db8::"));
}

#[test]
fn test_ipv4_known_vectors() {
    let report = ipv4_summary("192.168.1.1/24").unwrap();
    assert_eq!(report.network.to_string(), "192.168.1.0");
    assert_eq!(report.broadcast.to_string(), "192.168.1.255");
    assert_eq!(report.host_count, 254);
    assert_eq!(report.first_host.to_string(), "192.168.1.1");
    assert_eq!(report.last_host.to_string(), "192.168.1.254");

    let report = ipv4_summary("192.0.2.10/31").unwrap();
    assert_eq!(report.host_count, 2);
    assert_eq!(report.first_host, report.network);
    assert_eq!(report.last_host, report.broadcast);

    let report = ipv4_summary("203.0.113.1/32").unwrap();
    assert_eq!(report.host_count, 1);
    assert_eq!(report.first_host, report.last_host);
    assert_eq!(report.network, report.broadcast);
    assert_eq!(report.network.to_string(), "203.0.113.1");
}

#[test]
fn test_eui64_known_vector() {
    let report = eui64_summary("00:11:22:33:44:55", None).unwrap();
    assert_eq!(report.address_expanded, "fe80:0000:0000:0000:0211:22ff:fe33:4455");
    assert_eq!(report.address_compressed, "fe80::211:22ff:fe33:4455");
}

#[test]
fn test_ipv6_classification_through_pipeline() {
    assert_eq!(ipv6_summary("::1/128").unwrap().class, Ipv6Class::Loopback);
    assert_eq!(
        ipv6_summary("fe80::1/64").unwrap().class,
        Ipv6Class::LinkLocal
    );
    assert_eq!(
        ipv6_summary("2001:db8::1/32").unwrap().class,
        Ipv6Class::Documentation
    );
    assert_eq!(
        ipv6_summary("fd00::1/8").unwrap().class,
        Ipv6Class::UniqueLocal
    );
}

#[test]
fn test_vlsm_plan_succeeds_largest_first() {
    let reqs = vec![
        req("a", "a", 500),
        req("b", "b", 120),
        req("c", "c", 50),
        req("d", "d", 10),
        req("e", "e", 5),
    ];
    let plan = vlsm_summary("10.0.0.0/20", &reqs).unwrap();
    assert!(plan.success);
    assert_eq!(plan.allocations.len(), 5);

    // Largest first, strictly descending block sizes here.
    let hosts: Vec<u64> = plan.allocations.iter().map(|a| a.hosts_allocated).collect();
    assert!(hosts.windows(2).all(|w| w[0] >= w[1]));

    assert!(plan.allocated_hosts >= plan.total_hosts);
    assert!(plan.utilization_percent <= 100.0);

    // Re-join by id recovers the caller's order.
    let by_id = |id: &str| plan.allocations.iter().find(|a| a.id == id).unwrap();
    assert_eq!(by_id("a").cidr.to_string(), "10.0.0.0/23");
    assert_eq!(by_id("e").cidr.to_string(), "10.0.2.208/29");
}

#[test]
fn test_vlsm_plan_overflow_returns_no_partial_result() {
    let reqs = vec![
        req("a", "first", 2000),
        req("b", "second", 2000),
        req("c", "third", 2000),
    ];
    let plan = vlsm_summary("10.1.0.0/20", &reqs).unwrap();
    assert!(!plan.success);
    assert!(plan.allocations.is_empty());
    assert!(plan.error_message.is_some());
}

#[test]
fn test_convert_roundtrip_across_formats() {
    let from_dotted = convert_ipv4("192.168.1.1", Ipv4Format::Dotted).unwrap();
    let from_decimal = convert_ipv4(&from_dotted.decimal, Ipv4Format::Decimal).unwrap();
    let from_binary = convert_ipv4(&from_dotted.binary, Ipv4Format::Binary).unwrap();
    let from_hex = convert_ipv4(&from_dotted.hex, Ipv4Format::Hex).unwrap();
    assert_eq!(from_decimal.dotted, "192.168.1.1");
    assert_eq!(from_binary.dotted, "192.168.1.1");
    assert_eq!(from_hex.dotted, "192.168.1.1");
}
