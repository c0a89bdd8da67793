//! CSV output formatting for result records.
//!
//! Scalar reports render as a `Property,Value` table, one row per field.
//! VLSM plans render their aggregates the same way followed by one CSV row
//! per allocation. Rendering never transforms the underlying values.

use crate::models::{Eui64Report, Ipv4SubnetReport, Ipv6SubnetReport, VlsmPlan};
use std::fmt::Write;

/// Escape a CSV field per RFC 4180 quoting rules.
pub fn escape_csv_field(input: &str) -> String {
    if input.contains(',') || input.contains('"') {
        let escaped = input.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        input.to_string()
    }
}

fn push_row(out: &mut String, property: &str, value: &str) {
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{},{}", escape_csv_field(property), escape_csv_field(value));
}

/// Render an IPv4 subnet report as a Property,Value table.
pub fn ipv4_report_csv(report: &Ipv4SubnetReport) -> String {
    let mut out = String::from("Property,Value\n");
    push_row(&mut out, "cidr", &report.cidr.to_string());
    push_row(&mut out, "network", &report.network.to_string());
    push_row(&mut out, "broadcast", &report.broadcast.to_string());
    push_row(&mut out, "netmask", &report.netmask.to_string());
    push_row(&mut out, "wildcard_mask", &report.wildcard_mask.to_string());
    push_row(&mut out, "first_host", &report.first_host.to_string());
    push_row(&mut out, "last_host", &report.last_host.to_string());
    push_row(&mut out, "host_count", &report.host_count.to_string());
    push_row(&mut out, "is_private", &report.is_private.to_string());
    push_row(&mut out, "is_loopback", &report.is_loopback.to_string());
    push_row(&mut out, "is_link_local", &report.is_link_local.to_string());
    push_row(&mut out, "is_multicast", &report.is_multicast.to_string());
    out
}

/// Render an IPv6 subnet report as a Property,Value table.
pub fn ipv6_report_csv(report: &Ipv6SubnetReport) -> String {
    let mut out = String::from("Property,Value\n");
    push_row(&mut out, "address", &report.address_compressed);
    push_row(&mut out, "address_expanded", &report.address_expanded);
    push_row(&mut out, "network", &report.network_compressed);
    push_row(&mut out, "network_expanded", &report.network_expanded);
    push_row(&mut out, "prefix", &report.prefix.to_string());
    push_row(&mut out, "host_bits", &report.host_bits.to_string());
    if let Some(count) = report.subnets_64 {
        push_row(&mut out, "subnets_64", &count.to_string());
    }
    if let Some(solicited) = &report.solicited_node {
        push_row(&mut out, "solicited_node", solicited);
    }
    push_row(&mut out, "class", &report.class.to_string());
    out
}

/// Render an EUI-64 report as a Property,Value table.
pub fn eui64_report_csv(report: &Eui64Report) -> String {
    let mut out = String::from("Property,Value\n");
    push_row(&mut out, "mac", &report.mac.to_string());
    push_row(&mut out, "interface_id", &report.interface_id);
    push_row(&mut out, "address", &report.address_compressed);
    push_row(&mut out, "address_expanded", &report.address_expanded);
    push_row(&mut out, "link_local", &report.link_local);
    push_row(&mut out, "solicited_node", &report.solicited_node);
    out
}

/// Render a VLSM plan: aggregates as Property,Value rows, then one CSV row
/// per allocation.
pub fn vlsm_plan_csv(plan: &VlsmPlan) -> String {
    let mut out = String::from("Property,Value\n");
    push_row(&mut out, "success", &plan.success.to_string());
    push_row(&mut out, "total_hosts", &plan.total_hosts.to_string());
    push_row(&mut out, "allocated_hosts", &plan.allocated_hosts.to_string());
    push_row(&mut out, "wasted_hosts", &plan.wasted_hosts.to_string());
    push_row(
        &mut out,
        "utilization_percent",
        &format!("{:.2}", plan.utilization_percent),
    );
    if let Some(message) = &plan.error_message {
        push_row(&mut out, "error_message", message);
    }

    if !plan.allocations.is_empty() {
        out.push('\n');
        out.push_str(
            "id,name,cidr,network,broadcast,first_host,last_host,hosts_allocated,slack_hosts\n",
        );
        for a in &plan.allocations {
            let _ = writeln!(
                out,
                "{},{},{},{},{},{},{},{},{}",
                escape_csv_field(&a.id),
                escape_csv_field(&a.name),
                a.cidr,
                a.network,
                a.broadcast,
                a.first_host,
                a.last_host,
                a.hosts_allocated,
                a.slack_hosts
            );
        }
    }
    out
}
