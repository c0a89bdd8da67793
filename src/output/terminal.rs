//! Terminal output with colors.
//!
//! Renders result records as aligned key/value tables for interactive use.

use crate::models::{Eui64Report, Ipv4SubnetReport, Ipv6SubnetReport, VlsmPlan};
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

fn print_kv(label: &str, value: &str) {
    println!("{:<18} {}", label.bold(), value);
}

fn flag(set: bool) -> String {
    if set {
        "yes".green().to_string()
    } else {
        "no".normal().to_string()
    }
}

/// Print an IPv4 subnet report.
pub fn print_ipv4_report(report: &Ipv4SubnetReport) {
    println!("{}", format!("# {}", report.cidr).cyan());
    print_kv("network", &report.network.to_string());
    print_kv("broadcast", &report.broadcast.to_string());
    print_kv("netmask", &report.netmask.to_string());
    print_kv("wildcard_mask", &report.wildcard_mask.to_string());
    print_kv("first_host", &report.first_host.to_string());
    print_kv("last_host", &report.last_host.to_string());
    print_kv("host_count", &report.host_count.to_string());
    print_kv("private", &flag(report.is_private));
    print_kv("loopback", &flag(report.is_loopback));
    print_kv("link_local", &flag(report.is_link_local));
    print_kv("multicast", &flag(report.is_multicast));
}

/// Print an IPv6 subnet report.
pub fn print_ipv6_report(report: &Ipv6SubnetReport) {
    println!(
        "{}",
        format!("# {}/{}", report.address_compressed, report.prefix).cyan()
    );
    print_kv("address", &report.address_compressed);
    print_kv("expanded", &report.address_expanded);
    print_kv("network", &report.network_compressed);
    print_kv("network_expanded", &report.network_expanded);
    print_kv("host_bits", &report.host_bits.to_string());
    if let Some(count) = report.subnets_64 {
        print_kv("subnets_64", &count.to_string());
    }
    if let Some(solicited) = &report.solicited_node {
        print_kv("solicited_node", solicited);
    }
    print_kv("class", &report.class.to_string());
}

/// Print an EUI-64 report.
pub fn print_eui64_report(report: &Eui64Report) {
    println!("{}", format!("# {}", report.mac).cyan());
    print_kv("interface_id", &report.interface_id);
    print_kv("address", &report.address_compressed);
    print_kv("expanded", &report.address_expanded);
    print_kv("link_local", &report.link_local);
    print_kv("solicited_node", &report.solicited_node);
}

/// Print a VLSM plan as an allocation table plus aggregates.
pub fn print_vlsm_plan(plan: &VlsmPlan) {
    if !plan.success {
        let message = plan.error_message.as_deref().unwrap_or("unknown error");
        println!("{} {}", "plan failed:".on_red(), message);
        return;
    }

    println!(
        "{name}{cidr}{hosts}{range}{slack}",
        name = format_field("name", 16),
        cidr = format_field("cidr", 20),
        hosts = format_field("hosts", 10),
        range = format_field("first-last", 34),
        slack = format_field("slack", 9),
    );
    for a in &plan.allocations {
        println!(
            "{name}{cidr}{hosts}{range}{slack}",
            name = format_field(&a.name, 16),
            cidr = format_field(a.cidr, 20),
            hosts = format_field(a.hosts_allocated, 10),
            range = format_field(format!("{}-{}", a.first_host, a.last_host), 34),
            slack = format_field(a.slack_hosts, 9),
        );
    }
    println!(
        "{} requested {}, allocated {}, wasted {}, utilization {:.1}%",
        "summary:".bold(),
        plan.total_hosts,
        plan.allocated_hosts,
        plan.wasted_hosts,
        plan.utilization_percent
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "    \"test\"");
    }

    #[test]
    fn test_format_field_exact() {
        assert_eq!(format_field("test", 6), "\"test\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "\"long_value\"");
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field(42, 6), "  \"42\"");
    }
}
