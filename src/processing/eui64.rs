//! EUI-64 interface identifiers and derived IPv6 addresses.

use crate::models::{Ipv6, MacAddress};

/// fe80::/64, the prefix used for derived link-local addresses.
const LINK_LOCAL_PREFIX: u128 = 0xfe80_u128 << 112;

/// ff02::1:ff00:0, the /104 solicited-node multicast prefix.
const SOLICITED_NODE_PREFIX: u128 = (0xff02_u128 << 112) | (1u128 << 32) | (0xff00_u128 << 16);

/// Derive the 64-bit EUI-64 interface identifier from a MAC address.
///
/// `ff:fe` is inserted between the two 24-bit halves and the
/// universal/local bit of the first octet is flipped.
pub fn interface_identifier(mac: &MacAddress) -> u64 {
    let o = mac.0;
    u64::from_be_bytes([o[0] ^ 0x02, o[1], o[2], 0xff, 0xfe, o[3], o[4], o[5]])
}

/// Combine the top 64 bits of `prefix` with the interface identifier for
/// `mac`.
pub fn eui64_address(prefix: Ipv6, mac: &MacAddress) -> Ipv6 {
    let network = prefix.0 & (u128::MAX << 64);
    Ipv6(network | u128::from(interface_identifier(mac)))
}

/// The link-local (fe80::/64) address derived from `mac`.
pub fn link_local(mac: &MacAddress) -> Ipv6 {
    eui64_address(Ipv6(LINK_LOCAL_PREFIX), mac)
}

/// The solicited-node multicast address for `addr`: the low 24 bits of the
/// target appended to ff02::1:ff00:0/104 (RFC 4291 §2.7.1).
pub fn solicited_node(addr: Ipv6) -> Ipv6 {
    Ipv6(SOLICITED_NODE_PREFIX | (addr.0 & 0x00ff_ffff))
}

/// The interface identifier rendered as four colon-separated hex groups.
pub fn format_interface_id(id: u64) -> String {
    format!(
        "{:04x}:{:04x}:{:04x}:{:04x}",
        (id >> 48) as u16,
        (id >> 32) as u16,
        (id >> 16) as u16,
        id as u16
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::parse_ipv6;

    #[test]
    fn test_interface_identifier() {
        let mac = MacAddress::parse("00:11:22:33:44:55").unwrap();
        assert_eq!(interface_identifier(&mac), 0x0211_22ff_fe33_4455);
        assert_eq!(
            format_interface_id(interface_identifier(&mac)),
            "0211:22ff:fe33:4455"
        );
    }

    #[test]
    fn test_universal_local_bit_flip() {
        // 0x02 flips back to 0x00 in the identifier.
        let mac = MacAddress::parse("02:00:00:00:00:01").unwrap();
        assert_eq!(interface_identifier(&mac), 0x0000_00ff_fe00_0001);
    }

    #[test]
    fn test_link_local() {
        let mac = MacAddress::parse("00:11:22:33:44:55").unwrap();
        let addr = link_local(&mac);
        assert_eq!(addr.compressed(), "fe80::211:22ff:fe33:4455");
        assert_eq!(addr.expanded(), "fe80:0000:0000:0000:0211:22ff:fe33:4455");
    }

    #[test]
    fn test_eui64_with_global_prefix() {
        let mac = MacAddress::parse("00:11:22:33:44:55").unwrap();
        let prefix = parse_ipv6("2001:db8:aaaa:bbbb::").unwrap();
        let addr = eui64_address(prefix, &mac);
        assert_eq!(addr.compressed(), "2001:db8:aaaa:bbbb:211:22ff:fe33:4455");
        // Host bits of the supplied prefix are ignored.
        let dirty = parse_ipv6("2001:db8:aaaa:bbbb::dead").unwrap();
        assert_eq!(eui64_address(dirty, &mac), addr);
    }

    #[test]
    fn test_solicited_node() {
        let addr = parse_ipv6("fd00:abcd:abcd:abcd:abcd:abcd:abcd:abcd").unwrap();
        assert_eq!(solicited_node(addr).compressed(), "ff02::1:ffcd:abcd");

        let addr = parse_ipv6("2001:db8::1").unwrap();
        assert_eq!(solicited_node(addr).compressed(), "ff02::1:ff00:1");
    }
}
