//! IPv6 special-purpose address classification.
//!
//! A single longest-prefix match against the reference blocks decides the
//! class; substring checks against the textual form are never used, so
//! overlapping ranges (fe80::/10 inside fc00::/7's neighborhood, ::1
//! inside ::/0) resolve deterministically.

use crate::models::{Ipv6, Ipv6Class};

/// Special-purpose reference blocks as (value, mask, class), ordered most
/// specific first. The first matching entry wins.
const REFERENCE_BLOCKS: [(u128, u128, Ipv6Class); 6] = [
    // ::/128
    (0, u128::MAX, Ipv6Class::Unspecified),
    // ::1/128
    (1, u128::MAX, Ipv6Class::Loopback),
    // 2001:db8::/32
    (
        0x2001_0db8_u128 << 96,
        0xffff_ffff_u128 << 96,
        Ipv6Class::Documentation,
    ),
    // fe80::/10
    (0xfe80_u128 << 112, 0xffc0_u128 << 112, Ipv6Class::LinkLocal),
    // ff00::/8
    (0xff00_u128 << 112, 0xff00_u128 << 112, Ipv6Class::Multicast),
    // fc00::/7
    (0xfc00_u128 << 112, 0xfe00_u128 << 112, Ipv6Class::UniqueLocal),
];

/// Classify an IPv6 address against the special-purpose reference blocks.
///
/// Anything outside every block is Global Unicast.
pub fn classify(addr: Ipv6) -> Ipv6Class {
    for (value, mask, class) in REFERENCE_BLOCKS {
        if addr.0 & mask == value {
            return class;
        }
    }
    Ipv6Class::GlobalUnicast
}
