//! IPv6 address representation and RFC 5952 text forms.
//!
//! An [`Ipv6`] is a plain 128-bit value; the eight 16-bit groups of the
//! textual forms are derived on demand. [`Ipv6::compressed`] implements the
//! RFC 5952 canonical form and [`Ipv6::expanded`] the full 8-group form.

use crate::errors::{NetcalcError, Result};
use itertools::Itertools;
use serde::Serialize;

/// Maximum length for an IPv6 prefix (128 bits).
pub const MAX_PREFIX: u8 = 128;

/// Convert an IPv6 prefix length to a 128-bit network mask.
pub fn prefix_mask(prefix: u8) -> Result<u128> {
    if prefix > MAX_PREFIX {
        Err(NetcalcError::InvalidPrefixLength(format!(
            "/{prefix} (IPv6 maximum is /{MAX_PREFIX})"
        )))
    } else if prefix == 0 {
        Ok(0)
    } else {
        Ok(u128::MAX << (MAX_PREFIX - prefix))
    }
}

/// IPv6 address as an unsigned 128-bit value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ipv6(pub u128);

impl Ipv6 {
    /// Build an address from its eight 16-bit groups, most significant first.
    pub fn from_groups(groups: [u16; 8]) -> Ipv6 {
        let mut value: u128 = 0;
        for g in groups {
            value = (value << 16) | u128::from(g);
        }
        Ipv6(value)
    }

    /// The eight 16-bit groups, most significant first.
    pub fn groups(&self) -> [u16; 8] {
        let mut groups = [0u16; 8];
        for (i, g) in groups.iter_mut().enumerate() {
            *g = (self.0 >> (112 - 16 * i)) as u16;
        }
        groups
    }

    /// The network address under the given prefix length.
    pub fn network(&self, prefix: u8) -> Result<Ipv6> {
        Ok(Ipv6(self.0 & prefix_mask(prefix)?))
    }

    /// RFC 5952 canonical form.
    ///
    /// The longest run of two or more zero groups collapses to `::`
    /// (leftmost run wins a tie); a lone zero group is kept; leading zeros
    /// are stripped; hex digits are lowercase.
    pub fn compressed(&self) -> String {
        let groups = self.groups();

        // Locate the longest run of consecutive zero groups.
        let mut best: Option<(usize, usize)> = None;
        let mut i = 0;
        while i < 8 {
            if groups[i] == 0 {
                let start = i;
                while i < 8 && groups[i] == 0 {
                    i += 1;
                }
                let len = i - start;
                if len >= 2 && best.map_or(true, |(_, best_len)| len > best_len) {
                    best = Some((start, len));
                }
            } else {
                i += 1;
            }
        }

        match best {
            None => groups.iter().map(|g| format!("{g:x}")).join(":"),
            Some((start, len)) => {
                let head = groups[..start].iter().map(|g| format!("{g:x}")).join(":");
                let tail = groups[start + len..]
                    .iter()
                    .map(|g| format!("{g:x}"))
                    .join(":");
                format!("{head}::{tail}")
            }
        }
    }

    /// Full 8-group form with every group padded to 4 hex digits.
    pub fn expanded(&self) -> String {
        self.groups().iter().map(|g| format!("{g:04x}")).join(":")
    }
}

impl std::fmt::Display for Ipv6 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.compressed())
    }
}

impl Serialize for Ipv6 {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.compressed())
    }
}

/// Exclusive classification of an IPv6 address.
///
/// Produced by longest-prefix match against the special-purpose reference
/// blocks; see `processing::canonical`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum Ipv6Class {
    Unspecified,
    Loopback,
    LinkLocal,
    Multicast,
    Documentation,
    UniqueLocal,
    GlobalUnicast,
}

impl std::fmt::Display for Ipv6Class {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let label = match self {
            Ipv6Class::Unspecified => "Unspecified",
            Ipv6Class::Loopback => "Loopback",
            Ipv6Class::LinkLocal => "Link-Local",
            Ipv6Class::Multicast => "Multicast",
            Ipv6Class::Documentation => "Documentation",
            Ipv6Class::UniqueLocal => "Unique Local",
            Ipv6Class::GlobalUnicast => "Global Unicast",
        };
        write!(f, "{label}")
    }
}
