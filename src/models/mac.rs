//! 48-bit MAC address parsing and display.

use crate::errors::{NetcalcError, Result};
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    static ref MAC_SEPARATORS: Regex = Regex::new(r"[:\-]").expect("Invalid Regex?");
}

/// A 48-bit MAC address.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MacAddress(pub [u8; 6]);

impl MacAddress {
    /// Parse a `:` or `-` delimited hex MAC, case-insensitive.
    ///
    /// The input must reduce to exactly 12 hex digits once delimiters are
    /// stripped.
    pub fn parse(text: &str) -> Result<MacAddress> {
        let trimmed = text.trim();
        let cleaned = MAC_SEPARATORS.replace_all(trimmed, "");
        if !cleaned.chars().all(|c| c.is_ascii_hexdigit()) || cleaned.len() != 12 {
            return Err(NetcalcError::InvalidMac(format!(
                "\"{trimmed}\" does not reduce to 12 hex digits"
            )));
        }
        let mut octets = [0u8; 6];
        for (i, octet) in octets.iter_mut().enumerate() {
            *octet = u8::from_str_radix(&cleaned[2 * i..2 * i + 2], 16)
                .map_err(|_| NetcalcError::InvalidMac(format!("\"{trimmed}\"")))?;
        }
        Ok(MacAddress(octets))
    }
}

impl std::fmt::Display for MacAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().map(|o| format!("{o:02x}")).join(":"))
    }
}

impl Serialize for MacAddress {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
