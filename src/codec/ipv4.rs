//! IPv4 textual parsing and formatting.
//!
//! Accepts the four interchangeable renderings of a 32-bit address:
//! dotted-decimal, plain decimal, binary and hex. Parsing is strict; any
//! out-of-range octet, stray token or over-long digit string is rejected.

use crate::errors::{NetcalcError, Result};
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use std::net::Ipv4Addr;

lazy_static! {
    static ref BINARY_SEPARATORS: Regex = Regex::new(r"[.\s]").expect("Invalid Regex?");
    static ref HEX_SEPARATORS: Regex = Regex::new(r"[:\s]").expect("Invalid Regex?");
}

/// The textual renderings understood by [`parse_ipv4`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Ipv4Format {
    /// `a.b.c.d`
    Dotted,
    /// 32-bit integer, e.g. `3232235777`
    Decimal,
    /// Up to 32 binary digits, dots and spaces ignored
    Binary,
    /// Up to 8 hex digits, colons, spaces and a leading `0x` ignored
    Hex,
}

impl Ipv4Format {
    /// Resolve a format name as given on the command line.
    pub fn from_name(name: &str) -> Result<Ipv4Format> {
        match name.to_ascii_lowercase().as_str() {
            "dotted" => Ok(Ipv4Format::Dotted),
            "decimal" => Ok(Ipv4Format::Decimal),
            "binary" => Ok(Ipv4Format::Binary),
            "hex" => Ok(Ipv4Format::Hex),
            other => Err(NetcalcError::InvalidAddressFormat(format!(
                "unknown IPv4 format \"{other}\""
            ))),
        }
    }
}

/// Parse IPv4 text in the requested format into an address.
pub fn parse_ipv4(text: &str, format: Ipv4Format) -> Result<Ipv4Addr> {
    match format {
        Ipv4Format::Dotted => parse_dotted(text),
        Ipv4Format::Decimal => parse_decimal(text),
        Ipv4Format::Binary => parse_binary(text),
        Ipv4Format::Hex => parse_hex(text),
    }
}

fn invalid(text: &str, reason: &str) -> NetcalcError {
    NetcalcError::InvalidAddressFormat(format!("\"{text}\": {reason}"))
}

/// Exactly 4 all-digit groups, each in 0..=255.
pub fn parse_dotted(text: &str) -> Result<Ipv4Addr> {
    let trimmed = text.trim();
    let parts: Vec<&str> = trimmed.split('.').collect();
    if parts.len() != 4 {
        return Err(invalid(trimmed, "expected 4 dotted groups"));
    }
    let mut octets = [0u8; 4];
    for (i, part) in parts.iter().enumerate() {
        if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid(trimmed, "octets must be decimal integers"));
        }
        let value: u32 = part
            .parse()
            .map_err(|_| invalid(trimmed, "octet out of range"))?;
        if value > 255 {
            return Err(invalid(trimmed, "octet out of range"));
        }
        octets[i] = value as u8;
    }
    Ok(Ipv4Addr::from(octets))
}

/// A plain integer in 0..=4294967295.
pub fn parse_decimal(text: &str) -> Result<Ipv4Addr> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid(trimmed, "expected a decimal integer"));
    }
    let value: u64 = trimmed
        .parse()
        .map_err(|_| invalid(trimmed, "value exceeds 32 bits"))?;
    if value > u64::from(u32::MAX) {
        return Err(invalid(trimmed, "value exceeds 32 bits"));
    }
    Ok(Ipv4Addr::from(value as u32))
}

/// Up to 32 binary digits; dots and spaces are stripped first and the
/// result is left-padded with zeros.
pub fn parse_binary(text: &str) -> Result<Ipv4Addr> {
    let trimmed = text.trim();
    let cleaned = BINARY_SEPARATORS.replace_all(trimmed, "");
    if cleaned.is_empty() || cleaned.len() > 32 {
        return Err(invalid(trimmed, "expected 1 to 32 binary digits"));
    }
    let mut value: u32 = 0;
    for c in cleaned.chars() {
        value = (value << 1)
            | match c {
                '0' => 0,
                '1' => 1,
                _ => return Err(invalid(trimmed, "binary digits must be 0 or 1")),
            };
    }
    Ok(Ipv4Addr::from(value))
}

/// Up to 8 hex digits; colons, spaces and one leading `0x` are stripped
/// first and the result is left-padded with zeros.
pub fn parse_hex(text: &str) -> Result<Ipv4Addr> {
    let trimmed = text.trim();
    let cleaned = HEX_SEPARATORS.replace_all(trimmed, "");
    let digits = cleaned
        .strip_prefix("0x")
        .or_else(|| cleaned.strip_prefix("0X"))
        .unwrap_or(&cleaned);
    if digits.is_empty() || digits.len() > 8 {
        return Err(invalid(trimmed, "expected 1 to 8 hex digits"));
    }
    let value = u32::from_str_radix(digits, 16)
        .map_err(|_| invalid(trimmed, "hex digits must be 0-9a-f"))?;
    Ok(Ipv4Addr::from(value))
}

/// `a.b.c.d`
pub fn format_dotted(addr: Ipv4Addr) -> String {
    addr.to_string()
}

/// The address as a plain 32-bit integer.
pub fn format_decimal(addr: Ipv4Addr) -> String {
    u32::from(addr).to_string()
}

/// The address as four dot-separated 8-bit binary groups.
pub fn format_binary(addr: Ipv4Addr) -> String {
    addr.octets().iter().map(|o| format!("{o:08b}")).join(".")
}

/// The address as `0x`-prefixed lowercase hex.
pub fn format_hex(addr: Ipv4Addr) -> String {
    format!("{:#010x}", u32::from(addr))
}
