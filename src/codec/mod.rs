//! Textual address parsing and formatting.
//!
//! This module converts between the textual renderings of addresses and
//! the fixed-width integer models:
//! - [`ipv4`] - dotted, decimal, binary and hex IPv4 forms
//! - [`ipv6`] - full, compressed and mixed IPv6 forms

mod ipv4;
mod ipv6;

// Re-export public functions
pub use ipv4::{
    format_binary, format_decimal, format_dotted, format_hex, parse_dotted, parse_ipv4, Ipv4Format,
};
pub use ipv6::parse_ipv6;
