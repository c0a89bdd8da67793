//! IPv6 textual parsing.
//!
//! Accepts the full 8-group form, the `::` compressed form and the mixed
//! form with a trailing embedded dotted-quad. At most one `::` marker is
//! allowed and the explicit groups plus the compressed run must total
//! exactly 8 groups.

use super::ipv4::parse_dotted;
use crate::errors::{NetcalcError, Result};
use crate::models::Ipv6;

fn invalid(text: &str, reason: &str) -> NetcalcError {
    NetcalcError::InvalidAddressFormat(format!("\"{text}\": {reason}"))
}

/// Parse IPv6 text into an address.
pub fn parse_ipv6(input: &str) -> Result<Ipv6> {
    let text = input.trim();
    if text.is_empty() {
        return Err(invalid(text, "empty address"));
    }

    match text.find("::") {
        Some(pos) => {
            let head = &text[..pos];
            let tail = &text[pos + 2..];
            if tail.contains("::") {
                return Err(invalid(text, "more than one \"::\""));
            }
            let head_groups = parse_side(head, text, false)?;
            let tail_groups = parse_side(tail, text, true)?;
            let explicit = head_groups.len() + tail_groups.len();
            if explicit >= 8 {
                return Err(invalid(text, "\"::\" must stand for at least one group"));
            }
            let mut groups = [0u16; 8];
            groups[..head_groups.len()].copy_from_slice(&head_groups);
            groups[8 - tail_groups.len()..].copy_from_slice(&tail_groups);
            Ok(Ipv6::from_groups(groups))
        }
        None => {
            let flat = parse_side(text, text, true)?;
            let groups: [u16; 8] = flat
                .try_into()
                .map_err(|_| invalid(text, "expected exactly 8 groups"))?;
            Ok(Ipv6::from_groups(groups))
        }
    }
}

/// Parse one colon-separated side of an address.
///
/// An empty side contributes no groups. A dotted-quad group counts as two
/// 16-bit groups and is only legal in final position of the tail side.
fn parse_side(side: &str, text: &str, allow_mixed: bool) -> Result<Vec<u16>> {
    if side.is_empty() {
        return Ok(vec![]);
    }
    let raw: Vec<&str> = side.split(':').collect();
    let mut groups = Vec::with_capacity(raw.len() + 1);
    for (i, part) in raw.iter().enumerate() {
        if part.contains('.') {
            if !allow_mixed || i != raw.len() - 1 {
                return Err(invalid(text, "embedded IPv4 must come last"));
            }
            let v4 =
                parse_dotted(part).map_err(|_| invalid(text, "invalid embedded IPv4 address"))?;
            let bits = u32::from(v4);
            groups.push((bits >> 16) as u16);
            groups.push((bits & 0xffff) as u16);
        } else {
            groups.push(parse_group(part, text)?);
        }
    }
    Ok(groups)
}

/// One group of 1 to 4 hex digits.
fn parse_group(group: &str, text: &str) -> Result<u16> {
    if group.is_empty() || group.len() > 4 || !group.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid(text, "groups must be 1 to 4 hex digits"));
    }
    u16::from_str_radix(group, 16).map_err(|_| invalid(text, "groups must be 1 to 4 hex digits"))
}
