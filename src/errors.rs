//! Error types for address parsing and subnet planning.

use thiserror::Error;

/// Errors surfaced by the address codec, subnet engine and VLSM planner.
///
/// Every failure is returned as a value; nothing in the library panics on
/// malformed caller input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NetcalcError {
    /// Input text is not a valid address in the requested format.
    #[error("invalid address format: {0}")]
    InvalidAddressFormat(String),

    /// Prefix length outside the legal range for the address family.
    #[error("invalid prefix length: {0}")]
    InvalidPrefixLength(String),

    /// MAC address input did not reduce to 12 hex digits.
    #[error("invalid MAC address: {0}")]
    InvalidMac(String),

    /// A VLSM requirement cannot be placed inside the base network.
    #[error("allocation overflow: {0}")]
    AllocationOverflow(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NetcalcError>;
