//! Output formatting for result records.
//!
//! This module handles rendering result records for callers:
//! - [`csv`] - Property,Value CSV tables
//! - [`json`] - pretty-printed JSON
//! - [`terminal`] - colored terminal tables

mod csv;
mod json;
mod terminal;

pub use csv::{
    escape_csv_field, eui64_report_csv, ipv4_report_csv, ipv6_report_csv, vlsm_plan_csv,
};
pub use json::to_json;
pub use terminal::{
    format_field, print_eui64_report, print_ipv4_report, print_ipv6_report, print_vlsm_plan,
};
