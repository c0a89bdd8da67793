//! VLSM planning: partition one base network into minimally-sized,
//! non-overlapping subnets, one per host-count requirement.
//!
//! A plan is a single stateless pass. Requirements are placed largest
//! first on their natural binary boundaries; one requirement that does not
//! fit fails the whole plan and discards every placement already made.

use crate::errors::{NetcalcError, Result};
use crate::models::{
    cidr_mask, host_range, usable_hosts, Ipv4, VlsmAllocation, VlsmPlan, VlsmRequirement,
    MAX_LENGTH,
};
use std::net::Ipv4Addr;

/// Compute a VLSM plan for `requirements` inside `base`.
///
/// The returned plan is self-describing: on failure `success` is false,
/// `allocations` is empty and `error_message` names the requirement that
/// could not be placed.
pub fn plan_subnets(base: Ipv4, requirements: &[VlsmRequirement]) -> VlsmPlan {
    let total_hosts: u64 = requirements.iter().map(|r| r.hosts_required).sum();

    match place_all(base, requirements) {
        Ok(allocations) => {
            let allocated_hosts: u64 = allocations.iter().map(|a| a.hosts_allocated).sum();
            let utilization_percent = if allocated_hosts == 0 {
                0.0
            } else {
                total_hosts as f64 / allocated_hosts as f64 * 100.0
            };
            log::info!(
                "VLSM plan for {base}: {} subnets, {total_hosts}/{allocated_hosts} hosts used",
                allocations.len()
            );
            VlsmPlan {
                success: true,
                allocations,
                total_hosts,
                allocated_hosts,
                wasted_hosts: allocated_hosts - total_hosts,
                utilization_percent,
                error_message: None,
            }
        }
        Err(e) => {
            log::warn!("VLSM plan for {base} failed: {e}");
            VlsmPlan {
                success: false,
                allocations: Vec::new(),
                total_hosts,
                allocated_hosts: 0,
                wasted_hosts: 0,
                utilization_percent: 0.0,
                error_message: Some(e.to_string()),
            }
        }
    }
}

fn place_all(base: Ipv4, requirements: &[VlsmRequirement]) -> Result<Vec<VlsmAllocation>> {
    // Validates the base prefix up front.
    cidr_mask(base.mask)?;

    // Largest requirement first; the stable sort keeps input order on ties
    // so plans are deterministic.
    let mut sorted: Vec<&VlsmRequirement> = requirements.iter().collect();
    sorted.sort_by(|a, b| b.hosts_required.cmp(&a.hosts_required));

    let base_start = u64::from(u32::from(base.lo()));
    let base_end = base_start + (1u64 << (MAX_LENGTH - base.mask));

    let mut pointer = base_start;
    let mut allocations = Vec::with_capacity(sorted.len());

    for req in sorted {
        if req.hosts_required == 0 {
            return Err(NetcalcError::AllocationOverflow(format!(
                "requirement '{}' requests zero hosts",
                req.name
            )));
        }
        let prefix = fit_prefix(req.hosts_required).ok_or_else(|| {
            NetcalcError::AllocationOverflow(format!(
                "requirement '{}' ({} hosts) exceeds any IPv4 subnet",
                req.name, req.hosts_required
            ))
        })?;
        let block = 1u64 << (MAX_LENGTH - prefix);

        // Each block must start on its own natural binary boundary.
        let aligned = (pointer + block - 1) & !(block - 1);
        if aligned + block > base_end {
            return Err(NetcalcError::AllocationOverflow(format!(
                "requirement '{}' ({} hosts, needs a /{prefix}) does not fit in {base}",
                req.name, req.hosts_required
            )));
        }

        let network = Ipv4Addr::from(aligned as u32);
        let broadcast = Ipv4Addr::from((aligned + block - 1) as u32);
        let (first_host, last_host) = host_range(network, broadcast, prefix);
        let hosts_allocated = usable_hosts(prefix)?;

        log::debug!(
            "placed '{}' at {network}/{prefix} ({} of {hosts_allocated} hosts)",
            req.name,
            req.hosts_required
        );

        allocations.push(VlsmAllocation {
            id: req.id.clone(),
            name: req.name.clone(),
            cidr: Ipv4 {
                addr: network,
                mask: prefix,
            },
            prefix,
            network,
            broadcast,
            first_host,
            last_host,
            hosts_allocated,
            slack_hosts: hosts_allocated - req.hosts_required,
        });

        pointer = aligned + block;
    }

    Ok(allocations)
}

/// The longest prefix whose usable-host count covers `hosts`, i.e. the
/// smallest block that fits.
fn fit_prefix(hosts: u64) -> Option<u8> {
    (0..=MAX_LENGTH)
        .rev()
        .find(|&p| usable_hosts(p).map(|h| h >= hosts).unwrap_or(false))
}
