//! Widest-path (maximum bottleneck) queries.
//!
//! # Algorithm
//!
//! A Dijkstra variant over the CSR adjacency of [`MetroNetwork`]: instead of
//! minimizing a sum, it maximizes the smallest edge capacity seen along the
//! path.  The frontier is a max-heap keyed on the current bottleneck.
//!
//! `BinaryHeap` has no decrease-key, so a building may sit in the heap more
//! than once.  Entries whose bottleneck no longer matches the recorded best
//! are skipped when popped.  Once the destination is popped its value is
//! final and the search stops.
//!
//! # Passenger count
//!
//! The flow along the single best path is further capped by the occupants of
//! both endpoints.  Multiple disjoint paths are *not* combined.

use std::collections::BinaryHeap;

use log::trace;

use mcm_core::BuildingId;

use crate::network::MetroNetwork;

/// Maximum passengers that can move from `start` to `end` along one path.
///
/// - Unknown `start` or `end` → 0.
/// - `start == end` → that building's occupant count.
/// - No path with positive capacity → 0.
/// - Otherwise `min(bottleneck, occupants(start), occupants(end))`, never
///   below 0.
pub fn max_passengers(network: &MetroNetwork, start: BuildingId, end: BuildingId) -> i32 {
    let (Some(from), Some(to)) = (network.slot(start), network.slot(end)) else {
        trace!("max_passengers: unknown endpoint {start} or {end}");
        return 0;
    };
    let occupants_start = network.buildings()[from].occupants;
    if from == to {
        return occupants_start;
    }
    let occupants_end = network.buildings()[to].occupants;

    let widest = bottleneck(network, from, to);
    trace!("max_passengers: widest bottleneck {start} -> {end} is {widest}");
    if widest == 0 {
        return 0;
    }
    widest.min(occupants_start).min(occupants_end).max(0)
}

/// Raw widest-path bottleneck from `start` to `end`, ignoring occupants.
///
/// Returns `None` if either building is unknown or `end` is unreachable
/// through positive-capacity tracks.  `start == end` yields `i32::MAX`.
pub fn widest_bottleneck(network: &MetroNetwork, start: BuildingId, end: BuildingId) -> Option<i32> {
    let from = network.slot(start)?;
    let to = network.slot(end)?;
    if from == to {
        return Some(i32::MAX);
    }
    match bottleneck(network, from, to) {
        0 => None,
        b => Some(b),
    }
}

// ── Search internals ──────────────────────────────────────────────────────────

fn bottleneck(network: &MetroNetwork, from: usize, to: usize) -> i32 {
    // best[v] = widest bottleneck found so far from `from` to v.
    let mut best = vec![0i32; network.building_count()];
    best[from] = i32::MAX;

    // Max-heap: (bottleneck, slot).  Secondary key keeps pops deterministic.
    let mut heap: BinaryHeap<(i32, usize)> = BinaryHeap::new();
    heap.push((i32::MAX, from));

    while let Some((width, node)) = heap.pop() {
        // Skip stale heap entries.
        if width != best[node] {
            continue;
        }
        if node == to {
            break;
        }

        for edge in network.out_edges(node) {
            let next = network.edge_to[edge] as usize;
            let candidate = width.min(network.edge_capacity[edge]);
            if candidate > best[next] {
                best[next] = candidate;
                heap.push((candidate, next));
            }
        }
    }

    best[to]
}
