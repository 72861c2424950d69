//! Goodness-ranked spanning selection.
//!
//! Each eligible track gets a *goodness* score: how many people it could
//! carry (limited by both endpoint populations and its own capacity) per
//! unit of construction cost.  Tracks are then fed, best first, through a
//! Kruskal pass over a [`DisjointSet`] of buildings, treating every track as
//! undirected.  The result is a spanning forest of at most `n - 1` tracks.

use log::debug;

use mcm_core::{Track, TrackId};

use crate::disjoint_set::DisjointSet;
use crate::network::MetroNetwork;

/// Goodness of `track` within `network`.
///
/// `floor(min(occupants(start), occupants(end), max(capacity, 0)) / cost)`
/// for positive cost; `i32::MAX` when `cost <= 0` (free track).  Returns
/// `None` if either endpoint is not a known building.
pub fn goodness(network: &MetroNetwork, track: &Track) -> Option<i32> {
    let occupants_start = network.occupants(track.start)?;
    let occupants_end = network.occupants(track.end)?;
    if track.cost <= 0 {
        return Some(i32::MAX);
    }
    let carried = occupants_start.min(occupants_end).min(track.usable_capacity());
    Some(carried.div_euclid(track.cost))
}

/// Choose the tracks that connect every building with the highest total
/// goodness.
///
/// Tracks are ranked by descending goodness, ties by ascending `TrackId`.
/// The returned ids are in selection order.  Networks with fewer than two
/// buildings yield an empty selection.
pub fn best_metro_system(network: &MetroNetwork) -> Vec<TrackId> {
    let n = network.building_count();
    if n <= 1 {
        return Vec::new();
    }

    let mut ranked: Vec<(i32, &Track)> = network
        .tracks()
        .iter()
        .filter(|t| !t.is_loop())
        .filter_map(|t| goodness(network, t).map(|g| (g, t)))
        .collect();
    ranked.sort_by(|(ga, ta), (gb, tb)| gb.cmp(ga).then_with(|| ta.id.cmp(&tb.id)));

    let mut sets = DisjointSet::with_capacity(n);
    for b in network.buildings() {
        sets.add(b.id);
    }

    let target = n - 1;
    let mut chosen = Vec::with_capacity(target);
    for (_, track) in ranked {
        if sets.union(track.start, track.end) {
            chosen.push(track.id);
            if chosen.len() == target {
                break;
            }
        }
    }

    debug!(
        "best_metro_system: chose {} of {} tracks, {} component(s) remain",
        chosen.len(),
        network.track_count(),
        sets.set_count()
    );
    chosen
}
