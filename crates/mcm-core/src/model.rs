//! Building and track records.
//!
//! These are plain value types supplied by the caller.  Nothing here is
//! validated: occupant counts may be negative, costs may be zero, and
//! capacities may be negative.  Consumers decide how to interpret such
//! values (the graph engines clamp capacity to zero, for example) and the
//! stored record is never rewritten.

use std::cmp::Ordering;

use crate::{BuildingId, TrackId};

// ── Building ──────────────────────────────────────────────────────────────────

/// A building and the number of people living or working in it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Building {
    pub id:        BuildingId,
    pub occupants: i32,
}

impl Building {
    pub fn new(id: impl Into<BuildingId>, occupants: i32) -> Self {
        Self { id: id.into(), occupants }
    }
}

/// Buildings order by id; occupants only break ties so `Ord` agrees with `Eq`.
impl PartialOrd for Building {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Building {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id).then_with(|| self.occupants.cmp(&other.occupants))
    }
}

// ── Track ─────────────────────────────────────────────────────────────────────

/// A directed track `start → end` with a construction cost and a passenger
/// capacity.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Track {
    pub id:       TrackId,
    pub start:    BuildingId,
    pub end:      BuildingId,
    pub cost:     i32,
    pub capacity: i32,
}

impl Track {
    pub fn new(
        id: impl Into<TrackId>,
        start: impl Into<BuildingId>,
        end: impl Into<BuildingId>,
        cost: i32,
        capacity: i32,
    ) -> Self {
        Self {
            id:    id.into(),
            start: start.into(),
            end:   end.into(),
            cost,
            capacity,
        }
    }

    /// Capacity usable for flow: negative inputs count as zero.
    #[inline]
    pub fn usable_capacity(&self) -> i32 {
        self.capacity.max(0)
    }

    /// `true` if the track starts and ends at the same building.
    pub fn is_loop(&self) -> bool {
        self.start == self.end
    }
}

/// Tracks order by id first; the remaining fields only break ties so that
/// `Ord` stays consistent with `Eq`.
impl PartialOrd for Track {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Track {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id
            .cmp(&other.id)
            .then_with(|| (self.start, self.end, self.cost, self.capacity)
                .cmp(&(other.start, other.end, other.cost, other.capacity)))
    }
}
