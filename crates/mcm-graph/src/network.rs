//! Transit network snapshot and builder.
//!
//! # Data layout
//!
//! Buildings are stored densely in insertion order; a hash index maps each
//! `BuildingId` to its slot.  The raw track list is kept verbatim (including
//! tracks that reference unknown buildings) because the spanning selector
//! ranks tracks, not edges.
//!
//! For path queries the eligible tracks are also laid out in **Compressed
//! Sparse Row (CSR)** format by source slot.  Given slot `s`, its outgoing
//! edges occupy:
//!
//! ```text
//! edge_to[ out_start[s] .. out_start[s+1] ]
//! ```
//!
//! Edge capacities are stored already clamped to zero.  The snapshot is
//! never mutated after [`MetroNetworkBuilder::build`].

use log::{debug, trace};

use mcm_core::{Building, BuildingId, Track, TrackId};

use crate::{GraphError, GraphResult, IdMap};

// ── MetroNetwork ──────────────────────────────────────────────────────────────

/// Immutable snapshot of buildings and directed tracks.
///
/// Construct with [`MetroNetwork::new`] or [`MetroNetworkBuilder`].
pub struct MetroNetwork {
    // ── Buildings ─────────────────────────────────────────────────────────
    buildings: Vec<Building>,
    slots:     IdMap<BuildingId, usize>,

    /// Later copies of an id that was already present.  Kept only so that
    /// [`validate`](Self::validate) can report them.
    shadowed: Vec<Building>,

    // ── Tracks, as supplied ───────────────────────────────────────────────
    tracks: Vec<Track>,

    // ── CSR adjacency over eligible tracks ────────────────────────────────
    /// Length = `building_count + 1`.
    pub(crate) out_start:     Vec<u32>,
    pub(crate) edge_to:       Vec<u32>,
    pub(crate) edge_capacity: Vec<i32>,
    pub(crate) edge_track:    Vec<TrackId>,
}

impl MetroNetwork {
    /// Build a snapshot from raw tracks and buildings.
    ///
    /// Never fails: duplicate building ids keep their first occurrence and
    /// tracks touching unknown buildings are left out of every query.
    pub fn new<T, B>(tracks: T, buildings: B) -> Self
    where
        T: IntoIterator<Item = Track>,
        B: IntoIterator<Item = Building>,
    {
        let mut b = MetroNetworkBuilder::new();
        for building in buildings {
            b.add_building(building);
        }
        for track in tracks {
            b.add_track(track);
        }
        b.build()
    }

    /// A network with no buildings and no tracks.
    pub fn empty() -> Self {
        MetroNetworkBuilder::new().build()
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn building_count(&self) -> usize {
        self.buildings.len()
    }

    /// Number of tracks supplied, eligible or not.
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Number of directed edges usable by path queries.
    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    pub fn contains(&self, id: BuildingId) -> bool {
        self.slots.contains_key(&id)
    }

    pub fn building(&self, id: BuildingId) -> Option<&Building> {
        self.slot(id).map(|s| &self.buildings[s])
    }

    pub fn occupants(&self, id: BuildingId) -> Option<i32> {
        self.building(id).map(|b| b.occupants)
    }

    /// Buildings in first-insertion order.
    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    /// Tracks in the order they were supplied.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// `true` if both endpoints of `track` are known buildings.
    pub fn is_eligible(&self, track: &Track) -> bool {
        self.contains(track.start) && self.contains(track.end)
    }

    #[inline]
    pub(crate) fn slot(&self, id: BuildingId) -> Option<usize> {
        self.slots.get(&id).copied()
    }

    /// Edge indices of all outgoing edges from `slot`.
    #[inline]
    pub(crate) fn out_edges(&self, slot: usize) -> std::ops::Range<usize> {
        self.out_start[slot] as usize..self.out_start[slot + 1] as usize
    }

    /// Track ids leaving `id` that take part in path queries.
    pub fn outgoing_tracks(&self, id: BuildingId) -> Vec<TrackId> {
        match self.slot(id) {
            Some(s) => self.out_edges(s).map(|e| self.edge_track[e]).collect(),
            None => Vec::new(),
        }
    }

    // ── Strict validation ─────────────────────────────────────────────────

    /// Report the first input that the lenient queries would silently
    /// normalize or ignore.
    ///
    /// Checks, in order: duplicate building ids, duplicate track ids, tracks
    /// with an unknown endpoint, negative capacities, non-positive costs.
    pub fn validate(&self) -> GraphResult<()> {
        if let Some(b) = self.shadowed.first() {
            return Err(GraphError::DuplicateBuilding(b.id));
        }

        let mut seen: IdMap<TrackId, ()> = IdMap::default();
        for t in &self.tracks {
            if seen.insert(t.id, ()).is_some() {
                return Err(GraphError::DuplicateTrack(t.id));
            }
        }

        for t in &self.tracks {
            for building in [t.start, t.end] {
                if !self.contains(building) {
                    return Err(GraphError::DanglingTrack { track: t.id, building });
                }
            }
            if t.capacity < 0 {
                return Err(GraphError::NegativeCapacity { track: t.id, capacity: t.capacity });
            }
            if t.cost <= 0 {
                return Err(GraphError::NonPositiveCost { track: t.id, cost: t.cost });
            }
        }
        Ok(())
    }
}

// ── MetroNetworkBuilder ───────────────────────────────────────────────────────

/// Construct a [`MetroNetwork`] incrementally, then call [`build`](Self::build).
///
/// Buildings and tracks may be added in any order; tracks are only checked
/// against the building table at build time.
///
/// # Example
///
/// ```
/// use mcm_core::{Building, Track};
/// use mcm_graph::MetroNetworkBuilder;
///
/// let mut b = MetroNetworkBuilder::new();
/// b.add_building(Building::new(1, 50));
/// b.add_building(Building::new(2, 100));
/// b.add_track(Track::new(0, 1, 2, 1, 100));
/// b.add_track(Track::new(1, 2, 9, 1, 100)); // building 9 is unknown
/// let net = b.build();
/// assert_eq!(net.building_count(), 2);
/// assert_eq!(net.track_count(), 2);
/// assert_eq!(net.edge_count(), 1);
/// ```
pub struct MetroNetworkBuilder {
    buildings: Vec<Building>,
    slots:     IdMap<BuildingId, usize>,
    shadowed:  Vec<Building>,
    tracks:    Vec<Track>,
}

impl MetroNetworkBuilder {
    pub fn new() -> Self {
        Self {
            buildings: Vec::new(),
            slots:     IdMap::default(),
            shadowed:  Vec::new(),
            tracks:    Vec::new(),
        }
    }

    /// Pre-allocate for the expected number of buildings and tracks.
    pub fn with_capacity(buildings: usize, tracks: usize) -> Self {
        Self {
            buildings: Vec::with_capacity(buildings),
            slots:     IdMap::with_capacity_and_hasher(buildings, Default::default()),
            shadowed:  Vec::new(),
            tracks:    Vec::with_capacity(tracks),
        }
    }

    /// Add a building.  Returns `false` (and keeps the earlier record) if a
    /// building with the same id was already added.
    pub fn add_building(&mut self, building: Building) -> bool {
        if self.slots.contains_key(&building.id) {
            trace!("building {} already present; keeping first occurrence", building.id);
            self.shadowed.push(building);
            return false;
        }
        self.slots.insert(building.id, self.buildings.len());
        self.buildings.push(building);
        true
    }

    /// Add a **directed** track.
    pub fn add_track(&mut self, track: Track) {
        self.tracks.push(track);
    }

    pub fn building_count(&self) -> usize { self.buildings.len() }
    pub fn track_count(&self) -> usize { self.tracks.len() }

    /// Consume the builder and produce a [`MetroNetwork`].
    ///
    /// Time complexity: O(T log T) for the edge sort, T = tracks.
    pub fn build(self) -> MetroNetwork {
        let node_count = self.buildings.len();

        // Resolve eligible tracks to (from_slot, to_slot, capacity, id).
        let mut raw: Vec<(u32, u32, i32, TrackId)> = Vec::with_capacity(self.tracks.len());
        for t in &self.tracks {
            match (self.slots.get(&t.start), self.slots.get(&t.end)) {
                (Some(&from), Some(&to)) => {
                    raw.push((from as u32, to as u32, t.usable_capacity(), t.id));
                }
                _ => debug!("dropping track {} ({} -> {}): unknown endpoint", t.id, t.start, t.end),
            }
        }

        // Stable sort keeps supplied order among edges leaving the same slot.
        raw.sort_by_key(|e| e.0);

        let edge_to:       Vec<u32>     = raw.iter().map(|e| e.1).collect();
        let edge_capacity: Vec<i32>     = raw.iter().map(|e| e.2).collect();
        let edge_track:    Vec<TrackId> = raw.iter().map(|e| e.3).collect();

        let mut out_start = vec![0u32; node_count + 1];
        for e in &raw {
            out_start[e.0 as usize + 1] += 1;
        }
        for i in 1..=node_count {
            out_start[i] += out_start[i - 1];
        }
        debug_assert_eq!(out_start[node_count] as usize, raw.len());

        debug!(
            "built metro network: {} buildings, {} tracks, {} usable edges",
            node_count,
            self.tracks.len(),
            raw.len()
        );

        MetroNetwork {
            buildings: self.buildings,
            slots: self.slots,
            shadowed: self.shadowed,
            tracks: self.tracks,
            out_start,
            edge_to,
            edge_capacity,
            edge_track,
        }
    }
}

impl Default for MetroNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
