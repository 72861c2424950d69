//! The [`McMetro`] coordinator.

use std::path::Path;

use log::debug;

use mcm_core::{Building, BuildingId, Track, TrackId};
use mcm_graph::{best_metro_system, load_network_csv, max_passengers, MetroNetwork};
use mcm_registry::PassengerRegistry;
use mcm_schedule::{hire_ticket_checkers, load_shifts_csv, Shift};

use crate::MetroResult;

/// Owns the network snapshot and the passenger registry.
///
/// Path and network queries borrow `&self`; registering passengers needs
/// `&mut self`.  Several threads may query a shared `&McMetro` at once.
pub struct McMetro {
    network:    MetroNetwork,
    passengers: PassengerRegistry,
}

impl McMetro {
    /// Snapshot `tracks` and `buildings`.
    ///
    /// Lenient: the first of any duplicate building ids wins and tracks that
    /// reference unknown buildings are ignored by every query.
    pub fn new<T, B>(tracks: T, buildings: B) -> Self
    where
        T: IntoIterator<Item = Track>,
        B: IntoIterator<Item = Building>,
    {
        Self::from_network(MetroNetwork::new(tracks, buildings))
    }

    /// Like [`new`](Self::new) but rejects input the lenient constructor
    /// would silently normalize (see [`MetroNetwork::validate`]).
    pub fn new_strict<T, B>(tracks: T, buildings: B) -> MetroResult<Self>
    where
        T: IntoIterator<Item = Track>,
        B: IntoIterator<Item = Building>,
    {
        let network = MetroNetwork::new(tracks, buildings);
        network.validate()?;
        Ok(Self::from_network(network))
    }

    /// Wrap an already-built network with an empty passenger registry.
    pub fn from_network(network: MetroNetwork) -> Self {
        Self { network, passengers: PassengerRegistry::new() }
    }

    /// Load buildings and tracks from CSV files (see `mcm_graph::loader`).
    pub fn load_csv(buildings: &Path, tracks: &Path) -> MetroResult<Self> {
        let network = load_network_csv(buildings, tracks)?;
        debug!(
            "loaded {} buildings and {} tracks from {} / {}",
            network.building_count(),
            network.track_count(),
            buildings.display(),
            tracks.display()
        );
        Ok(Self::from_network(network))
    }

    pub fn network(&self) -> &MetroNetwork {
        &self.network
    }

    pub fn passengers(&self) -> &PassengerRegistry {
        &self.passengers
    }

    // ── Network queries ───────────────────────────────────────────────────

    /// Maximum passengers from `start` to `end` along the single widest path.
    pub fn max_passengers(&self, start: BuildingId, end: BuildingId) -> i32 {
        max_passengers(&self.network, start, end)
    }

    /// Track ids forming the goodness-maximizing spanning selection, in the
    /// order they were chosen.
    pub fn best_metro_system(&self) -> Vec<TrackId> {
        best_metro_system(&self.network)
    }

    // ── Passengers ────────────────────────────────────────────────────────

    pub fn add_passenger(&mut self, name: &str) {
        self.passengers.add_passenger(name);
    }

    pub fn add_passengers<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.passengers.add_passengers(names);
    }

    /// Registered passengers whose names start with `first_letters`,
    /// case-insensitively, sorted ascending.
    pub fn search_for_passengers(&self, first_letters: &str) -> Vec<String> {
        self.passengers.search_for_passengers(first_letters)
    }

    /// [`search_for_passengers`](Self::search_for_passengers) for a prefix
    /// that may be absent; `None` matches nobody.
    pub fn search_opt(&self, first_letters: Option<&str>) -> Vec<String> {
        self.passengers.search_opt(first_letters)
    }

    // ── Crew sizing ───────────────────────────────────────────────────────

    /// Ticket checkers to hire for `schedule`: the largest number of shifts
    /// that do not overlap.
    pub fn hire_ticket_checkers(schedule: &[Shift]) -> usize {
        hire_ticket_checkers(schedule)
    }

    /// [`hire_ticket_checkers`](Self::hire_ticket_checkers) over a shift CSV
    /// file (`start,end` rows).
    pub fn hire_ticket_checkers_csv(path: &Path) -> MetroResult<usize> {
        let schedule = load_shifts_csv(path)?;
        Ok(hire_ticket_checkers(&schedule))
    }
}
