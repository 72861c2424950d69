//! `mcm-metro` — one object answering every McMetro query.
//!
//! # Queries
//!
//! ```text
//! McMetro
//!   ├── max_passengers(a, b)      widest single path, capped by populations
//!   ├── best_metro_system()       goodness-ranked spanning selection
//!   ├── add_passenger(s)          append-only name registry
//!   ├── search_for_passengers(p)  case-insensitive prefix search
//!   └── hire_ticket_checkers(s)   greedy non-overlapping shift count
//! ```
//!
//! The network snapshot is fixed at construction; every query is computed
//! from scratch against it.  Only the passenger registry changes over time,
//! and only by growing.
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `fx-hash` | FxHash for the graph crate's id-keyed maps.              |
//! | `serde`   | Serde derives on ids, buildings, tracks and shifts.      |
//!
//! # Quick-start
//!
//! ```
//! use mcm_core::{Building, BuildingId, Track};
//! use mcm_metro::McMetro;
//!
//! let metro = McMetro::new(
//!     [Track::new(0, 1, 2, 1, 100)],
//!     [Building::new(1, 50), Building::new(2, 100)],
//! );
//! assert_eq!(metro.max_passengers(BuildingId(1), BuildingId(2)), 50);
//! ```

pub mod error;
pub mod metro;

#[cfg(test)]
mod tests;

pub use error::{MetroError, MetroResult};
pub use metro::McMetro;

pub use mcm_schedule::Shift;
