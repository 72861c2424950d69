//! `mcm-core` — foundational types for the McMetro transit planner.
//!
//! This crate is a dependency of every other `mcm-*` crate.  It has no
//! `mcm-*` dependencies and only `thiserror` (plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`ids`]       | `BuildingId`, `TrackId`                                 |
//! | [`model`]     | `Building`, `Track`                                     |
//! | [`error`]     | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod model;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{BuildingId, TrackId};
pub use model::{Building, Track};
