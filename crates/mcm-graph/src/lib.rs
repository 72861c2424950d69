//! `mcm-graph` — transit network snapshot and the two graph engines.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                |
//! |-------------------|---------------------------------------------------------|
//! | [`network`]       | `MetroNetwork` (CSR snapshot), `MetroNetworkBuilder`    |
//! | [`disjoint_set`]  | `DisjointSet<T>` (union by rank, path compression)      |
//! | [`widest`]        | `max_passengers`, `widest_bottleneck`                   |
//! | [`spanning`]      | `best_metro_system`, `goodness`                         |
//! | [`loader`]        | CSV loaders for buildings and tracks                    |
//! | [`error`]         | `GraphError`, `GraphResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                      |
//! |-----------|-------------------------------------------------------------|
//! | `fx-hash` | Uses `rustc-hash` for id-keyed maps instead of SipHash.     |
//! | `serde`   | Derives `Serialize`/`Deserialize` on `mcm-core` types.      |

pub mod disjoint_set;
pub mod error;
pub mod loader;
pub mod network;
pub mod spanning;
pub mod widest;


pub use disjoint_set::DisjointSet;
pub use error::{GraphError, GraphResult};
pub use loader::{
    load_buildings_csv, load_buildings_reader, load_network_csv, load_network_reader,
    load_tracks_csv, load_tracks_reader,
};
pub use network::{MetroNetwork, MetroNetworkBuilder};
pub use spanning::{best_metro_system, goodness};
pub use widest::{max_passengers, widest_bottleneck};

/// Hash map used for id-keyed lookups.
#[cfg(feature = "fx-hash")]
pub(crate) type IdMap<K, V> = rustc_hash::FxHashMap<K, V>;

/// Hash map used for id-keyed lookups.
#[cfg(not(feature = "fx-hash"))]
pub(crate) type IdMap<K, V> = std::collections::HashMap<K, V>;
