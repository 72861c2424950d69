//! CSV network loader.
//!
//! # CSV formats
//!
//! Buildings, one row each:
//!
//! ```csv
//! building_id,occupants
//! 1,50
//! 2,100
//! ```
//!
//! Tracks, one row each (directed `start → end`):
//!
//! ```csv
//! track_id,start,end,cost,capacity
//! 0,1,2,4,100
//! 1,2,1,4,80
//! ```
//!
//! Rows are taken as-is.  Duplicate ids, dangling endpoints and odd costs
//! or capacities are accepted here and handled by the network the same way
//! as programmatic input; call [`MetroNetwork::validate`] to reject them.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use mcm_core::{Building, BuildingId, Track, TrackId};

use crate::{GraphError, MetroNetwork, MetroNetworkBuilder};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct BuildingRecord {
    building_id: i32,
    occupants:   i32,
}

#[derive(Deserialize)]
struct TrackRecord {
    track_id: i32,
    start:    i32,
    end:      i32,
    cost:     i32,
    capacity: i32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load buildings from a CSV file.
pub fn load_buildings_csv(path: &Path) -> Result<Vec<Building>, GraphError> {
    let file = std::fs::File::open(path).map_err(GraphError::Io)?;
    load_buildings_reader(file)
}

/// Like [`load_buildings_csv`] but accepts any `Read` source.
pub fn load_buildings_reader<R: Read>(reader: R) -> Result<Vec<Building>, GraphError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    csv_reader
        .deserialize::<BuildingRecord>()
        .map(|row| {
            let row = row.map_err(|e| GraphError::Parse(e.to_string()))?;
            Ok(Building { id: BuildingId(row.building_id), occupants: row.occupants })
        })
        .collect()
}

/// Load tracks from a CSV file.
pub fn load_tracks_csv(path: &Path) -> Result<Vec<Track>, GraphError> {
    let file = std::fs::File::open(path).map_err(GraphError::Io)?;
    load_tracks_reader(file)
}

/// Like [`load_tracks_csv`] but accepts any `Read` source.
pub fn load_tracks_reader<R: Read>(reader: R) -> Result<Vec<Track>, GraphError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    csv_reader
        .deserialize::<TrackRecord>()
        .map(|row| {
            let row = row.map_err(|e| GraphError::Parse(e.to_string()))?;
            Ok(Track {
                id:       TrackId(row.track_id),
                start:    BuildingId(row.start),
                end:      BuildingId(row.end),
                cost:     row.cost,
                capacity: row.capacity,
            })
        })
        .collect()
}

/// Load a whole network from a buildings CSV and a tracks CSV.
pub fn load_network_csv(buildings: &Path, tracks: &Path) -> Result<MetroNetwork, GraphError> {
    let b = std::fs::File::open(buildings).map_err(GraphError::Io)?;
    let t = std::fs::File::open(tracks).map_err(GraphError::Io)?;
    load_network_reader(b, t)
}

/// Like [`load_network_csv`] but accepts any `Read` sources.
pub fn load_network_reader<B: Read, T: Read>(
    buildings: B,
    tracks: T,
) -> Result<MetroNetwork, GraphError> {
    let buildings = load_buildings_reader(buildings)?;
    let tracks = load_tracks_reader(tracks)?;

    let mut builder = MetroNetworkBuilder::with_capacity(buildings.len(), tracks.len());
    for b in buildings {
        builder.add_building(b);
    }
    for t in tracks {
        builder.add_track(t);
    }
    Ok(builder.build())
}
