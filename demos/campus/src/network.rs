//! Built-in campus network used when no CSV files are given.
//!
//! Six buildings around a small campus, joined by one-way tracks.  The
//! library → dorms corridor has a narrow direct track and a wider detour
//! through the gym, so `max_passengers` picks the detour.

use mcm_core::{Building, BuildingId, Track};
use mcm_graph::{MetroNetwork, MetroNetworkBuilder};

pub const LIBRARY:   BuildingId = BuildingId(1);
pub const DORMS:     BuildingId = BuildingId(2);
pub const GYM:       BuildingId = BuildingId(3);
pub const LABS:      BuildingId = BuildingId(4);
pub const CAFETERIA: BuildingId = BuildingId(5);
pub const STADIUM:   BuildingId = BuildingId(6);

/// Build the campus network.
pub fn build_network() -> MetroNetwork {
    let mut b = MetroNetworkBuilder::with_capacity(6, 9);

    b.add_building(Building::new(LIBRARY,     800));
    b.add_building(Building::new(DORMS,     2_400));
    b.add_building(Building::new(GYM,         600));
    b.add_building(Building::new(LABS,        450));
    b.add_building(Building::new(CAFETERIA,   900));
    b.add_building(Building::new(STADIUM,   5_000));

    //                 id  start      end        cost  capacity
    b.add_track(Track::new(0, LIBRARY,   DORMS,     12,   150));
    b.add_track(Track::new(1, LIBRARY,   GYM,        8,   500));
    b.add_track(Track::new(2, GYM,       DORMS,      6,   420));
    b.add_track(Track::new(3, DORMS,     CAFETERIA,  4,   700));
    b.add_track(Track::new(4, CAFETERIA, LABS,       9,   300));
    b.add_track(Track::new(5, LABS,      LIBRARY,   10,   350));
    b.add_track(Track::new(6, GYM,       STADIUM,   20, 1_000));
    b.add_track(Track::new(7, STADIUM,   CAFETERIA, 25,   800));
    b.add_track(Track::new(8, CAFETERIA, GYM,        5,   250));

    b.build()
}
