//! Tests for the McMetro coordinator.
//!
//! The fixtures build networks from compact bracket strings:
//!
//! - `max_passengers_builder("[1, 2, 100]")` — track `1 → 2` with capacity
//!   100 between buildings of unlimited population.
//! - `best_metro_builder("[1, 2, 10]", seed)` — track `1 → 2` whose goodness
//!   is (approximately) 10; costs, capacities and populations are drawn from
//!   a seeded RNG so that the requested goodness holds.
//! - `testing_schedule("[1,2][2,3]")` — a shift schedule.

#[cfg(test)]
mod fixtures {
    use std::collections::BTreeMap;

    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use mcm_core::{Building, BuildingId, Track, TrackId};

    use crate::{McMetro, Shift};

    /// Split `"[a, b, c][d, e, f]"` (brackets optional) into field groups.
    fn bracket_groups(input: &str) -> Vec<Vec<String>> {
        input
            .replace(' ', "")
            .replace('[', "")
            .split(']')
            .filter(|g| !g.is_empty())
            .map(|g| g.split(',').map(str::to_owned).collect())
            .collect()
    }

    pub fn max_passengers_builder(input: &str) -> McMetro {
        let mut buildings: BTreeMap<BuildingId, Building> = BTreeMap::new();
        let mut tracks = Vec::new();
        for (i, g) in bracket_groups(input).iter().enumerate() {
            let a: BuildingId = g[0].parse().unwrap();
            let b: BuildingId = g[1].parse().unwrap();
            let capacity: i32 = g[2].parse().unwrap();
            buildings.entry(a).or_insert(Building { id: a, occupants: i32::MAX });
            buildings.entry(b).or_insert(Building { id: b, occupants: i32::MAX });
            tracks.push(Track { id: TrackId(i as i32), start: a, end: b, cost: 1, capacity });
        }
        McMetro::new(tracks, buildings.into_values())
    }

    pub fn best_metro_builder(input: &str, seed: u64) -> McMetro {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut buildings: BTreeMap<BuildingId, Building> = BTreeMap::new();
        let mut tracks = Vec::new();

        for (i, g) in bracket_groups(input).iter().enumerate() {
            let id1: BuildingId = g[0].parse().unwrap();
            let id2: BuildingId = g[1].parse().unwrap();
            let goodness: i32 = g[2].parse().unwrap();

            let (b1, b2, cost, capacity) = match (buildings.get(&id1).copied(), buildings.get(&id2).copied()) {
                (Some(b1), Some(b2)) => {
                    let min_cap = b1.occupants.min(b2.occupants);
                    (b1, b2, min_cap / goodness, min_cap + rng.gen_range(0..50))
                }
                (Some(b1), None) => {
                    let min_cap = b1.occupants;
                    let capacity = min_cap + rng.gen_range(0..50);
                    let other = Building::new(id2, min_cap + rng.gen_range(0..50));
                    (b1, other, min_cap / goodness, capacity)
                }
                (None, Some(b2)) => {
                    let min_cap = b2.occupants;
                    let capacity = min_cap + rng.gen_range(0..50);
                    let other = Building::new(id1, min_cap + rng.gen_range(0..50));
                    (other, b2, min_cap / goodness, capacity)
                }
                (None, None) => {
                    let cost = rng.gen_range(10..50);
                    let governing = goodness * cost;
                    let mut caps = [0; 3];
                    for c in caps.iter_mut() {
                        *c = governing + rng.gen_range(0..50);
                    }
                    caps[rng.gen_range(0..3)] = governing;
                    (Building::new(id1, caps[0]), Building::new(id2, caps[1]), cost, caps[2])
                }
            };
            assert!(cost > 0, "fixture produced non-positive cost for {g:?}");

            tracks.push(Track { id: TrackId(i as i32), start: b1.id, end: b2.id, cost, capacity });
            buildings.entry(b1.id).or_insert(b1);
            buildings.entry(b2.id).or_insert(b2);
        }
        McMetro::new(tracks, buildings.into_values())
    }

    pub fn testing_schedule(input: &str) -> Vec<Shift> {
        bracket_groups(input)
            .iter()
            .map(|g| Shift::new(g[0].parse().unwrap(), g[1].parse().unwrap()))
            .collect()
    }

    pub fn check_passenger_search(passengers: &[&str], expected: &[&str], first_letters: &str) {
        let mut metro = best_metro_builder("1,2,1", 1);
        metro.add_passengers(passengers);
        assert_eq!(metro.search_for_passengers(first_letters), expected);
    }

    pub fn track_ids(ids: &[i32]) -> Vec<TrackId> {
        let mut v: Vec<TrackId> = ids.iter().map(|&i| TrackId(i)).collect();
        v.sort();
        v
    }

    pub fn sorted(mut v: Vec<TrackId>) -> Vec<TrackId> {
        v.sort();
        v
    }
}

// ── max_passengers ────────────────────────────────────────────────────────────

#[cfg(test)]
mod max_passengers {
    use mcm_core::{Building, BuildingId, Track};

    use super::fixtures::max_passengers_builder;
    use crate::McMetro;

    #[test]
    fn single_track() {
        let metro = max_passengers_builder("[1, 2, 100]");
        assert_eq!(metro.max_passengers(BuildingId(1), BuildingId(2)), 100);
    }

    #[test]
    fn population_caps_flow() {
        let metro = McMetro::new(
            [Track::new(0, 1, 2, 1, 100)],
            [Building::new(1, 50), Building::new(2, 100)],
        );
        assert_eq!(metro.max_passengers(BuildingId(1), BuildingId(2)), 50);
    }

    #[test]
    fn detour_beats_narrow_direct_track() {
        let metro = max_passengers_builder("[1, 2, 30][2, 3, 80][1, 3, 10]");
        assert_eq!(metro.max_passengers(BuildingId(1), BuildingId(3)), 30);
        assert_eq!(metro.max_passengers(BuildingId(3), BuildingId(1)), 0);
    }

    #[test]
    fn single_path_not_summed() {
        // Two disjoint routes of 40 each; only one is used.
        let metro = max_passengers_builder("[1, 2, 40][2, 4, 40][1, 3, 40][3, 4, 40]");
        assert_eq!(metro.max_passengers(BuildingId(1), BuildingId(4)), 40);
    }

    #[test]
    fn same_building_and_unknown() {
        let metro = McMetro::new(Vec::<Track>::new(), [Building::new(5, 12)]);
        assert_eq!(metro.max_passengers(BuildingId(5), BuildingId(5)), 12);
        assert_eq!(metro.max_passengers(BuildingId(6), BuildingId(6)), 0);
        assert_eq!(metro.max_passengers(BuildingId(5), BuildingId(6)), 0);
    }
}

// ── best_metro_system ─────────────────────────────────────────────────────────

#[cfg(test)]
mod best_metro_system {
    use mcm_core::{Building, Track};

    use super::fixtures::{best_metro_builder, sorted, track_ids};
    use crate::McMetro;

    #[test]
    fn single_track() {
        let metro = best_metro_builder("[1, 2, 10]", 123);
        assert_eq!(sorted(metro.best_metro_system()), track_ids(&[0]));
    }

    #[test]
    fn weak_track_in_cycle_left_out() {
        for seed in 0..20 {
            let metro = best_metro_builder("[1, 2, 10][2, 3, 10][1, 3, 1]", seed);
            assert_eq!(metro.best_metro_system(), track_ids(&[0, 1]), "seed {seed}");
        }
    }

    #[test]
    fn tree_keeps_every_track() {
        let metro = best_metro_builder("[1, 2, 10][2, 3, 8][3, 4, 6]", 99);
        assert_eq!(sorted(metro.best_metro_system()), track_ids(&[0, 1, 2]));
    }

    #[test]
    fn tied_goodness_broken_by_id() {
        let metro = McMetro::new(
            [
                Track::new(0, 1, 2, 10, 100),
                Track::new(1, 2, 3, 20, 100),
                Track::new(2, 1, 3, 20, 100),
            ],
            [Building::new(1, 100), Building::new(2, 100), Building::new(3, 100)],
        );
        assert_eq!(metro.best_metro_system(), track_ids(&[0, 1]));
    }

    #[test]
    fn repeated_queries_agree() {
        let metro = best_metro_builder("[1, 2, 10][2, 3, 10][1, 3, 1]", 4);
        assert_eq!(metro.best_metro_system(), metro.best_metro_system());
    }
}

// ── Passengers ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod passengers {
    use mcm_core::BuildingId;

    use super::fixtures::{check_passenger_search, max_passengers_builder};

    #[test]
    fn search_for_passengers() {
        check_passenger_search(&["Alex", "Bob", "Ally"], &["Alex", "Ally"], "Al");
    }

    #[test]
    fn search_ignores_case() {
        check_passenger_search(&["ALEX", "bob", "aLLy"], &["Alex", "Ally"], "aL");
        check_passenger_search(&["ALEX", "bob", "aLLy"], &["Bob"], "BO");
    }

    #[test]
    fn duplicates_and_blanks() {
        check_passenger_search(&["Alex", "alex", "  ", ""], &["Alex"], "");
    }

    #[test]
    fn no_match() {
        check_passenger_search(&["Alex"], &[], "Bo");
    }

    #[test]
    fn absent_prefix_matches_nobody() {
        let mut metro = max_passengers_builder("[1, 2, 100]");
        metro.add_passengers(["alex", "ALLY", "Bob"]);
        assert!(metro.search_opt(None).is_empty());
        assert_eq!(metro.search_opt(Some("al")), vec!["Alex", "Ally"]);
        assert_eq!(metro.passengers().len(), 3);
    }

    #[test]
    fn registry_does_not_affect_network() {
        let mut metro = max_passengers_builder("[1, 2, 100]");
        let before = metro.max_passengers(BuildingId(1), BuildingId(2));
        metro.add_passenger("Alex");
        metro.add_passengers(["Bob", "Cleo"]);
        assert_eq!(metro.max_passengers(BuildingId(1), BuildingId(2)), before);
        assert_eq!(metro.passengers().len(), 3);
    }
}

// ── Ticket checkers ───────────────────────────────────────────────────────────

#[cfg(test)]
mod ticket_checkers {
    use std::io::Write;

    use super::fixtures::testing_schedule;
    use crate::McMetro;

    #[test]
    fn hire_ticket_checkers() {
        assert_eq!(McMetro::hire_ticket_checkers(&testing_schedule("[1,2][2,3][3,4][1,3]")), 3);
    }

    #[test]
    fn disjoint_and_nested() {
        assert_eq!(McMetro::hire_ticket_checkers(&testing_schedule("[0,10][1,2][3,4]")), 2);
        assert_eq!(McMetro::hire_ticket_checkers(&testing_schedule("[5,6]")), 1);
        assert_eq!(McMetro::hire_ticket_checkers(&[]), 0);
    }

    #[test]
    fn from_csv_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"start,end\n1,2\n2,3\n3,4\n1,3\n").unwrap();
        assert_eq!(McMetro::hire_ticket_checkers_csv(file.path()).unwrap(), 3);
    }
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use std::io::Write;

    use mcm_core::{Building, BuildingId, Track};
    use mcm_graph::GraphError;

    use crate::{McMetro, MetroError};

    #[test]
    fn strict_accepts_clean_input() {
        let metro = McMetro::new_strict(
            [Track::new(0, 1, 2, 3, 10)],
            [Building::new(1, 5), Building::new(2, 5)],
        );
        assert!(metro.is_ok());
    }

    #[test]
    fn strict_rejects_dangling_track() {
        let metro = McMetro::new_strict(
            [Track::new(0, 1, 7, 3, 10)],
            [Building::new(1, 5), Building::new(2, 5)],
        );
        assert!(matches!(
            metro,
            Err(MetroError::Network(GraphError::DanglingTrack { building: BuildingId(7), .. }))
        ));
    }

    #[test]
    fn lenient_accepts_what_strict_rejects() {
        let metro = McMetro::new(
            [Track::new(0, 1, 7, 3, 10), Track::new(1, 1, 2, 0, -5)],
            [Building::new(1, 5), Building::new(2, 5), Building::new(1, 99)],
        );
        assert_eq!(metro.network().building_count(), 2);
        assert_eq!(metro.network().occupants(BuildingId(1)), Some(5));
        assert_eq!(metro.max_passengers(BuildingId(1), BuildingId(2)), 0);
    }

    #[test]
    fn load_from_csv_files() {
        let dir = tempfile::tempdir().unwrap();
        let b = dir.path().join("buildings.csv");
        let t = dir.path().join("tracks.csv");
        std::fs::File::create(&b)
            .unwrap()
            .write_all(b"building_id,occupants\n1,50\n2,100\n")
            .unwrap();
        std::fs::File::create(&t)
            .unwrap()
            .write_all(b"track_id,start,end,cost,capacity\n0,1,2,1,100\n")
            .unwrap();
        let metro = McMetro::load_csv(&b, &t).unwrap();
        assert_eq!(metro.max_passengers(BuildingId(1), BuildingId(2)), 50);
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.csv");
        assert!(matches!(
            McMetro::load_csv(&missing, &missing),
            Err(MetroError::Network(GraphError::Io(_)))
        ));
    }
}
