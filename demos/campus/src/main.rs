//! campus — runs every McMetro query against a small campus network.
//!
//! ```text
//! campus [BUILDINGS_CSV TRACKS_CSV [SHIFTS_CSV]]
//! ```
//!
//! Without arguments the built-in network and schedule are used.  Set
//! `RUST_LOG=debug` to see loader and engine diagnostics.

mod network;

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use log::info;

use mcm_graph::{goodness, load_network_csv};
use mcm_metro::McMetro;
use mcm_schedule::{load_shifts_csv, load_shifts_reader, peak_concurrency, select_non_overlapping};

use network::{build_network, CAFETERIA, DORMS, LIBRARY, STADIUM};

// ── Embedded data ─────────────────────────────────────────────────────────────

const PASSENGERS: [&str; 8] = [
    "alex", "Ally", "BOB", "bobby", "Carmen", "  dana ", "alex", "",
];

// Ticket checker shifts, hours since midnight.
const SHIFTS_CSV: &str = "\
start,end\n\
6,10\n\
7,9\n\
9,12\n\
10,14\n\
12,13\n\
13,18\n\
15,17\n\
17,22\n\
";

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    // 1. Network.
    let network = match args.as_slice() {
        [] => build_network(),
        [b, t, ..] => load_network_csv(Path::new(b), Path::new(t))
            .with_context(|| format!("loading network from {b} and {t}"))?,
        [_] => bail!("usage: campus [BUILDINGS_CSV TRACKS_CSV [SHIFTS_CSV]]"),
    };
    info!(
        "network: {} buildings, {} tracks ({} usable)",
        network.building_count(),
        network.track_count(),
        network.edge_count()
    );

    // 2. Shift schedule.
    let shifts = match args.get(2) {
        Some(path) => load_shifts_csv(Path::new(path))
            .with_context(|| format!("loading shifts from {path}"))?,
        None => load_shifts_reader(Cursor::new(SHIFTS_CSV))?,
    };

    let mut metro = McMetro::from_network(network);
    let t0 = Instant::now();

    println!("=== campus — McMetro planner ===");
    println!(
        "Buildings: {}  |  Tracks: {}  |  Shifts: {}",
        metro.network().building_count(),
        metro.network().track_count(),
        shifts.len()
    );
    println!();

    // 3. Widest paths.
    if args.is_empty() {
        println!("{:<12} {:<12} {:>10}", "From", "To", "Passengers");
        println!("{}", "-".repeat(36));
        for (from, to) in [(LIBRARY, DORMS), (DORMS, STADIUM), (STADIUM, LIBRARY), (CAFETERIA, CAFETERIA)] {
            println!(
                "{:<12} {:<12} {:>10}",
                from.to_string(),
                to.to_string(),
                metro.max_passengers(from, to)
            );
        }
        println!();
    }

    // 4. Best metro system.
    let chosen = metro.best_metro_system();
    println!("Best metro system: {} tracks", chosen.len());
    for id in &chosen {
        if let Some(track) = metro.network().tracks().iter().find(|t| t.id == *id) {
            let g = goodness(metro.network(), track).unwrap_or_default();
            println!("  {}  {} → {}  goodness {}", track.id, track.start, track.end, g);
        }
    }
    println!();

    // 5. Passengers.
    metro.add_passengers(PASSENGERS);
    println!("Registered passengers: {}", metro.passengers().len());
    for prefix in ["al", "BO", "z", ""] {
        println!("  {prefix:?} → {:?}", metro.search_for_passengers(prefix));
    }
    println!();

    // 6. Ticket checkers.
    let hired = McMetro::hire_ticket_checkers(&shifts);
    println!("Ticket checkers hired: {hired}");
    for shift in select_non_overlapping(&shifts) {
        println!("  {:>2}:00 – {:>2}:00", shift.start, shift.end);
    }
    println!("Peak simultaneous shifts: {}", peak_concurrency(&shifts));
    println!();

    println!("All queries answered in {:.3} ms", t0.elapsed().as_secs_f64() * 1e3);
    Ok(())
}
