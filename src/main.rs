//! Brick Bounce entry point
//!
//! Headless driver: fires movers on a schedule, ticks the simulation and
//! logs progress. A windowed host would call the same `tick` once per frame
//! and draw from `RenderSnapshot`.

use std::path::Path;

use brick_bounce::sim::{Simulation, TickInput, tick};
use brick_bounce::{RenderSnapshot, Settings};

fn main() {
    env_logger::init();
    log::info!("Brick Bounce (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(Path::new(&path)),
        None => Settings::default(),
    };

    let seed = settings.resolved_seed();
    log::info!("Simulation initialized with seed: {}", seed);
    let mut sim = Simulation::new(seed);

    let mut bounces = 0u64;
    let mut absorbs = 0u64;
    for t in 0..settings.max_ticks {
        let input = TickInput {
            fire: settings.fires_on(t, sim.world.len()),
        };
        let report = tick(&mut sim, &input);
        bounces += u64::from(report.bounces);
        absorbs += u64::from(report.absorbs);

        if settings.log_every > 0 && sim.time_ticks.is_multiple_of(settings.log_every) {
            log::info!(
                "Tick {}: {} movers, {} targets standing",
                sim.time_ticks,
                sim.world.len(),
                sim.remaining_absorbing()
            );
        }
    }

    log::info!(
        "Done after {} ticks: {} movers, {} bounces, {} hits, {} targets standing",
        sim.time_ticks,
        sim.world.len(),
        bounces,
        absorbs,
        sim.remaining_absorbing()
    );

    if settings.dump_snapshot {
        match serde_json::to_string_pretty(&RenderSnapshot::capture(&sim)) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Failed to encode snapshot: {}", e),
        }
    }
}
