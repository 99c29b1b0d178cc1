//! Per-frame simulation tick
//!
//! There is no fixed timestep: each call moves every mover one step, so
//! perceived speed follows the host frame rate.

use super::state::Simulation;
use super::world::TickReport;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Fire held: spawn one mover this tick
    pub fire: bool,
}

/// Advance the simulation by one tick
///
/// A fired mover is spawned before the update pass, so it is processed in
/// the same tick.
pub fn tick(sim: &mut Simulation, input: &TickInput) -> TickReport {
    if input.fire {
        sim.fire();
    }

    let report = sim.world.tick(&mut sim.targets, &mut sim.rng);
    sim.time_ticks += 1;

    for &index in &report.destroyed {
        log::info!(
            "Tick {}: target {} cleared, {} remaining",
            sim.time_ticks,
            index,
            sim.remaining_absorbing()
        );
    }

    report
}
