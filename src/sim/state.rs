//! Simulation state owned by the driver
//!
//! Targets live here, not in the world; movers borrow them during a tick.

use glam::Vec2;

use super::direction::{Direction, SimRng};
use super::layout::default_layout;
use super::mover::Mover;
use super::target::{Target, TargetKind};
use super::world::World;
use crate::consts::*;

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Seeded RNG for redirects and spawn colors
    pub rng: SimRng,
    /// Targets in check order
    pub targets: Vec<Target>,
    /// Spawned movers
    pub world: World,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl Simulation {
    /// Default arena with the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_targets(seed, default_layout())
    }

    pub fn with_targets(seed: u64, targets: Vec<Target>) -> Self {
        Self {
            rng: SimRng::new(seed),
            targets,
            world: World::new(),
            time_ticks: 0,
        }
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Spawn a mover at the launcher, heading down, with a random color
    pub fn fire(&mut self) {
        let color = self.rng.next_color();
        self.spawn_mover(SPAWN_ORIGIN, SPAWN_RADIUS, Direction::Down, color);
    }

    /// Spawn a mover from an external fire event
    pub fn spawn_mover(
        &mut self,
        origin: Vec2,
        radius: f32,
        direction: Direction,
        color: [f32; 3],
    ) {
        self.world.spawn(Mover::new(origin, radius, direction, color));
        log::debug!(
            "Spawned mover #{} at {:?} heading {:?}",
            self.world.len(),
            origin,
            direction
        );
    }

    /// Absorbing targets still standing
    pub fn remaining_absorbing(&self) -> usize {
        self.targets
            .iter()
            .filter(|t| matches!(t.kind(), TargetKind::Absorbing { active: true, .. }))
            .count()
    }
}
