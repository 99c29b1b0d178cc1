//! The mover collection and its per-tick update pass

use serde::{Deserialize, Serialize};

use super::direction::DirectionSource;
use super::mover::{CollisionOutcome, Mover};
use super::target::Target;

/// What happened during one world tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Movers processed
    pub movers: usize,
    pub bounces: u32,
    pub absorbs: u32,
    /// Redraws caused by the play-field edge
    pub edge_redirects: u32,
    /// Target indices that went inactive, in the order they fell
    pub destroyed: Vec<usize>,
}

/// Movers in spawn order. Movers are never removed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct World {
    movers: Vec<Mover>,
}

impl World {
    pub fn new() -> Self {
        Self { movers: Vec::new() }
    }

    /// Append a mover; it is processed from the next tick on
    pub fn spawn(&mut self, mover: Mover) {
        self.movers.push(mover);
    }

    pub fn len(&self) -> usize {
        self.movers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movers.is_empty()
    }

    pub fn movers(&self) -> &[Mover] {
        &self.movers
    }

    #[cfg(test)]
    pub(crate) fn movers_mut(&mut self) -> &mut [Mover] {
        &mut self.movers
    }

    /// Run one update pass
    ///
    /// Each mover, in spawn order, is checked against every target in order
    /// and then stepped once before the next mover is touched.
    pub fn tick(
        &mut self,
        targets: &mut [Target],
        directions: &mut impl DirectionSource,
    ) -> TickReport {
        let mut report = TickReport {
            movers: self.movers.len(),
            ..Default::default()
        };

        for mover in &mut self.movers {
            for (index, target) in targets.iter_mut().enumerate() {
                match mover.check_collision(target, directions) {
                    CollisionOutcome::Miss => {}
                    CollisionOutcome::Bounced => report.bounces += 1,
                    CollisionOutcome::Absorbed { .. } => report.absorbs += 1,
                    CollisionOutcome::Destroyed => {
                        report.absorbs += 1;
                        report.destroyed.push(index);
                        log::debug!("Target {} destroyed at {:?}", index, target.pos);
                    }
                }
            }
            if mover.move_one_step(directions) {
                report.edge_redirects += 1;
            }
        }

        report
    }
}
