//! Static rectangular targets (bricks)

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_HIT_POINTS;

/// Target behavior on impact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetKind {
    /// Deflects movers, never changes
    Bouncing,
    /// Takes damage; once `hit_points` reaches zero it goes inactive for good
    Absorbing { hit_points: i32, active: bool },
}

impl TargetKind {
    /// Fresh absorbing state at full hit points
    pub fn absorbing() -> Self {
        TargetKind::Absorbing {
            hit_points: DEFAULT_HIT_POINTS,
            active: true,
        }
    }
}

/// An immobile square obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub pos: Vec2,
    /// Collision half-extent; the drawn square has side `width`
    pub width: f32,
    /// Render-only
    pub color: [f32; 3],
    kind: TargetKind,
}

impl Target {
    pub fn bouncing(x: f32, y: f32, width: f32, color: [f32; 3]) -> Self {
        Self {
            pos: Vec2::new(x, y),
            width,
            color,
            kind: TargetKind::Bouncing,
        }
    }

    pub fn absorbing(x: f32, y: f32, width: f32, color: [f32; 3]) -> Self {
        Self {
            pos: Vec2::new(x, y),
            width,
            color,
            kind: TargetKind::absorbing(),
        }
    }

    pub fn kind(&self) -> TargetKind {
        self.kind
    }

    /// Bouncing targets are always active
    pub fn is_active(&self) -> bool {
        match self.kind {
            TargetKind::Bouncing => true,
            TargetKind::Absorbing { active, .. } => active,
        }
    }

    /// `None` for bouncing targets
    pub fn hit_points(&self) -> Option<i32> {
        match self.kind {
            TargetKind::Bouncing => None,
            TargetKind::Absorbing { hit_points, .. } => Some(hit_points),
        }
    }

    /// Square footprint test, lower bound exclusive and upper bound inclusive
    pub fn overlaps(&self, point: Vec2) -> bool {
        let w = self.width;
        (point.x > self.pos.x - w && point.x <= self.pos.x + w)
            && (point.y > self.pos.y - w && point.y <= self.pos.y + w)
    }

    /// Whether an absorbing target can still take a hit
    pub(crate) fn can_absorb(&self) -> bool {
        matches!(
            self.kind,
            TargetKind::Absorbing { hit_points, active: true } if hit_points > 0
        )
    }

    /// Remove one hit point. Returns true if this hit deactivated the target.
    pub(crate) fn absorb_hit(&mut self) -> bool {
        match &mut self.kind {
            TargetKind::Absorbing { hit_points, active } => {
                debug_assert!(*active && *hit_points > 0, "hit on a depleted target");
                *hit_points -= 1;
                if *hit_points <= 0 {
                    *active = false;
                    true
                } else {
                    false
                }
            }
            TargetKind::Bouncing => false,
        }
    }
}
