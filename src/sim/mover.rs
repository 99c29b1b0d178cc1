//! Circular movers (balls): collision response and stepping

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::direction::{Direction, DirectionSource};
use super::target::{Target, TargetKind};
use crate::consts::*;

/// What a single collision check did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionOutcome {
    /// No response (no overlap, or the target can't take hits)
    Miss,
    /// Deflected by a bouncing target
    Bounced,
    /// Absorbing target took a hit and is still standing
    Absorbed { remaining: i32 },
    /// Absorbing target took its last hit
    Destroyed,
}

impl CollisionOutcome {
    pub fn is_hit(self) -> bool {
        self != CollisionOutcome::Miss
    }
}

/// A moving ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mover {
    pub pos: Vec2,
    pub radius: f32,
    /// Distance per tick on each active axis
    pub speed: f32,
    pub direction: Direction,
    /// Render-only
    pub color: [f32; 3],
    /// Never decremented
    pub health: i32,
    pub active: bool,
}

impl Mover {
    pub fn new(pos: Vec2, radius: f32, direction: Direction, color: [f32; 3]) -> Self {
        Self {
            pos,
            radius,
            speed: MOVER_SPEED,
            direction,
            color,
            health: MOVER_HEALTH,
            active: true,
        }
    }

    /// Lowest legal coordinate on either axis
    #[inline]
    pub fn min_coord(&self) -> f32 {
        -FIELD_EXTENT + self.radius
    }

    /// Highest legal coordinate on either axis
    #[inline]
    pub fn max_coord(&self) -> f32 {
        FIELD_EXTENT - self.radius
    }

    pub fn in_bounds(&self) -> bool {
        let (lo, hi) = (self.min_coord(), self.max_coord());
        (lo..=hi).contains(&self.pos.x) && (lo..=hi).contains(&self.pos.y)
    }

    /// Test this mover against one target and apply the response
    ///
    /// Bouncing targets redirect on every overlapping check. Absorbing targets
    /// only respond while active with hit points left, and only to active
    /// movers. Any response redraws the direction and nudges the position.
    pub fn check_collision(
        &mut self,
        target: &mut Target,
        directions: &mut impl DirectionSource,
    ) -> CollisionOutcome {
        let outcome = match target.kind() {
            TargetKind::Bouncing => {
                if !target.overlaps(self.pos) {
                    return CollisionOutcome::Miss;
                }
                CollisionOutcome::Bounced
            }
            TargetKind::Absorbing { .. } => {
                if !(target.can_absorb() && self.active && target.overlaps(self.pos)) {
                    return CollisionOutcome::Miss;
                }
                if target.absorb_hit() {
                    CollisionOutcome::Destroyed
                } else {
                    CollisionOutcome::Absorbed {
                        remaining: target.hit_points().unwrap_or(0),
                    }
                }
            }
        };

        self.direction = directions.next_direction();
        self.pos += COLLISION_NUDGE;
        outcome
    }

    /// Advance one tick along the current direction
    ///
    /// Axis groups are taken from the direction held at the start of the
    /// step. An axis whose move would reach or pass the play-field edge does
    /// not move; the whole direction is redrawn instead. Returns true if any
    /// redraw happened.
    pub fn move_one_step(&mut self, directions: &mut impl DirectionSource) -> bool {
        let heading = self.direction;
        let (lo, hi) = (self.min_coord(), self.max_coord());
        let started_in_bounds = self.in_bounds();
        let mut redirected = false;

        if heading.moves_up() {
            let next = self.pos.y - self.speed;
            if next > lo {
                self.pos.y = next;
            } else {
                self.direction = directions.next_direction();
                redirected = true;
            }
        }

        if heading.moves_right() {
            let next = self.pos.x + self.speed;
            if next < hi {
                self.pos.x = next;
            } else {
                self.direction = directions.next_direction();
                redirected = true;
            }
        }

        if heading.moves_down() {
            let next = self.pos.y + self.speed;
            if next < hi {
                self.pos.y = next;
            } else {
                self.direction = directions.next_direction();
                redirected = true;
            }
        }

        if heading.moves_left() {
            let next = self.pos.x - self.speed;
            if next > lo {
                self.pos.x = next;
            } else {
                self.direction = directions.next_direction();
                redirected = true;
            }
        }

        debug_assert!(
            !started_in_bounds || self.in_bounds(),
            "mover stepped out of the play field: {:?}",
            self.pos
        );
        redirected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::direction::ScriptedDirections;

    const EPS: f32 = 1e-6;

    fn ball_at(x: f32, y: f32, direction: Direction) -> Mover {
        Mover::new(Vec2::new(x, y), SPAWN_RADIUS, direction, [1.0; 3])
    }

    #[test]
    fn test_free_step_moves_each_axis() {
        let mut dirs = ScriptedDirections::repeat(Direction::Up);
        let mut m = ball_at(0.0, 0.0, Direction::DownLeft);
        assert!(!m.move_one_step(&mut dirs));
        assert!((m.pos.x + MOVER_SPEED).abs() < EPS);
        assert!((m.pos.y - MOVER_SPEED).abs() < EPS);
        assert_eq!(m.direction, Direction::DownLeft);
        assert_eq!(dirs.draws(), 0);
    }

    #[test]
    fn test_up_decreases_y() {
        let mut dirs = ScriptedDirections::repeat(Direction::Up);
        let mut m = ball_at(0.0, 0.0, Direction::Up);
        m.move_one_step(&mut dirs);
        assert!((m.pos.y + MOVER_SPEED).abs() < EPS);
        assert_eq!(m.pos.x, 0.0);
    }

    #[test]
    fn test_right_boundary_blocks_and_redraws() {
        let mut dirs = ScriptedDirections::repeat(Direction::DownLeft);
        let mut m = ball_at(0.0, 0.0, Direction::Right);
        m.pos.x = m.max_coord();
        let x_before = m.pos.x;

        assert!(m.move_one_step(&mut dirs));
        assert_eq!(m.pos.x, x_before);
        assert_eq!(m.pos.y, 0.0);
        assert_eq!(m.direction, Direction::DownLeft);
        assert_eq!(dirs.draws(), 1);
    }

    #[test]
    fn test_left_boundary_blocks_and_redraws() {
        let mut dirs = ScriptedDirections::repeat(Direction::Right);
        let mut m = ball_at(0.0, 0.0, Direction::Left);
        m.pos.x = m.min_coord();
        let x_before = m.pos.x;

        assert!(m.move_one_step(&mut dirs));
        assert_eq!(m.pos.x, x_before);
        assert_eq!(m.direction, Direction::Right);
    }

    #[test]
    fn test_step_landing_on_edge_is_blocked() {
        // Exact in binary: next x would be 0.75 == max_coord
        let mut dirs = ScriptedDirections::repeat(Direction::Up);
        let mut m = Mover::new(Vec2::new(0.5, 0.0), 0.25, Direction::Right, [1.0; 3]);
        m.speed = 0.25;
        assert_eq!(m.pos.x + m.speed, m.max_coord());

        assert!(m.move_one_step(&mut dirs));
        assert_eq!(m.pos.x, 0.5);
        assert_eq!(m.direction, Direction::Up);
        assert_eq!(dirs.draws(), 1);

        // Same on the low edge going up
        let mut dirs = ScriptedDirections::repeat(Direction::Down);
        let mut m = Mover::new(Vec2::new(0.0, -0.5), 0.25, Direction::Up, [1.0; 3]);
        m.speed = 0.25;
        assert!(m.move_one_step(&mut dirs));
        assert_eq!(m.pos.y, -0.5);
        assert_eq!(m.direction, Direction::Down);
    }

    #[test]
    fn test_redraw_can_repeat_direction() {
        let mut dirs = ScriptedDirections::repeat(Direction::Right);
        let mut m = ball_at(0.0, 0.0, Direction::Right);
        m.pos.x = m.max_coord();
        assert!(m.move_one_step(&mut dirs));
        assert_eq!(m.direction, Direction::Right);
    }

    #[test]
    fn test_diagonal_blocked_axis_keeps_other_axis_moving() {
        // Up is blocked, Right is free. The redraw lands on Down, but the
        // step still finishes under the old UpRight heading.
        let mut dirs = ScriptedDirections::repeat(Direction::Down);
        let mut m = ball_at(0.0, 0.0, Direction::UpRight);
        m.pos.y = m.min_coord();
        let y_before = m.pos.y;

        assert!(m.move_one_step(&mut dirs));
        assert_eq!(m.pos.y, y_before);
        assert!((m.pos.x - MOVER_SPEED).abs() < EPS);
        assert_eq!(m.direction, Direction::Down);
        assert_eq!(dirs.draws(), 1);
    }

    #[test]
    fn test_corner_redraws_twice() {
        let mut dirs = ScriptedDirections::new(vec![Direction::Left, Direction::Up]);
        let mut m = ball_at(0.0, 0.0, Direction::DownRight);
        m.pos = Vec2::splat(m.max_coord());
        let before = m.pos;

        assert!(m.move_one_step(&mut dirs));
        assert_eq!(m.pos, before);
        // Right redraw first, then Down redraw wins
        assert_eq!(dirs.draws(), 2);
        assert_eq!(m.direction, Direction::Up);
    }

    #[test]
    fn test_out_of_bounds_mover_can_move_back_inward() {
        let mut dirs = ScriptedDirections::repeat(Direction::Left);
        let mut m = ball_at(0.0, 0.0, Direction::Up);
        m.pos.y = m.max_coord() + 0.02;
        let y_before = m.pos.y;

        assert!(!m.move_one_step(&mut dirs));
        assert!(m.pos.y < y_before);
    }

    #[test]
    fn test_bounce_redirects_and_nudges() {
        let mut dirs = ScriptedDirections::repeat(Direction::Left);
        let mut target = Target::bouncing(0.0, 0.0, 0.2, [1.0, 0.5, 0.5]);
        let before = target.clone();
        let mut m = ball_at(0.05, -0.05, Direction::Down);

        let outcome = m.check_collision(&mut target, &mut dirs);
        assert_eq!(outcome, CollisionOutcome::Bounced);
        assert_eq!(m.direction, Direction::Left);
        assert!((m.pos.x - 0.08).abs() < EPS);
        assert!((m.pos.y + 0.01).abs() < EPS);
        assert_eq!(target, before);
    }

    #[test]
    fn test_miss_leaves_everything_alone() {
        let mut dirs = ScriptedDirections::repeat(Direction::Left);
        let mut target = Target::absorbing(0.5, 0.5, 0.2, [1.0; 3]);
        let mut m = ball_at(-0.5, -0.5, Direction::Down);
        let before = m.clone();

        assert_eq!(m.check_collision(&mut target, &mut dirs), CollisionOutcome::Miss);
        assert_eq!(m, before);
        assert_eq!(target.hit_points(), Some(DEFAULT_HIT_POINTS));
        assert_eq!(dirs.draws(), 0);
    }

    #[test]
    fn test_absorb_decrements_and_nudges() {
        let mut dirs = ScriptedDirections::repeat(Direction::UpLeft);
        let mut target = Target::absorbing(0.0, 0.0, 0.2, [0.0, 1.0, 1.0]);
        let mut m = ball_at(0.0, 0.0, Direction::Down);

        let outcome = m.check_collision(&mut target, &mut dirs);
        assert_eq!(
            outcome,
            CollisionOutcome::Absorbed {
                remaining: DEFAULT_HIT_POINTS - 1
            }
        );
        assert_eq!(m.pos, COLLISION_NUDGE);
        assert_eq!(m.direction, Direction::UpLeft);
    }

    #[test]
    fn test_inactive_mover_passes_through_absorbing() {
        let mut dirs = ScriptedDirections::repeat(Direction::UpLeft);
        let mut target = Target::absorbing(0.0, 0.0, 0.2, [1.0; 3]);
        let mut m = ball_at(0.0, 0.0, Direction::Down);
        m.active = false;

        assert_eq!(m.check_collision(&mut target, &mut dirs), CollisionOutcome::Miss);
        assert_eq!(target.hit_points(), Some(DEFAULT_HIT_POINTS));
    }

    #[test]
    fn test_depleted_target_is_skipped() {
        let mut dirs = ScriptedDirections::repeat(Direction::Right);
        let mut target = Target::absorbing(0.0, 0.0, 0.2, [1.0; 3]);
        let mut outcomes = Vec::new();
        for _ in 0..DEFAULT_HIT_POINTS + 1 {
            let mut m = ball_at(0.0, 0.0, Direction::Down);
            outcomes.push(m.check_collision(&mut target, &mut dirs));
        }
        assert_eq!(outcomes[DEFAULT_HIT_POINTS as usize - 1], CollisionOutcome::Destroyed);
        assert_eq!(outcomes[DEFAULT_HIT_POINTS as usize], CollisionOutcome::Miss);
        assert_eq!(target.hit_points(), Some(0));
        assert!(!target.is_active());
    }
}
