//! Discrete travel directions and the random source that picks them
//!
//! A direction is one of 8 compass headings built from membership in the
//! up/right/down/left axis groups. Codes 1-8 are stable and match the
//! order movers have always used.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// One of the 8 travel headings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
    UpRight,
    UpLeft,
    DownRight,
    DownLeft,
}

impl Direction {
    /// All directions in code order (1..=8)
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::UpRight,
        Direction::UpLeft,
        Direction::DownRight,
        Direction::DownLeft,
    ];

    /// Numeric code in 1..=8
    pub fn code(self) -> u8 {
        match self {
            Direction::Up => 1,
            Direction::Right => 2,
            Direction::Down => 3,
            Direction::Left => 4,
            Direction::UpRight => 5,
            Direction::UpLeft => 6,
            Direction::DownRight => 7,
            Direction::DownLeft => 8,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1..=8 => Some(Self::ALL[(code - 1) as usize]),
            _ => None,
        }
    }

    /// Up means decreasing y
    #[inline]
    pub fn moves_up(self) -> bool {
        matches!(self, Direction::Up | Direction::UpRight | Direction::UpLeft)
    }

    #[inline]
    pub fn moves_right(self) -> bool {
        matches!(
            self,
            Direction::Right | Direction::UpRight | Direction::DownRight
        )
    }

    /// Down means increasing y
    #[inline]
    pub fn moves_down(self) -> bool {
        matches!(
            self,
            Direction::Down | Direction::DownRight | Direction::DownLeft
        )
    }

    #[inline]
    pub fn moves_left(self) -> bool {
        matches!(self, Direction::Left | Direction::UpLeft | Direction::DownLeft)
    }
}

/// Source of fresh directions for redirects
///
/// Draws must be uniform over all 8 directions, including the current one.
pub trait DirectionSource {
    fn next_direction(&mut self) -> Direction;
}

/// Seeded simulation RNG
#[derive(Debug, Clone)]
pub struct SimRng {
    seed: u64,
    rng: Pcg32,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed this RNG was created from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Random RGB color with each channel in [0, 1)
    pub fn next_color(&mut self) -> [f32; 3] {
        [self.rng.random(), self.rng.random(), self.rng.random()]
    }
}

impl DirectionSource for SimRng {
    fn next_direction(&mut self) -> Direction {
        let code: u8 = self.rng.random_range(1..=8);
        // Range is exactly the valid code set
        Direction::ALL[(code - 1) as usize]
    }
}

/// Replays a fixed sequence of directions, cycling when exhausted
#[derive(Debug, Clone)]
pub struct ScriptedDirections {
    script: Vec<Direction>,
    cursor: usize,
    draws: usize,
}

impl ScriptedDirections {
    /// Panics if `script` is empty
    pub fn new(script: impl Into<Vec<Direction>>) -> Self {
        let script = script.into();
        assert!(!script.is_empty(), "direction script must not be empty");
        Self {
            script,
            cursor: 0,
            draws: 0,
        }
    }

    /// Always answers with the same direction
    pub fn repeat(direction: Direction) -> Self {
        Self::new(vec![direction])
    }

    /// Number of directions handed out so far
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl DirectionSource for ScriptedDirections {
    fn next_direction(&mut self) -> Direction {
        let direction = self.script[self.cursor];
        self.cursor = (self.cursor + 1) % self.script.len();
        self.draws += 1;
        direction
    }
}
