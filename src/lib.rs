//! Brick Bounce - bricks and bouncing circles
//!
//! Core modules:
//! - `sim`: Deterministic simulation (targets, movers, collisions, world tick)
//! - `render`: Read-only render query for the host renderer
//! - `settings`: Headless driver configuration

pub mod render;
pub mod settings;
pub mod sim;

pub use render::{Instance, RenderSnapshot};
pub use settings::Settings;

/// Simulation constants
pub mod consts {
    use glam::Vec2;

    /// Play field is the normalized square [-1, 1] on both axes
    pub const FIELD_EXTENT: f32 = 1.0;

    /// Distance a mover travels per tick on each active axis
    pub const MOVER_SPEED: f32 = 0.01;
    /// Starting health of a mover (never decremented)
    pub const MOVER_HEALTH: i32 = 2;

    /// Hit points an absorbing target starts with
    pub const DEFAULT_HIT_POINTS: i32 = 10;

    /// Offset applied to a mover after any collision response
    pub const COLLISION_NUDGE: Vec2 = Vec2::new(0.03, 0.04);

    /// Where fired movers appear (inside the launcher target)
    pub const SPAWN_ORIGIN: Vec2 = Vec2::new(0.0, -0.8);
    pub const SPAWN_RADIUS: f32 = 0.03;
}
