//! The stock arena: 26 targets in their fixed check order

use super::target::Target;

const YELLOW: [f32; 3] = [1.0, 1.0, 0.0];
const GREEN: [f32; 3] = [0.0, 1.0, 0.0];
const CYAN: [f32; 3] = [0.0, 1.0, 1.0];
const WHITE: [f32; 3] = [1.0, 1.0, 1.0];
const RED: [f32; 3] = [1.0, 0.0, 0.0];
const CORAL: [f32; 3] = [1.0, 0.5, 0.5];

/// Width shared by every regular brick
pub const BRICK_WIDTH: f32 = 0.20;
/// Width of the launcher the movers spawn inside
pub const LAUNCHER_WIDTH: f32 = 0.25;

/// Build the default arena
///
/// Order matters: movers test targets in this order every tick. The last
/// entry is the bouncing launcher around the spawn point.
pub fn default_layout() -> Vec<Target> {
    let w = BRICK_WIDTH;
    vec![
        Target::absorbing(0.5, -0.33, w, YELLOW),
        Target::absorbing(-0.5, 0.20, w, GREEN),
        Target::absorbing(-0.5, -0.33, w, CYAN),
        Target::bouncing(0.7, 0.6, w, CORAL),
        Target::absorbing(-0.9, 0.80, w, WHITE),
        Target::absorbing(0.9, 0.80, w, CYAN),
        Target::absorbing(-0.7, 0.80, w, GREEN),
        Target::absorbing(0.7, 0.80, w, WHITE),
        Target::absorbing(0.5, 0.20, w, RED),
        Target::bouncing(-0.7, 0.60, w, CORAL),
        Target::bouncing(-0.5, 0.40, w, CORAL),
        Target::bouncing(0.5, 0.40, w, CORAL),
        Target::bouncing(-0.3, 0.20, w, CORAL),
        Target::bouncing(0.3, 0.20, w, CORAL),
        Target::absorbing(0.0, 0.20, w, CYAN),
        // Middle row
        Target::absorbing(-0.9, 0.00, w, WHITE),
        Target::absorbing(-0.7, 0.00, w, GREEN),
        Target::absorbing(-0.5, 0.00, w, CYAN),
        Target::absorbing(-0.3, 0.00, w, WHITE),
        Target::absorbing(-0.1, 0.00, w, GREEN),
        Target::absorbing(0.1, 0.00, w, CYAN),
        Target::absorbing(0.3, 0.00, w, WHITE),
        Target::absorbing(0.5, 0.00, w, GREEN),
        Target::absorbing(0.7, 0.00, w, CYAN),
        Target::absorbing(0.9, 0.00, w, WHITE),
        Target::bouncing(0.0, -0.8, LAUNCHER_WIDTH, CORAL),
    ]
}
