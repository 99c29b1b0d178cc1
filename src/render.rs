//! Render query
//!
//! Read-only views the host renderer draws from. Nothing here feeds back
//! into the simulation.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use serde::Serialize;

use crate::sim::{Simulation, TargetKind};

/// Shape tag stored in [`Instance::shape`]
pub mod shape {
    pub const SQUARE: u32 = 0;
    pub const CIRCLE: u32 = 1;
}

/// Target as seen by the renderer
#[derive(Debug, Clone, Serialize)]
pub struct TargetView {
    pub pos: Vec2,
    pub width: f32,
    pub color: [f32; 3],
    pub active: bool,
    pub bouncing: bool,
    pub hit_points: Option<i32>,
}

/// Mover as seen by the renderer
#[derive(Debug, Clone, Serialize)]
pub struct MoverView {
    pub pos: Vec2,
    pub radius: f32,
    pub color: [f32; 3],
    pub active: bool,
}

/// Everything drawable at the end of a tick
#[derive(Debug, Clone, Serialize)]
pub struct RenderSnapshot {
    pub tick: u64,
    pub targets: Vec<TargetView>,
    pub movers: Vec<MoverView>,
}

impl RenderSnapshot {
    pub fn capture(sim: &Simulation) -> Self {
        let targets = sim
            .targets
            .iter()
            .map(|t| TargetView {
                pos: t.pos,
                width: t.width,
                color: t.color,
                active: t.is_active(),
                bouncing: t.kind() == TargetKind::Bouncing,
                hit_points: t.hit_points(),
            })
            .collect();

        let movers = sim
            .world
            .movers()
            .iter()
            .map(|m| MoverView {
                pos: m.pos,
                radius: m.radius,
                color: m.color,
                active: m.active,
            })
            .collect();

        Self {
            tick: sim.time_ticks,
            targets,
            movers,
        }
    }

    /// Pack active entities into GPU instances, targets first
    ///
    /// Squares are drawn with half side `width / 2`, half their collision
    /// footprint.
    pub fn instances(&self) -> Vec<Instance> {
        let targets = self
            .targets
            .iter()
            .filter(|t| t.active)
            .map(|t| Instance::new(t.pos, t.width / 2.0, shape::SQUARE, t.color));
        let movers = self
            .movers
            .iter()
            .filter(|m| m.active)
            .map(|m| Instance::new(m.pos, m.radius, shape::CIRCLE, m.color));
        targets.chain(movers).collect()
    }
}

/// One instanced quad: a square or a circle
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Instance {
    pub center: [f32; 2],
    /// Half side for squares, radius for circles
    pub half_size: f32,
    pub shape: u32,
    pub color: [f32; 4],
}

impl Instance {
    pub fn new(center: Vec2, half_size: f32, shape: u32, rgb: [f32; 3]) -> Self {
        Self {
            center: center.to_array(),
            half_size,
            shape,
            color: [rgb[0], rgb[1], rgb[2], 1.0],
        }
    }
}
