//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One sequential pass per tick, movers in spawn order
//! - Injected direction source only
//! - Targets checked in creation order
//! - No rendering or platform dependencies

pub mod direction;
pub mod layout;
pub mod mover;
pub mod state;
pub mod target;
pub mod tick;
pub mod world;

pub use direction::{Direction, DirectionSource, ScriptedDirections, SimRng};
pub use layout::default_layout;
pub use mover::{CollisionOutcome, Mover};
pub use state::Simulation;
pub use target::{Target, TargetKind};
pub use tick::{TickInput, tick};
pub use world::{TickReport, World};
