//! Entity variants for the worldlet kernel.
//!
//! Each variant implements [`worldlet_kernel::Entity`] and evolves its own
//! one-dimensional position per tick:
//! - [`Prop`] never moves (the generic-entity baseline).
//! - [`BouncingBall`] reflects off the fixed range `[0, 100]`.
//! - [`MovingPlatform`] reflects off a configurable range `[0, distance]`.
//!
//! # Invariants
//! - Speed magnitude never changes, only its sign.
//! - Boundary reflection happens after the position advance; positions may
//!   overshoot the bound for one tick and are never clamped.

pub mod ball;
pub mod motion;
pub mod platform;
pub mod prop;

pub use ball::BouncingBall;
pub use platform::MovingPlatform;
pub use prop::Prop;

pub fn crate_info() -> &'static str {
    "worldlet-entities v0.1.0"
}
