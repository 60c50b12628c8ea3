//! Simulation kernel: entity roster, lifecycle gate, tick stepping.
//!
//! # Invariants
//! - Update order is registration order, never reordered.
//! - `started` is monotonic: once true, the roster is frozen.
//! - Entities mutate only their own state; signals are the only shared effect.

pub mod entity;
pub mod signal;
pub mod world;

pub use entity::Entity;
pub use signal::{MemorySink, NullSink, Signal, SignalSink, TracingSink};
pub use world::{World, WorldError, WorldSummary};

pub fn crate_info() -> &'static str {
    "worldlet-kernel v0.1.0"
}
