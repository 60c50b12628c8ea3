//! Fixed-rate tick scheduler for a [`World`].
//!
//! # Invariants
//! - Firings are serialized: a single thread steps the world, so a slow tick
//!   never overlaps the next one.
//! - The tick thread is an owned resource. [`RunnerHandle::stop`] halts and
//!   joins it; dropping the handle does the same.
//! - `World::start` runs on the tick thread before the first step, so init
//!   always precedes every update.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use worldlet_kernel::World;

/// Tick frequency for the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickRate {
    period: Duration,
}

impl TickRate {
    /// Rate firing `hz` times per second. `hz` must be nonzero.
    pub fn from_hz(hz: u32) -> Self {
        assert!(hz > 0, "tick rate must be nonzero");
        Self {
            period: Duration::from_secs(1) / hz,
        }
    }

    /// Time between firings.
    pub fn period(&self) -> Duration {
        self.period
    }
}

impl Default for TickRate {
    /// The classic 60 Hz simulation rate.
    fn default() -> Self {
        Self::from_hz(60)
    }
}

/// Start the world and drive `step` at the given rate on a dedicated thread.
///
/// Returns a handle owning the thread. If a step overruns the period, the
/// schedule realigns from the current instant instead of bursting to catch
/// up.
pub fn spawn(mut world: World, rate: TickRate) -> std::io::Result<RunnerHandle> {
    let stop = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&stop);
    let period = rate.period();

    let thread = thread::Builder::new()
        .name("worldlet-tick".into())
        .spawn(move || {
            world.start();
            tracing::debug!(period_us = period.as_micros() as u64, "tick loop running");
            let mut next = Instant::now() + period;
            while !flag.load(Ordering::Relaxed) {
                world.step();
                let now = Instant::now();
                if next > now {
                    thread::sleep(next - now);
                    next += period;
                } else {
                    next = now + period;
                }
            }
            tracing::debug!(ticks = world.tick(), "tick loop stopped");
            world
        })?;

    Ok(RunnerHandle {
        stop,
        thread: Some(thread),
    })
}

/// Owned handle to a running tick loop.
pub struct RunnerHandle {
    stop: Arc<AtomicBool>,
    thread: Option<JoinHandle<World>>,
}

impl RunnerHandle {
    /// Stop the loop after the current tick, join the thread, and return the
    /// world.
    pub fn stop(mut self) -> World {
        self.stop.store(true, Ordering::Relaxed);
        // `thread` is set at construction and only taken here or in Drop,
        // which cannot have run yet.
        let thread = self.thread.take().expect("tick thread already joined");
        match thread.join() {
            Ok(world) => world,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }

    /// Whether the tick thread has exited.
    pub fn is_finished(&self) -> bool {
        self.thread.as_ref().is_none_or(|t| t.is_finished())
    }
}

impl Drop for RunnerHandle {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

pub fn crate_info() -> &'static str {
    "worldlet-runtime v0.1.0"
}
