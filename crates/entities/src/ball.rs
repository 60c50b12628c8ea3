use worldlet_kernel::{Entity, Signal, SignalSink};

use crate::motion::advance_and_reflect;

/// Upper edge of the ball's travel range. The lower edge is 0.
pub const BALL_UPPER_BOUND: f64 = 100.0;

/// Ball bouncing between 0 and [`BALL_UPPER_BOUND`].
///
/// Each tick the ball advances by `speed`, then reverses direction if it has
/// left the range. The reflection check runs after the advance, so the ball
/// can overshoot the edge by up to one step before turning around.
pub struct BouncingBall {
    name: String,
    position: f64,
    speed: f64,
}

impl BouncingBall {
    pub fn new(name: impl Into<String>, position: f64, speed: f64) -> Self {
        Self {
            name: name.into(),
            position,
            speed,
        }
    }

    /// Signed per-tick velocity. Magnitude is invariant; only the sign flips.
    pub fn speed(&self) -> f64 {
        self.speed
    }
}

impl Entity for BouncingBall {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &'static str {
        "ball"
    }

    fn position(&self) -> f64 {
        self.position
    }

    fn update(&mut self, sink: &mut dyn SignalSink) {
        sink.emit(Signal::Updated {
            kind: self.kind(),
            name: self.name.clone(),
            position: self.position,
        });
        advance_and_reflect(&mut self.position, &mut self.speed, 0.0, BALL_UPPER_BOUND);
    }
}
