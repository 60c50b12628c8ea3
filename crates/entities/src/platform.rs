use worldlet_kernel::{Entity, Signal, SignalSink};

use crate::motion::advance_and_reflect;

/// Platform shuttling between 0 and a configurable `distance`.
///
/// Same motion rule as [`crate::BouncingBall`], with `distance` in place of
/// the ball's fixed upper bound.
pub struct MovingPlatform {
    name: String,
    position: f64,
    distance: f64,
    speed: f64,
}

impl MovingPlatform {
    pub fn new(name: impl Into<String>, position: f64, distance: f64, speed: f64) -> Self {
        Self {
            name: name.into(),
            position,
            distance,
            speed,
        }
    }

    /// Upper edge of the travel range.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Signed per-tick velocity.
    pub fn speed(&self) -> f64 {
        self.speed
    }
}

impl Entity for MovingPlatform {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &'static str {
        "platform"
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
        advance_and_reflect(&mut self.position, &mut self.speed, 0.0, self.distance);
    }
}
