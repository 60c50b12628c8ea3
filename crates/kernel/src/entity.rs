use crate::signal::{Signal, SignalSink};

/// A named, independently-updating simulation object with a one-dimensional
/// position.
///
/// The capability set is {init, update}: `init` runs exactly once when the
/// world starts, `update` runs once per tick. Both receive the world's
/// signal sink and emit exactly one signal per call. The default bodies give
/// the generic-entity behavior (signal only, no state mutation); motion
/// variants override `update`.
///
/// Entities never see each other; each mutates only its own state.
pub trait Entity: Send {
    /// Identifying name, immutable after construction.
    fn name(&self) -> &str;

    /// Short kind tag used in update signals ("entity", "ball", ...).
    fn kind(&self) -> &'static str {
        "entity"
    }

    /// Current one-dimensional position.
    fn position(&self) -> f64;

    /// One-time identification pass. Must not mutate entity state.
    fn init(&mut self, sink: &mut dyn SignalSink) {
        sink.emit(Signal::Initialized {
            name: self.name().to_string(),
        });
    }

    /// Advance one tick. The base behavior is a status signal with no
    /// motion.
    fn update(&mut self, sink: &mut dyn SignalSink) {
        sink.emit(Signal::Updated {
            kind: self.kind(),
            name: self.name().to_string(),
            position: self.position(),
        });
    }
}
