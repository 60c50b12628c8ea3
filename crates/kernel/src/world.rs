use crate::entity::Entity;
use crate::signal::{SignalSink, TracingSink};

/// Errors from world operations.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// The roster is frozen once the world has started.
    #[error("invalid state: cannot add entities to the world once it has started")]
    AlreadyStarted,
}

/// The simulation world.
///
/// Owns an ordered roster of entities and drives their lifecycle. Entities
/// are updated in registration order, never reordered. Once `start` has run,
/// the roster is frozen; `add_entity` fails from then on.
///
/// The world does not own a timer. `start` runs the one-time init pass and
/// flips the lifecycle gate; something external (the runtime scheduler, a
/// test, the CLI) calls `step` once per tick. That keeps the tick source an
/// owned, stoppable resource instead of an anonymous background timer.
pub struct World {
    entities: Vec<Box<dyn Entity>>,
    started: bool,
    tick: u64,
    sink: Box<dyn SignalSink>,
}

impl World {
    /// Create an empty world emitting signals through `tracing`.
    pub fn new() -> Self {
        Self::with_sink(Box::new(TracingSink))
    }

    /// Create an empty world with an explicit signal sink.
    pub fn with_sink(sink: Box<dyn SignalSink>) -> Self {
        Self {
            entities: Vec::new(),
            started: false,
            tick: 0,
            sink,
        }
    }

    /// Whether `start` has run.
    pub fn started(&self) -> bool {
        self.started
    }

    /// Number of completed ticks.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Number of registered entities.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Read-only access to the roster, in registration order.
    pub fn entities(&self) -> &[Box<dyn Entity>] {
        &self.entities
    }

    /// Entity at a roster index.
    pub fn get(&self, index: usize) -> Option<&dyn Entity> {
        self.entities.get(index).map(|e| e.as_ref())
    }

    /// Append an entity to the roster.
    ///
    /// Fails with [`WorldError::AlreadyStarted`] once the world has started,
    /// leaving the roster unchanged.
    pub fn add_entity(&mut self, entity: Box<dyn Entity>) -> Result<(), WorldError> {
        if self.started {
            return Err(WorldError::AlreadyStarted);
        }
        tracing::debug!(name = entity.name(), kind = entity.kind(), "entity registered");
        self.entities.push(entity);
        Ok(())
    }

    /// Start the world: freeze the roster and run one synchronous init pass
    /// over every entity in registration order.
    ///
    /// Idempotent. A second call does nothing; init never runs twice.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        tracing::info!(entities = self.entities.len(), "world started");
        for entity in &mut self.entities {
            entity.init(self.sink.as_mut());
        }
    }

    /// Advance the simulation by one tick: update every entity in
    /// registration order, synchronously.
    pub fn step(&mut self) {
        self.tick += 1;
        for entity in &mut self.entities {
            entity.update(self.sink.as_mut());
        }
    }

    /// Summary of the world state for logs and tooling.
    pub fn summary(&self) -> WorldSummary {
        WorldSummary {
            started: self.started,
            tick: self.tick,
            entity_count: self.entities.len(),
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary of world state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldSummary {
    pub started: bool,
    pub tick: u64,
    pub entity_count: usize,
}

impl std::fmt::Display for WorldSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "World: started={} tick={} entities={}",
            self.started, self.tick, self.entity_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::{MemorySink, Signal, SignalSink};

    struct Walker {
        name: String,
        position: f64,
    }

    impl Walker {
        fn boxed(name: &str, position: f64) -> Box<dyn Entity> {
            Box::new(Self {
                name: name.into(),
                position,
            })
        }
    }

    impl Entity for Walker {
        fn name(&self) -> &str {
            &self.name
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
            self.position += 1.0;
        }
    }

    fn world_with_sink() -> (World, MemorySink) {
        let sink = MemorySink::new();
        (World::with_sink(Box::new(sink.clone())), sink)
    }

    #[test]
    fn world_starts_empty_and_stopped() {
        let w = World::new();
        assert!(!w.started());
        assert_eq!(w.tick(), 0);
        assert_eq!(w.entity_count(), 0);
    }

    #[test]
    fn add_entity_before_start() {
        let (mut w, _sink) = world_with_sink();
        w.add_entity(Walker::boxed("a", 0.0)).unwrap();
        w.add_entity(Walker::boxed("b", 0.0)).unwrap();
        assert_eq!(w.entity_count(), 2);
    }

    #[test]
    fn add_entity_after_start_fails_and_preserves_roster() {
        let (mut w, _sink) = world_with_sink();
        w.add_entity(Walker::boxed("a", 0.0)).unwrap();
        w.start();

        let err = w.add_entity(Walker::boxed("late", 0.0)).unwrap_err();
        assert!(matches!(err, WorldError::AlreadyStarted));
        assert_eq!(w.entity_count(), 1);
        assert_eq!(w.get(0).unwrap().name(), "a");
    }

    #[test]
    fn start_inits_in_registration_order() {
        let (mut w, sink) = world_with_sink();
        w.add_entity(Walker::boxed("first", 0.0)).unwrap();
        w.add_entity(Walker::boxed("second", 0.0)).unwrap();
        w.start();

        assert_eq!(
            sink.snapshot(),
            vec![
                Signal::Initialized {
                    name: "first".into()
                },
                Signal::Initialized {
                    name: "second".into()
                },
            ]
        );
    }

    #[test]
    fn start_is_idempotent() {
        let (mut w, sink) = world_with_sink();
        w.add_entity(Walker::boxed("a", 0.0)).unwrap();
        w.start();
        w.start();

        // One init signal, not two.
        assert_eq!(sink.len(), 1);
        assert!(w.started());
    }

    #[test]
    fn init_runs_before_any_update_and_mutates_nothing() {
        let (mut w, _sink) = world_with_sink();
        w.add_entity(Walker::boxed("a", 5.0)).unwrap();
        w.start();
        assert_eq!(w.get(0).unwrap().position(), 5.0);
    }

    #[test]
    fn step_updates_in_registration_order() {
        let (mut w, sink) = world_with_sink();
        w.add_entity(Walker::boxed("first", 0.0)).unwrap();
        w.add_entity(Walker::boxed("second", 10.0)).unwrap();
        w.start();
        w.step();

        let names: Vec<String> = sink
            .snapshot()
            .into_iter()
            .filter_map(|s| match s {
                Signal::Updated { name, .. } => Some(name),
                _ => None,
            })
            .collect();
        assert_eq!(names, vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn step_increments_tick() {
        let (mut w, _sink) = world_with_sink();
        w.start();
        w.step();
        w.step();
        w.step();
        assert_eq!(w.tick(), 3);
    }

    #[test]
    fn entities_mutate_independently() {
        let (mut w, _sink) = world_with_sink();
        w.add_entity(Walker::boxed("a", 0.0)).unwrap();
        w.add_entity(Walker::boxed("b", 100.0)).unwrap();
        w.start();
        for _ in 0..5 {
            w.step();
        }
        assert_eq!(w.get(0).unwrap().position(), 5.0);
        assert_eq!(w.get(1).unwrap().position(), 105.0);
    }

    #[test]
    fn summary_display() {
        let (mut w, _sink) = world_with_sink();
        w.add_entity(Walker::boxed("a", 0.0)).unwrap();
        w.start();
        w.step();

        let s = format!("{}", w.summary());
        assert!(s.contains("started=true"));
        assert!(s.contains("tick=1"));
        assert!(s.contains("entities=1"));
    }
}
