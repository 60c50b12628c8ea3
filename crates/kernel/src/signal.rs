use std::fmt;
use std::sync::{Arc, Mutex};

/// A state-change notification emitted by an entity.
///
/// Signals are the only observable effect of the simulation. They flow
/// through an injectable [`SignalSink`] so behavior is testable without
/// capturing process output.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    /// Entity ran its one-time init pass.
    Initialized { name: String },
    /// Entity was updated for one tick. `position` is the value before the
    /// tick's motion is applied.
    Updated {
        kind: &'static str,
        name: String,
        position: f64,
    },
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Initialized { name } => write!(f, "Initializing entity: {name}"),
            Signal::Updated {
                kind,
                name,
                position,
            } => write!(f, "Updating {kind}: {name} (position {position})"),
        }
    }
}

/// Destination for entity signals.
///
/// The kernel never writes to the console directly; the world owns one sink
/// and hands it to entities during init and update.
pub trait SignalSink: Send {
    fn emit(&mut self, signal: Signal);
}

/// Sink that forwards each signal as a `tracing` info event.
#[derive(Debug, Default)]
pub struct TracingSink;

impl SignalSink for TracingSink {
    fn emit(&mut self, signal: Signal) {
        tracing::info!(target: "worldlet", "{signal}");
    }
}

/// Sink that discards everything.
#[derive(Debug, Default)]
pub struct NullSink;

impl SignalSink for NullSink {
    fn emit(&mut self, _signal: Signal) {}
}

/// Sink that records signals in memory.
///
/// Cloning shares the underlying buffer, so a test can keep one handle and
/// give the other to the world.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<Signal>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every signal recorded so far, in emission order.
    pub fn snapshot(&self) -> Vec<Signal> {
        self.records.lock().expect("sink poisoned").clone()
    }

    /// Number of signals recorded so far.
    pub fn len(&self) -> usize {
        self.records.lock().expect("sink poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SignalSink for MemorySink {
    fn emit(&mut self, signal: Signal) {
        self.records.lock().expect("sink poisoned").push(signal);
    }
}
