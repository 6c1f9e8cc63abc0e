//! Pluggable structured diagnostics.
//!
//! Every state-changing buffer operation reports what it did (or why it
//! refused) as a [`DiagEvent`] through a shared [`DiagSink`]. Sinks are
//! collaborators, not owned data: duplicating or assigning a buffer never
//! clones a sink, only the `Rc` handle.

use std::cell::RefCell;
use std::fmt;

use smallvec::SmallVec;

use crate::error::BufferError;

/// A single diagnostic event emitted by a buffer operation.
///
/// Events carry owned strings (labels and rendered state) so sinks never
/// depend on the buffer's element type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagEvent {
    /// A buffer was duplicated; `from` is the source's display label.
    Copied {
        /// Display label of the source buffer.
        from: String,
    },
    /// A buffer's storage was transferred out, leaving it hollow.
    Moved {
        /// Display label of the hollowed-out source.
        from: String,
    },
    /// A buffer received new contents via swap-based assignment.
    Assigned {
        /// Display label of the destination buffer.
        label: String,
    },
    /// A buffer's label changed.
    Renamed {
        /// Previous display label.
        from: String,
        /// New label.
        to: String,
    },
    /// A buffer's storage was reallocated to a new capacity.
    Resized {
        /// Display label of the buffer.
        label: String,
        /// Capacity after the resize.
        capacity: usize,
        /// Occupied count after the resize (may have been truncated).
        occupied: usize,
    },
    /// A lenient operation failed and left the buffer unchanged.
    OperationFailed {
        /// Display label of the buffer the operation ran against.
        label: String,
        /// The failure.
        error: BufferError,
    },
    /// A rendered state snapshot, produced by `print()`.
    State {
        /// Human-readable rendering of the buffer.
        text: String,
    },
}

impl fmt::Display for DiagEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Copied { from } => write!(f, "copied from {from}"),
            Self::Moved { from } => write!(f, "moved out of {from}"),
            Self::Assigned { label } => write!(f, "{label} assigned new contents"),
            Self::Renamed { from, to } => write!(f, "{from} renamed to {to}"),
            Self::Resized {
                label,
                capacity,
                occupied,
            } => {
                write!(f, "{label} resized to {capacity} with {occupied} occupied")
            }
            Self::OperationFailed { label, error } => {
                write!(f, "{label}: {error}")
            }
            Self::State { text } => f.write_str(text),
        }
    }
}

/// Destination for buffer diagnostics.
///
/// Object-safe so buffers can hold `Rc<dyn DiagSink>` and callers can
/// swap the destination without touching buffer logic.
pub trait DiagSink {
    /// Deliver one event. Must not fail; sinks that can lose events
    /// (closed pipes, full recorders) drop them silently.
    fn emit(&self, event: DiagEvent);
}

/// Sink that renders each event as one line on stdout.
///
/// The default sink, and the one the demonstration binary relies on.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutSink;

impl DiagSink for StdoutSink {
    fn emit(&self, event: DiagEvent) {
        println!("{event}");
    }
}

/// Sink that discards every event.
///
/// Used by benchmarks and property tests where diagnostic output would
/// drown the run.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl DiagSink for NullSink {
    fn emit(&self, _event: DiagEvent) {}
}

/// Sink that records events in memory for later inspection.
///
/// Inline storage covers short scenarios without heap traffic; longer
/// runs spill transparently.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: RefCell<SmallVec<[DiagEvent; 16]>>,
}

impl MemorySink {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded events, oldest first.
    pub fn events(&self) -> Vec<DiagEvent> {
        self.events.borrow().iter().cloned().collect()
    }

    /// Drain all recorded events, oldest first.
    pub fn take(&self) -> Vec<DiagEvent> {
        self.events.borrow_mut().drain(..).collect()
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl DiagSink for MemorySink {
    fn emit(&self, event: DiagEvent) {
        self.events.borrow_mut().push(event);
    }
}
