//! The growable owned-buffer container.
//!
//! [`GrowVec`] owns a contiguous heap block allocated to full capacity at
//! creation. Ownership is single at every point in time: duplication
//! always allocates a fresh block, transfer moves the block and hollows
//! the source, and assignment swaps state with an already-independent
//! value. All storage is a default-filled `Vec<T>` — no `unsafe`, no raw
//! pointers; release is automatic when the owning instance drops.
//!
//! The modeled failures (growth over the policy ceiling, incompatible
//! addition operands) never panic: the lenient operations report through
//! the diagnostic sink and leave the buffer in its last known-good state,
//! while the `try_` forms return [`BufferError`] for callers that need
//! status.

use std::fmt;
use std::ops::Add;
use std::rc::Rc;

use crate::config::GrowthPolicy;
use crate::diag::{DiagEvent, DiagSink, StdoutSink};
use crate::error::BufferError;

/// A growable sequence container with explicit ownership semantics.
///
/// Invariants for a valid instance:
/// - `occupied() <= capacity()`;
/// - the backing block is exactly `capacity()` slots long, with slots
///   beyond the occupied region holding `T::default()`;
/// - `capacity() > 0`, except in the hollow state left behind by
///   [`transfer`](GrowVec::transfer), which is safe to drop, reassign, or
///   append to but holds no block.
///
/// No two live instances ever share a block.
pub struct GrowVec<T> {
    /// Owned block; `data.len()` is the capacity.
    data: Vec<T>,
    /// Index of the last occupied slot; `None` means empty.
    last: Option<usize>,
    /// Reserved head offset for future windowed reads; always 0.
    head: usize,
    /// Diagnostic display name; `None` renders as "unnamed".
    label: Option<String>,
    /// Growth rule and capacity ceiling.
    policy: GrowthPolicy,
    /// Diagnostics collaborator, shared between related buffers.
    sink: Rc<dyn DiagSink>,
}

impl<T> GrowVec<T> {
    /// Total allocated slot count.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Number of slots holding meaningful data.
    pub fn occupied(&self) -> usize {
        self.last.map_or(0, |i| i + 1)
    }

    /// Whether no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.last.is_none()
    }

    /// Whether every allocated slot is occupied.
    pub fn is_full(&self) -> bool {
        !self.data.is_empty() && self.occupied() == self.data.len()
    }

    /// Number of free slots.
    pub fn slots_left(&self) -> usize {
        self.data.len() - self.occupied()
    }

    /// Whether this instance is in the hollow moved-from state
    /// (no block, capacity 0).
    pub fn is_hollow(&self) -> bool {
        self.data.is_empty()
    }

    /// The diagnostic label, if one was given.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The growth policy in effect.
    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or("unnamed")
    }

    fn report(&self, error: BufferError) {
        self.sink.emit(DiagEvent::OperationFailed {
            label: self.display_label().to_string(),
            error,
        });
    }
}

impl<T: Clone + Default> GrowVec<T> {
    /// Create an unnamed buffer with capacity 1.
    pub fn new() -> Self {
        Self::build(None, 1)
    }

    /// Create an unnamed buffer with the given capacity (0 is coerced
    /// to 1).
    pub fn with_capacity(capacity: usize) -> Self {
        Self::build(None, capacity)
    }

    /// Create a labeled buffer with capacity 1.
    pub fn named(label: impl Into<String>) -> Self {
        Self::build(Some(label.into()), 1)
    }

    /// Create a labeled buffer with the given capacity (0 is coerced
    /// to 1).
    pub fn named_with_capacity(label: impl Into<String>, capacity: usize) -> Self {
        Self::build(Some(label.into()), capacity)
    }

    fn build(label: Option<String>, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: vec![T::default(); capacity],
            last: None,
            head: 0,
            label,
            policy: GrowthPolicy::default(),
            sink: Rc::new(StdoutSink),
        }
    }

    /// Replace the growth policy. Consumes and returns the buffer so it
    /// chains off a constructor.
    pub fn with_policy(mut self, policy: GrowthPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the diagnostic sink. Consumes and returns the buffer so it
    /// chains off a constructor.
    pub fn with_sink(mut self, sink: Rc<dyn DiagSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Copy this buffer into a fresh, independent block.
    ///
    /// The whole block is cloned, occupied and trailing default slots
    /// alike, so capacity and occupancy carry over exactly. The result is
    /// labeled `"copy"` regardless of the source's label; policy and sink
    /// are shared. Mutating either buffer afterwards never affects the
    /// other.
    pub fn duplicate(&self) -> Self {
        self.sink.emit(DiagEvent::Copied {
            from: self.display_label().to_string(),
        });
        Self {
            data: self.data.clone(),
            last: self.last,
            head: self.head,
            label: Some("copy".to_string()),
            policy: self.policy,
            sink: Rc::clone(&self.sink),
        }
    }

    /// Move this buffer's block out in O(1), leaving this instance
    /// hollow.
    ///
    /// The returned buffer takes the block, capacity, and occupancy, and
    /// is unnamed; this instance keeps its label and sink but holds no
    /// storage (capacity 0, empty) until reassigned or grown by a later
    /// append.
    pub fn transfer(&mut self) -> Self {
        let data = std::mem::take(&mut self.data);
        let last = self.last.take();
        self.sink.emit(DiagEvent::Moved {
            from: self.display_label().to_string(),
        });
        Self {
            data,
            last,
            head: 0,
            label: None,
            policy: self.policy,
            sink: Rc::clone(&self.sink),
        }
    }

    /// Assign by value: swap storage, occupancy, and head offset with
    /// `value`, keeping this buffer's label, policy, and sink.
    ///
    /// The caller chooses copy or move semantics by passing either
    /// `other.duplicate()` or `other.transfer()`. Because `value` is
    /// already an independent instance, self-assignment
    /// (`a.assign(a.duplicate())`) is safe, a failed duplication leaves
    /// this buffer untouched, and the old block is released when `value`
    /// drops at the end of this call.
    pub fn assign(&mut self, mut value: Self) {
        std::mem::swap(&mut self.data, &mut value.data);
        std::mem::swap(&mut self.last, &mut value.last);
        std::mem::swap(&mut self.head, &mut value.head);
        self.sink.emit(DiagEvent::Assigned {
            label: self.display_label().to_string(),
        });
    }

    /// Append a value, growing geometrically if the buffer is full or
    /// hollow.
    ///
    /// On failure (growth refused by the policy ceiling) the buffer is
    /// unchanged, the value is dropped, and the failure is reported
    /// through the sink.
    pub fn push(&mut self, value: T) {
        if let Err(error) = self.try_push(value) {
            self.report(error);
        }
    }

    /// Append a value, returning the failure instead of reporting it.
    pub fn try_push(&mut self, value: T) -> Result<(), BufferError> {
        if self.data.is_empty() || self.occupied() == self.data.len() {
            let target = self.policy.grown(self.data.len()).ok_or_else(|| {
                BufferError::AllocationFailed {
                    requested: self.data.len().saturating_mul(2).saturating_add(1),
                    limit: self.policy.max_capacity,
                }
            })?;
            self.try_resize(target)?;
        }
        let next = self.last.map_or(0, |i| i + 1);
        if next >= self.data.len() {
            // Unreachable while growth runs first; kept as a guard.
            return Err(BufferError::AppendRejected {
                capacity: self.data.len(),
            });
        }
        self.data[next] = value;
        self.last = Some(next);
        Ok(())
    }

    /// Resize to a caller-chosen capacity (0 is coerced to 1).
    ///
    /// Shrinking below the occupied count silently drops the trailing
    /// elements. On failure the old block is retained and the failure is
    /// reported through the sink.
    pub fn resize(&mut self, new_capacity: usize) {
        if let Err(error) = self.try_resize(new_capacity) {
            self.report(error);
        }
    }

    /// Resize to a caller-chosen capacity, returning the failure instead
    /// of reporting it.
    ///
    /// Failure-atomic: the ceiling is checked and the new block is built
    /// before the old one is replaced, so an `Err` leaves capacity,
    /// occupancy, and contents untouched.
    pub fn try_resize(&mut self, new_capacity: usize) -> Result<(), BufferError> {
        let new_capacity = new_capacity.max(1);
        if !self.policy.permits(new_capacity) {
            return Err(BufferError::AllocationFailed {
                requested: new_capacity,
                limit: self.policy.max_capacity,
            });
        }
        let mut block = vec![T::default(); new_capacity];
        if let Some(last) = self.last {
            let keep = (last + 1).min(new_capacity);
            block[..keep].clone_from_slice(&self.data[..keep]);
            self.last = Some(keep - 1);
        }
        self.data = block;
        self.sink.emit(DiagEvent::Resized {
            label: self.display_label().to_string(),
            capacity: new_capacity,
            occupied: self.occupied(),
        });
        Ok(())
    }

    /// Replace the diagnostic label. Metadata only — capacity, occupancy,
    /// and contents are untouched.
    pub fn rename(&mut self, label: impl Into<String>) {
        let to = label.into();
        self.sink.emit(DiagEvent::Renamed {
            from: self.display_label().to_string(),
            to: to.clone(),
        });
        self.label = Some(to);
    }

    /// Emit the rendered state (label, capacity, occupancy, elements) to
    /// the sink.
    pub fn print(&self)
    where
        T: fmt::Display,
    {
        self.sink.emit(DiagEvent::State {
            text: self.to_string(),
        });
    }
}

impl<T: Clone + Default + Add<Output = T>> GrowVec<T> {
    /// Element-wise addition, returning the failure instead of reporting
    /// it.
    ///
    /// Defined only when both buffers hold at least one element and their
    /// occupied counts match. The result is a fresh buffer labeled
    /// `"result"` with `result[i] = self[i] + other[i]` for every
    /// occupied index. Neither operand is mutated.
    pub fn try_combine(&self, other: &Self) -> Result<Self, BufferError> {
        let (left, right) = (self.occupied(), other.occupied());
        if left == 0 || right == 0 {
            return Err(BufferError::EmptyOperand { left, right });
        }
        if left != right {
            return Err(BufferError::LengthMismatch { left, right });
        }
        let mut result = self.duplicate();
        result.label = Some("result".to_string());
        for i in 0..left {
            let sum = result.data[i].clone() + other.data[i].clone();
            result.data[i] = sum;
        }
        Ok(result)
    }

    /// Element-wise addition with the lenient failure surface: on
    /// incompatible operands, report through the sink and return a fresh
    /// default (empty, capacity 1) buffer instead.
    pub fn combine(&self, other: &Self) -> Self {
        match self.try_combine(other) {
            Ok(result) => result,
            Err(error) => {
                self.report(error);
                Self::new()
                    .with_policy(self.policy)
                    .with_sink(Rc::clone(&self.sink))
            }
        }
    }
}

impl<T: Clone + Default> Default for GrowVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Default + Add<Output = T>> Add for &GrowVec<T> {
    type Output = GrowVec<T>;

    fn add(self, rhs: Self) -> GrowVec<T> {
        self.combine(rhs)
    }
}

impl<T: fmt::Display> fmt::Display for GrowVec<T> {
    /// Renders as `label size N has K items: a, b, c (full)`, with
    /// `(K slots left)` when free capacity remains and `empty` when no
    /// slot is occupied.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} size {}", self.display_label(), self.capacity())?;
        match self.last {
            None => write!(f, " empty"),
            Some(last) => {
                write!(f, " has {} items: ", last + 1)?;
                for (i, item) in self.data[..=last].iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                if self.is_full() {
                    write!(f, " (full)")
                } else {
                    write!(f, " ({} slots left)", self.slots_left())
                }
            }
        }
    }
}

impl<T> fmt::Debug for GrowVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowVec")
            .field("label", &self.label)
            .field("capacity", &self.data.len())
            .field("occupied", &self.occupied())
            .finish_non_exhaustive()
    }
}
