//! Buffer-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during buffer operations.
///
/// The lenient operations ([`GrowVec::push`](crate::GrowVec::push),
/// [`GrowVec::resize`](crate::GrowVec::resize),
/// [`GrowVec::combine`](crate::GrowVec::combine)) swallow these into
/// diagnostics and leave the buffer in its last known-good state; the
/// `try_` forms return them directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BufferError {
    /// Growth or resize would exceed the policy's capacity ceiling.
    AllocationFailed {
        /// Number of slots requested.
        requested: usize,
        /// Ceiling imposed by the growth policy.
        limit: usize,
    },
    /// Element-wise addition with an operand holding no elements.
    EmptyOperand {
        /// Occupied count of the left operand.
        left: usize,
        /// Occupied count of the right operand.
        right: usize,
    },
    /// Element-wise addition of buffers with unequal occupied counts.
    LengthMismatch {
        /// Occupied count of the left operand.
        left: usize,
        /// Occupied count of the right operand.
        right: usize,
    },
    /// Append found no free slot even after growth ran.
    ///
    /// Growth-before-write ordering should make this unreachable; it is
    /// kept so a broken invariant surfaces as a diagnostic rather than a
    /// silent overwrite.
    AppendRejected {
        /// Capacity at the time of the rejected append.
        capacity: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { requested, limit } => {
                write!(
                    f,
                    "allocation failed: requested {requested} slots, limit {limit}"
                )
            }
            Self::EmptyOperand { left, right } => {
                write!(
                    f,
                    "cannot combine empty buffers: left has {left}, right has {right}"
                )
            }
            Self::LengthMismatch { left, right } => {
                write!(
                    f,
                    "cannot combine buffers of unequal occupancy: left has {left}, right has {right}"
                )
            }
            Self::AppendRejected { capacity } => {
                write!(f, "append rejected: buffer full at capacity {capacity}")
            }
        }
    }
}

impl Error for BufferError {}
