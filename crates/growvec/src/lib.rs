//! A generic growable sequence container with explicit ownership
//! semantics.
//!
//! [`GrowVec`] owns a contiguous heap-allocated block and demonstrates
//! leak-free, double-free-free lifecycle management: copy via
//! [`duplicate`](GrowVec::duplicate) (fresh block), move via
//! [`transfer`](GrowVec::transfer) (O(1) block handover, source left
//! hollow), and value assignment via [`assign`](GrowVec::assign)
//! (copy-and-swap, safe under self-assignment). Append grows the block
//! geometrically (`2 * capacity + 1`); explicit resize is failure-atomic
//! and shrinks lossily. Two buffers with matching occupancy combine
//! element-wise through [`combine`](GrowVec::combine) or the `+`
//! operator.
//!
//! The modeled failures never panic: lenient operations report through a
//! pluggable [`DiagSink`] and keep the last known-good state, while the
//! `try_` forms return [`BufferError`].
//!
//! # Quick start
//!
//! ```rust
//! use growvec::GrowVec;
//!
//! let mut a = GrowVec::named("a");
//! a.push(1);
//! a.push(2);
//! a.push(3); // capacity grew 1 -> 3 automatically
//!
//! let mut b = a.duplicate(); // independent block, labeled "copy"
//! b.push(4);
//! assert_eq!(a.occupied(), 3);
//!
//! let sum = &a + &a; // element-wise addition
//! assert_eq!(sum.to_string(), "result size 3 has 3 items: 2, 4, 6 (full)");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod config;
pub mod diag;
pub mod error;

// Public re-exports for the primary API surface.
pub use buffer::GrowVec;
pub use config::GrowthPolicy;
pub use diag::{DiagEvent, DiagSink, MemorySink, NullSink, StdoutSink};
pub use error::BufferError;
