//! Benchmark-only crate; see `benches/buffer_ops.rs`.
