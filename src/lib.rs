//! A quantized neural network inference harness in Rust.
//!
//! This crate provides the pieces a code-generated network export is built on:
//! a configurable fixed-point (or floating-point) numeric format selected at
//! build time, an immutable network topology descriptor, a buffer-based
//! inference engine contract, and an evaluation driver that grades one
//! stimulus and reports instruction/cycle counts.
//!
//! # Example
//!
//! ```no_run
//! use qinfer::engine::FcEngine;
//! use qinfer::eval::evaluate;
//! use qinfer::counters::NativeCounters;
//! use qinfer::format::Active;
//! use qinfer::stimulus::Stimulus;
//! use qinfer::topology::Topology;
//!
//! let topology = Topology::mnist_24x24();
//! let stimulus = Stimulus::<Active>::from_idx_files(
//!     "data/images-idx3-ubyte",
//!     "data/labels-idx1-ubyte.gz",
//!     3,
//!     &topology,
//! ).unwrap();
//! let engine = FcEngine::<Active>::patterned(&topology);
//! let counters = NativeCounters::new();
//! let result = evaluate(&engine, &stimulus, &counters, &topology);
//! result.print_report();
//! ```

/// Numeric format resolution: fixed-point and floating-point representations
/// with saturation bounds, selected at build time.
pub mod format;
/// Immutable network topology descriptor (input and per-target output shapes).
pub mod topology;
/// Inference engine contract and the stand-in fully-connected backend.
pub mod engine;
/// Stimulus loading: one input tensor plus one expected-output tensor.
pub mod stimulus;
/// Retired-instruction and cycle counters.
pub mod counters;
/// Evaluation driver: one inference, grading, and reporting.
pub mod eval;

mod error;

pub use error::Error;
