//! End-to-end evaluation of one exported MNIST stimulus.
//!
//! Run with: `cargo run --example mnist_eval [index]`
//!
//! Requires the exported 24x24 stimulus set in `data/`:
//! - `images-idx3-ubyte` (IDX image file, 24x24 grayscale)
//! - `labels-idx1-ubyte.gz` (IDX label file)
//!
//! The engine is the patterned stand-in backend, so the prediction itself
//! is meaningless; the point is the full stimulus -> propagate -> grading
//! -> counter-report pipeline.

use anyhow::{Context, Result};

use qinfer::counters::NativeCounters;
use qinfer::engine::FcEngine;
use qinfer::eval::evaluate;
use qinfer::format::Active;
use qinfer::stimulus::Stimulus;
use qinfer::topology::Topology;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let index: usize = std::env::args()
        .nth(1)
        .map(|arg| arg.parse())
        .transpose()
        .context("stimulus index must be a number")?
        .unwrap_or(3);

    let topology = Topology::mnist_24x24();
    let stimulus = Stimulus::<Active>::from_idx_files(
        "data/images-idx3-ubyte",
        "data/labels-idx1-ubyte.gz",
        index,
        &topology,
    )
    .context("loading stimulus")?;

    let engine = FcEngine::<Active>::patterned(&topology);
    let counters = NativeCounters::new();

    let result = evaluate(&engine, &stimulus, &counters, &topology);
    result.print_report();

    #[cfg(feature = "report_file")]
    result
        .write_success_rate("success_rate.txt")
        .context("writing success rate report")?;

    Ok(())
}
