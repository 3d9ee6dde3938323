use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::counters::PerfCounters;
use crate::engine::Engine;
use crate::error::Error;
use crate::format::Format;
use crate::stimulus::Stimulus;
use crate::topology::{Target, Topology};

/// Result of one inference+grading pass.
pub struct Evaluation<F: Format> {
    /// Stimulus identifier, carried into the counter report lines.
    pub stimulus: String,
    pub expected: Vec<Target>,
    pub predicted: Vec<Target>,
    /// Label slots with ground truth available (expected >= 0).
    pub graded: usize,
    /// Graded slots where predicted == expected.
    pub correct: usize,
    pub credence: F::Unsigned,
    pub instructions: u64,
    pub cycles: u64,
}

impl<F: Format> Evaluation<F> {
    /// Raw correct count, or 0 when nothing was graded.
    pub fn score(&self) -> usize {
        if self.graded > 0 {
            self.correct
        } else {
            0
        }
    }

    /// Fraction of graded slots predicted correctly; 0.0 when nothing was
    /// graded.
    pub fn success_rate(&self) -> f64 {
        if self.graded > 0 {
            self.correct as f64 / self.graded as f64
        } else {
            0.0
        }
    }

    /// Print the console report in the exact layout downstream tooling
    /// parses.
    pub fn print_report(&self) {
        println!("Expected  = {}", self.expected[0]);
        println!("Predicted = {}", self.predicted[0]);
        println!("Result : {}/1", self.score());
        println!("credence: {}", self.credence);
        println!("image {}: {} instructions", self.stimulus, self.instructions);
        println!("image {}: {} cycles", self.stimulus, self.cycles);
    }

    /// Write the success rate as plain text. Creation failure is fatal to
    /// the harness; callers abort on error rather than retry.
    pub fn write_success_rate<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        let report = |source| Error::Report {
            path: path.display().to_string(),
            source,
        };
        let mut file = File::create(path).map_err(report)?;
        write!(file, "{:.6}", self.success_rate()).map_err(report)?;
        Ok(())
    }
}

/// Grade predictions element by element. Slots with a negative expected
/// value carry no ground truth and are skipped. Returns (graded, correct).
pub fn grade(expected: &[Target], predicted: &[Target]) -> (usize, usize) {
    let mut graded = 0usize;
    let mut correct = 0usize;
    for (e, p) in expected.iter().zip(predicted.iter()) {
        if *e >= 0 {
            graded += 1;
            if p == e {
                correct += 1;
            }
        }
    }
    (graded, correct)
}

/// Run one end-to-end pass: snapshot counters, invoke the engine exactly
/// once on the stimulus, snapshot again, and grade the prediction.
///
/// Buffers are scoped to this call; the engine never retains them.
pub fn evaluate<F, E, C>(
    engine: &E,
    stimulus: &Stimulus<F>,
    counters: &C,
    topology: &Topology,
) -> Evaluation<F>
where
    F: Format,
    E: Engine<F>,
    C: PerfCounters,
{
    assert_eq!(stimulus.input.len(), topology.input_size(), "input buffer size");
    assert_eq!(
        stimulus.expected.len(),
        topology.outputs_size(0),
        "expected buffer size"
    );

    let mut predicted = vec![0 as Target; topology.outputs_size(0)];

    let start = counters.read();
    let credence = engine.propagate(&stimulus.input, &mut predicted);
    let end = counters.read();
    let delta = end.delta_since(start);

    let (graded, correct) = grade(&stimulus.expected, &predicted);
    debug!(
        stimulus = %stimulus.name,
        graded,
        correct,
        instructions = delta.instructions,
        cycles = delta.cycles,
        "evaluated stimulus"
    );

    Evaluation {
        stimulus: stimulus.name.clone(),
        expected: stimulus.expected.clone(),
        predicted,
        graded,
        correct,
        credence,
        instructions: delta.instructions,
        cycles: delta.cycles,
    }
}
