use crate::format::{Format, SumElement};
use crate::topology::{Target, Topology};

use super::Engine;

/// A single fully-connected classifier over the flattened input.
///
/// This is a topology-consistent stand-in backend: it exercises the full
/// `propagate` contract (wide saturating accumulation, argmax decision,
/// credence) without carrying trained weights. Weight layout is row-major
/// per class.
pub struct FcEngine<F: Format> {
    input_size: usize,
    classes: usize,
    rescale_bits: u32,
    weights: Vec<F::Weight>,
    biases: Vec<F::Sum>,
}

impl<F: Format> FcEngine<F> {
    pub fn new(topology: &Topology, weights: Vec<F::Weight>, biases: Vec<F::Sum>) -> Self {
        let input_size = topology.input_size();
        let classes = topology.target(0).classes;
        assert_eq!(weights.len(), classes * input_size, "weight buffer size");
        assert_eq!(biases.len(), classes, "bias buffer size");
        FcEngine {
            input_size,
            classes,
            // Dot products accumulate input_size terms; shifting by
            // log2(input_size) keeps the scores near activation scale.
            rescale_bits: usize::BITS - (input_size.max(1) - 1).leading_zeros(),
            weights,
            biases,
        }
    }

    /// Build an engine with a deterministic weight pattern. Predictions are
    /// meaningless, but every arithmetic path of the contract runs.
    pub fn patterned(topology: &Topology) -> Self {
        let input_size = topology.input_size();
        let classes = topology.target(0).classes;
        let mut weights = Vec::with_capacity(classes * input_size);
        for c in 0..classes {
            for i in 0..input_size {
                let raw = ((c * 31 + i * 7) % 17) as i8 - 8;
                weights.push(F::weight_from_i8(raw));
            }
        }
        let biases = vec![F::Sum::ZERO; classes];
        FcEngine::new(topology, weights, biases)
    }
}

impl<F: Format> Engine<F> for FcEngine<F> {
    fn propagate(&self, input: &[F::Unsigned], output: &mut [Target]) -> F::Unsigned {
        assert_eq!(input.len(), self.input_size, "input buffer size");
        assert!(!output.is_empty(), "output buffer size");

        let mut best_class = 0usize;
        let mut best_score = F::Sum::ZERO;
        for c in 0..self.classes {
            let mut sum = self.biases[c];
            let row = &self.weights[c * self.input_size..(c + 1) * self.input_size];
            for (x, w) in input.iter().zip(row.iter()) {
                let product = F::widen_unsigned(*x).sat_mul(F::widen_weight(*w));
                sum = sum.sat_add(product);
            }
            let score = sum.rescale(self.rescale_bits);
            if c == 0 || score > best_score {
                best_score = score;
                best_class = c;
            }
        }

        output[0] = best_class as Target;
        for slot in output.iter_mut().skip(1) {
            *slot = 0;
        }
        F::saturate_unsigned(best_score)
    }
}
