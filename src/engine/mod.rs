/// Stand-in fully-connected backend.
mod fc;

pub use fc::FcEngine;

use crate::format::Format;
use crate::topology::Target;

/// Contract every generated network backend satisfies.
///
/// One forward pass over caller-allocated buffers: the engine reads the
/// input buffer (fully populated, values in the unsigned activation range),
/// writes one predicted label per element of the output buffer (sized to
/// the topology's `outputs_size` for target 0), and returns a credence
/// value in the unsigned activation range for its top prediction.
///
/// There is no error channel: `propagate` always completes with a full
/// output. Overflow inside internal accumulation saturates rather than
/// wraps. Engines retain no buffer across calls.
pub trait Engine<F: Format> {
    fn propagate(&self, input: &[F::Unsigned], output: &mut [Target]) -> F::Unsigned;
}
