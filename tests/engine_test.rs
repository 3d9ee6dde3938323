use qinfer::engine::{Engine, FcEngine};
use qinfer::format::{Fixed8, Single};
use qinfer::topology::Topology;

#[test]
fn patterned_engine_fills_the_output_buffer() {
    let topo = Topology::mnist_24x24();
    let engine = FcEngine::<Fixed8>::patterned(&topo);

    let input = vec![128u8; topo.input_size()];
    let mut output = vec![-1i32; topo.outputs_size(0)];
    let credence = engine.propagate(&input, &mut output);

    assert!(output[0] >= 0 && output[0] < topo.target(0).classes as i32);
    // credence lives in the unsigned activation range by construction
    let _ = credence;
}

#[test]
fn patterned_engine_is_deterministic() {
    let topo = Topology::mnist_24x24();
    let engine = FcEngine::<Fixed8>::patterned(&topo);

    let input: Vec<u8> = (0..topo.input_size()).map(|i| (i % 251) as u8).collect();
    let mut first = vec![0i32; 1];
    let mut second = vec![0i32; 1];
    let c1 = engine.propagate(&input, &mut first);
    let c2 = engine.propagate(&input, &mut second);

    assert_eq!(first, second);
    assert_eq!(c1, c2);
}

#[test]
fn extreme_inputs_saturate_rather_than_wrap() {
    let topo = Topology::mnist_24x24();
    let classes = topo.target(0).classes;
    let weights = vec![i8::MAX; classes * topo.input_size()];
    let biases = vec![0i32; classes];
    let engine = FcEngine::<Fixed8>::new(&topo, weights, biases);

    let input = vec![255u8; topo.input_size()];
    let mut output = vec![0i32; 1];
    let credence = engine.propagate(&input, &mut output);

    // Scores blow far past the unsigned activation range; the credence
    // clamps to its top instead of wrapping.
    assert_eq!(credence, u8::MAX);
    assert!(output[0] >= 0);
}

#[test]
fn float_backend_runs_the_same_contract() {
    let topo = Topology::mnist_24x24();
    let engine = FcEngine::<Single>::patterned(&topo);

    let input = vec![0.5f32; topo.input_size()];
    let mut output = vec![0i32; 1];
    let credence = engine.propagate(&input, &mut output);

    assert!(output[0] >= 0 && output[0] < topo.target(0).classes as i32);
    assert!((0.0..=1.0).contains(&credence));
}
