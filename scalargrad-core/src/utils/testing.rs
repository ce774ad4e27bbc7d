use crate::autograd::backward;
use crate::graph::Graph;
use crate::node::NodeId;

/// Checks that a scalar is approximately equal to the expected value.
/// Panics if the difference exceeds `tolerance`.
pub fn check_near(actual: f64, expected: f64, tolerance: f64) {
    let diff = (actual - expected).abs();
    if !(diff <= tolerance) {
        panic!(
            "Value mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual, expected, diff, tolerance
        );
    }
}

/// Runs `backward` from `output` and checks the gradient of each node in `inputs`.
/// Panics on an unknown node or a gradient outside `tolerance`.
pub fn check_grads(
    graph: &Graph,
    output: NodeId,
    inputs: &[NodeId],
    expected_grads: &[f64],
    tolerance: f64,
) {
    assert_eq!(inputs.len(), expected_grads.len(), "Input count mismatch");
    backward(graph, output).expect("backward failed in check_grads");
    for (i, (id, expected)) in inputs.iter().zip(expected_grads.iter()).enumerate() {
        let actual = graph.grad(*id).expect("Failed to read gradient in check_grads");
        let diff = (actual - expected).abs();
        if !(diff <= tolerance) {
            panic!(
                "Gradient mismatch for input {} ({}): actual={:?}, expected={:?}, diff={:?}",
                i, id, actual, expected, diff
            );
        }
    }
}
