use scalargrad_core::{Graph, NodeId};

/// Builds `d = (a + b) + (a * b)` and returns `[a, b, a + b, a * b, d]`.
// Added allow(dead_code) because usage across different test crates isn't detected easily.
#[allow(dead_code)]
pub fn build_diamond(graph: &Graph, a: f64, b: f64) -> [NodeId; 5] {
    let a = graph.create_leaf(a);
    let b = graph.create_leaf(b);
    let sum = scalargrad_core::ops::add_op(graph, a, b).expect("add failed");
    let prod = scalargrad_core::ops::mul_op(graph, a, b).expect("mul failed");
    let d = scalargrad_core::ops::add_op(graph, sum, prod).expect("add failed");
    [a, b, sum, prod, d]
}
