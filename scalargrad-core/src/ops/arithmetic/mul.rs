use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{BinaryKind, NodeId};
use crate::operand::Operand;
use crate::ops::apply_binary_op;

/// Creates `a * b`.
///
/// Backward: `grad_a = grad * b`, `grad_b = grad * a`. Squaring a node
/// (`mul_op(g, a, a)`) therefore gives `a` both contributions.
pub fn mul_op(
    graph: &Graph,
    a: impl Into<Operand>,
    b: impl Into<Operand>,
) -> Result<NodeId, ScalarGradError> {
    apply_binary_op(graph, BinaryKind::Mul, a, b)
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
