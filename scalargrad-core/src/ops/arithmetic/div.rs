use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{BinaryKind, NodeId};
use crate::operand::Operand;
use crate::ops::apply_binary_op;

/// Creates `a / b`.
///
/// Backward: `grad_a = grad / b`, `grad_b = -(a * grad) / b^2`.
///
/// A zero divisor is not rejected: the forward value and both gradients
/// follow IEEE-754 and become infinite or NaN.
pub fn div_op(
    graph: &Graph,
    a: impl Into<Operand>,
    b: impl Into<Operand>,
) -> Result<NodeId, ScalarGradError> {
    apply_binary_op(graph, BinaryKind::Div, a, b)
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
