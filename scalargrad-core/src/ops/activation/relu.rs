use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{NodeId, UnaryKind};
use crate::operand::Operand;
use crate::ops::apply_unary_op;

/// Applies the Rectified Linear Unit: `relu(a) = max(a, 0)`.
///
/// Backward: the gradient passes through where `a > 0` and is blocked
/// elsewhere, including at exactly 0.
pub fn relu_op(graph: &Graph, a: impl Into<Operand>) -> Result<NodeId, ScalarGradError> {
    apply_unary_op(graph, UnaryKind::Relu, a)
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
