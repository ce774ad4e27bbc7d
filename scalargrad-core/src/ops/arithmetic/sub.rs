use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{BinaryKind, NodeId};
use crate::operand::Operand;
use crate::ops::apply_binary_op;

/// Creates `a - b`.
///
/// Backward: `a` receives the output gradient, `b` its negation.
pub fn sub_op(
    graph: &Graph,
    a: impl Into<Operand>,
    b: impl Into<Operand>,
) -> Result<NodeId, ScalarGradError> {
    apply_binary_op(graph, BinaryKind::Sub, a, b)
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
