use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{BinaryKind, NodeId};
use crate::operand::Operand;
use crate::ops::apply_binary_op;

/// Creates `a + b`.
///
/// Backward: both operands receive the output gradient unchanged.
pub fn add_op(
    graph: &Graph,
    a: impl Into<Operand>,
    b: impl Into<Operand>,
) -> Result<NodeId, ScalarGradError> {
    apply_binary_op(graph, BinaryKind::Add, a, b)
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
