use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{NodeId, UnaryKind};
use crate::operand::Operand;
use crate::ops::apply_unary_op;

/// Creates `-a`. The output has a single child.
pub fn neg_op(graph: &Graph, a: impl Into<Operand>) -> Result<NodeId, ScalarGradError> {
    apply_unary_op(graph, UnaryKind::Neg, a)
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
