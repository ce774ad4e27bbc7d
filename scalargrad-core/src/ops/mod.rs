//! # Graph Operations Module (`ops`)
//!
//! Construction routines for every differentiable operation of the engine.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** Each operation has a function named `xxx_op` taking the
//!   [`Graph`] and its operands. It coerces the operands to nodes (plain numbers
//!   become fresh leaves), computes the forward value and appends the output node
//!   together with its backward rule.
//! - **Backward rules:** The chain-rule step of each operation lives with its
//!   kind in [`BackwardOp`](crate::autograd::BackwardOp).
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, div, pow, neg.
//! - [`activation`]: relu.

pub mod activation;
pub mod arithmetic;

pub use activation::relu_op;
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};

use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{BinaryKind, NodeId, Rule, UnaryKind};
use crate::operand::Operand;

/// Applies a two-operand operation: output children are `(a, b)` in that order.
/// On error no node is added.
pub(crate) fn apply_binary_op(
    graph: &Graph,
    kind: BinaryKind,
    a: impl Into<Operand>,
    b: impl Into<Operand>,
) -> Result<NodeId, ScalarGradError> {
    let [left, right] = graph.coerce_all([a.into(), b.into()])?;
    Ok(push_binary(graph, kind, left, right))
}

/// Applies a single-operand operation.
pub(crate) fn apply_unary_op(
    graph: &Graph,
    kind: UnaryKind,
    a: impl Into<Operand>,
) -> Result<NodeId, ScalarGradError> {
    let operand = graph.coerce(a)?;
    Ok(push_unary(graph, kind, operand))
}

/// Appends `left <kind> right`; both ids must already belong to `graph`.
pub(crate) fn push_binary(graph: &Graph, kind: BinaryKind, left: NodeId, right: NodeId) -> NodeId {
    let value = {
        let nodes = graph.read_nodes();
        kind.forward(nodes[left.0].value, nodes[right.0].value)
    };
    graph.push_result(value, Rule::Binary { left, right, kind })
}

/// Appends `<kind>(operand)`; `operand` must already belong to `graph`.
pub(crate) fn push_unary(graph: &Graph, kind: UnaryKind, operand: NodeId) -> NodeId {
    let value = kind.forward(graph.read_nodes()[operand.0].value);
    graph.push_result(value, Rule::Unary { operand, kind })
}
