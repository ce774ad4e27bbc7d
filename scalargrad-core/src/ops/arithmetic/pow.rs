use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{BinaryKind, NodeId};
use crate::operand::Operand;
use crate::ops::apply_binary_op;

/// Creates `base ^ exponent` with a real exponent (`f64::powf`).
///
/// Backward:
/// * `grad_base = exponent * base^(exponent - 1) * grad`
/// * `grad_exponent = base^exponent * ln(base) * grad`
///
/// The exponent gradient is NaN for a negative base and the forward value is
/// NaN for a negative base with a fractional exponent. Neither is checked.
pub fn pow_op(
    graph: &Graph,
    base: impl Into<Operand>,
    exponent: impl Into<Operand>,
) -> Result<NodeId, ScalarGradError> {
    apply_binary_op(graph, BinaryKind::Pow, base, exponent)
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
