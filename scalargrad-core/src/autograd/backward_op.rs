use crate::node::{BinaryKind, UnaryKind};

/// Chain-rule step of a differentiable operation.
///
/// Any operation that creates a non-leaf node has an implementation of this
/// trait. Given the forward values of its operands and the gradient flowing
/// into its output (dL/dOutput), it returns the contribution to add to each
/// operand's gradient (dL/dInput_i). The returned contributions are in the
/// same order as the operands; callers accumulate them with `+=`.
pub trait BackwardOp {
    /// Operand values on the way in, gradient contributions on the way out.
    type Inputs;

    fn backward(&self, inputs: Self::Inputs, grad_output: f64) -> Self::Inputs;
}

impl BackwardOp for BinaryKind {
    type Inputs = (f64, f64);

    fn backward(&self, (a, b): (f64, f64), grad: f64) -> (f64, f64) {
        match self {
            BinaryKind::Add => (grad, grad),
            BinaryKind::Sub => (grad, -grad),
            BinaryKind::Mul => (b * grad, a * grad),
            BinaryKind::Div => (grad / b, -(a * grad) / (b * b)),
            // ln(a) is NaN for a < 0; left unchecked on purpose.
            BinaryKind::Pow => (b * a.powf(b - 1.0) * grad, a.powf(b) * a.ln() * grad),
        }
    }
}

impl BackwardOp for UnaryKind {
    type Inputs = f64;

    fn backward(&self, a: f64, grad: f64) -> f64 {
        match self {
            UnaryKind::Neg => -grad,
            UnaryKind::Relu => {
                let local = if a > 0.0 { 1.0 } else { 0.0 };
                local * grad
            }
        }
    }
}
