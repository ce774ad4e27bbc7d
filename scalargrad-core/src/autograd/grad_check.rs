use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::var::Var;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(ScalarGradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Graph error during gradient check: {0}")]
    GraphError(ScalarGradError),
}

impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::GraphError(err)
    }
}

/// Checks analytical gradients against numerical gradients using central finite differences.
///
/// `func` builds the computation on a fresh graph from one leaf per entry of
/// `inputs` and returns the output node. It is called once for the analytical
/// pass and twice per input for the numerical estimate
/// `(f(x + eps) - f(x - eps)) / (2 * eps)`. Gradients are accepted when they
/// agree within `tolerance`, absolutely or relatively.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: for<'g> Fn(&'g Graph, &[Var<'g>]) -> Result<Var<'g>, ScalarGradError>,
{
    let graph = Graph::new();
    let leaves: Vec<Var<'_>> = inputs.iter().map(|&x| graph.var(x)).collect();
    let output = func(&graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
    output
        .backward()
        .map_err(GradCheckError::BackwardPassError)?;

    for (i, leaf) in leaves.iter().enumerate() {
        let analytical_grad = leaf.grad();
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let mut inputs_plus = inputs.to_vec();
        inputs_plus[i] += epsilon;
        let loss_plus = evaluate(&func, &inputs_plus)?;

        let mut inputs_minus = inputs.to_vec();
        inputs_minus[i] -= epsilon;
        let loss_minus = evaluate(&func, &inputs_minus)?;

        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }

        log::trace!(
            "[check_grad] input {}: analytical {} numerical {}",
            i,
            analytical_grad,
            numerical_grad
        );
        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}

/// Forward value of `func` on a fresh graph built from `inputs`.
fn evaluate<F>(func: &F, inputs: &[f64]) -> Result<f64, GradCheckError>
where
    F: for<'g> Fn(&'g Graph, &[Var<'g>]) -> Result<Var<'g>, ScalarGradError>,
{
    let graph = Graph::new();
    let leaves: Vec<Var<'_>> = inputs.iter().map(|&x| graph.var(x)).collect();
    let output = func(&graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
    Ok(output.value())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_grad_polynomial() {
        // f(x, y) = x^2 * y + y^3
        let result = check_grad(
            |_graph, x| {
                let square = x[0].pow(2.0);
                Ok(square * x[1] + x[1].pow(3.0))
            },
            &[2.0, 3.0],
            1e-6,
            1e-4,
        );
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_check_grad_division_and_relu() {
        let result = check_grad(
            |_graph, x| Ok((x[0] / x[1]).relu() - x[0] * 0.5),
            &[6.0, 3.0],
            1e-6,
            1e-4,
        );
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_check_grad_detects_wrong_gradient() {
        // The detached copy hides one use of x from backward, but finite
        // differences still see it.
        let result = check_grad(
            |graph, x| {
                let frozen = graph.wrap(graph.detach(x[0].id())?)?;
                Ok(frozen * x[0])
            },
            &[3.0],
            1e-6,
            1e-4,
        );
        match result {
            Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                ..
            }) => {
                assert_eq!(input_index, 0);
                assert_eq!(analytical_grad, 3.0);
            }
            other => panic!("Expected GradientMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_check_grad_non_finite_analytical() {
        // d/dy of x^y involves ln(x), NaN for negative x.
        let result = check_grad(
            |_graph, x| Ok(x[0].pow(x[1])),
            &[-2.0, 2.0],
            1e-6,
            1e-4,
        );
        assert!(matches!(
            result,
            Err(GradCheckError::AnalyticalGradNaNOrInfinite { input_index: 1, .. })
        ));
    }

    #[test]
    fn test_check_grad_forward_error() {
        let result = check_grad(
            |graph, _x| {
                let elsewhere = Graph::new();
                graph.wrap(elsewhere.create_leaf(1.0))
            },
            &[1.0],
            1e-6,
            1e-4,
        );
        assert!(matches!(result, Err(GradCheckError::ForwardPassError(_))));
    }
}
