use crate::autograd::{apply_rule, backward};
use crate::error::ScalarGradError;
use crate::var::Var;

impl<'g> Var<'g> {
    /// Computes the gradient of this node with respect to every node it depends on.
    ///
    /// Seeds `self.grad = 1.0` and accumulates into all ancestors. Gradients
    /// are never cleared automatically; see [`Graph::zero_grad`](crate::Graph::zero_grad).
    pub fn backward(&self) -> Result<(), ScalarGradError> {
        backward(self.graph, self.id)
    }

    /// Runs only this node's backward rule with its current gradient.
    pub fn backward_step(&self) -> Result<(), ScalarGradError> {
        apply_rule(self.graph, self.id)
    }

    /// Resets the gradient of this node only. Ancestors keep theirs; use
    /// [`Graph::zero_grad`](crate::Graph::zero_grad) to reset the whole graph.
    pub fn clear_grad(&self) {
        self.graph.write_nodes()[self.id.0].grad = 0.0;
    }

    /// Returns a new leaf holding this node's current value, with no history.
    pub fn detach(&self) -> Var<'g> {
        self.graph.var(self.value())
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
