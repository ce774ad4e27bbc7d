use crate::autograd::backward_op::BackwardOp;
use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{Node, NodeId, Rule};

/// Orders the ancestors of `output` so that every node comes after all of its children.
///
/// Depth-first, post-order, children visited in operand order. Each node is
/// emitted once even when several parents reach it. The traversal keeps its
/// own stack, so deep chains do not grow the call stack.
pub fn topological_sort(graph: &Graph, output: NodeId) -> Result<Vec<NodeId>, ScalarGradError> {
    graph.check(output)?;
    let nodes = graph.read_nodes();
    Ok(build_topo(&nodes, output))
}

pub(crate) fn build_topo(nodes: &[Node], output: NodeId) -> Vec<NodeId> {
    // Ancestors always have a smaller id than `output`.
    let mut visited = vec![false; output.0 + 1];
    let mut sorted_list = Vec::new();
    let mut stack: Vec<(NodeId, usize)> = vec![(output, 0)];
    visited[output.0] = true;

    while let Some(frame) = stack.last_mut() {
        let (node_id, next_child) = *frame;
        match nodes[node_id.0].rule.child(next_child) {
            Some(child) => {
                frame.1 += 1;
                if !visited[child.0] {
                    visited[child.0] = true;
                    log::trace!("[build_topo] {} -> visiting child {}", node_id, child);
                    stack.push((child, 0));
                }
            }
            None => {
                stack.pop();
                sorted_list.push(node_id);
            }
        }
    }
    sorted_list
}

/// Adds the contributions of node `id` to the gradients of its operands.
/// Leaves and provenance-only nodes are left untouched.
pub(crate) fn propagate(nodes: &mut [Node], id: NodeId) {
    let grad_output = nodes[id.0].grad;
    match nodes[id.0].rule {
        Rule::Binary { left, right, kind } => {
            let inputs = (nodes[left.0].value, nodes[right.0].value);
            let (grad_left, grad_right) = kind.backward(inputs, grad_output);
            log::trace!(
                "[propagate] {} ({:?}): {} += {}, {} += {}",
                id,
                kind,
                left,
                grad_left,
                right,
                grad_right
            );
            nodes[left.0].grad += grad_left;
            nodes[right.0].grad += grad_right;
        }
        Rule::Unary { operand, kind } => {
            let grad_operand = kind.backward(nodes[operand.0].value, grad_output);
            log::trace!("[propagate] {} ({:?}): {} += {}", id, kind, operand, grad_operand);
            nodes[operand.0].grad += grad_operand;
        }
        Rule::Leaf | Rule::Opaque { .. } => {}
    }
}

/// Runs the backward rule of a single node using its current gradient.
///
/// This is one step of [`backward`]; nothing is seeded and no other node is visited.
pub fn apply_rule(graph: &Graph, id: NodeId) -> Result<(), ScalarGradError> {
    graph.check(id)?;
    propagate(&mut graph.write_nodes(), id);
    Ok(())
}

/// Computes the gradient of `output` with respect to every node it depends on.
///
/// Sets `output.grad = 1.0` (overwriting it), then applies every rule in
/// reverse topological order. Gradients of other nodes are accumulated onto
/// whatever they already hold; call [`Graph::zero_grad`] first to start from
/// a clean state.
///
/// # Errors
/// Returns `ForeignNode` if `output` was created by another graph.
pub fn backward(graph: &Graph, output: NodeId) -> Result<(), ScalarGradError> {
    graph.check(output)?;
    let mut nodes = graph.write_nodes();
    nodes[output.0].grad = 1.0;

    if nodes[output.0].is_leaf() {
        log::debug!("backward() called on leaf {}. No operation to perform.", output);
        return Ok(());
    }

    let sorted_nodes = build_topo(&nodes, output);
    log::debug!(
        "backward() from {}: {} nodes in topological order",
        output,
        sorted_nodes.len()
    );
    for node_id in sorted_nodes.into_iter().rev() {
        propagate(&mut nodes, node_id);
    }
    Ok(())
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
