use super::*;
use crate::node::Operation;
use crate::ops::{add_op, mul_op, neg_op};
use approx::assert_relative_eq;

fn position(order: &[NodeId], id: NodeId) -> usize {
    order
        .iter()
        .position(|n| *n == id)
        .expect("node missing from topological order")
}

#[test]
fn test_topological_sort_diamond() {
    // d = (a + b) + (a * b)
    let graph = Graph::new();
    let a = graph.create_leaf(2.0);
    let b = graph.create_leaf(3.0);
    let sum = add_op(&graph, a, b).unwrap();
    let prod = mul_op(&graph, a, b).unwrap();
    let d = add_op(&graph, sum, prod).unwrap();

    let order = topological_sort(&graph, d).unwrap();
    assert_eq!(order.len(), 5);
    for id in [a, b, sum, prod, d] {
        assert_eq!(order.iter().filter(|n| **n == id).count(), 1);
    }
    for id in &order {
        for child in graph.children(*id).unwrap() {
            assert!(position(&order, child) < position(&order, *id));
        }
    }
    assert_eq!(order, vec![a, b, sum, prod, d]);
    assert_eq!(*order.last().unwrap(), d);
}

#[test]
fn test_topological_sort_only_reaches_ancestors() {
    let graph = Graph::new();
    let a = graph.create_leaf(1.0);
    let b = graph.create_leaf(2.0);
    let unrelated = graph.create_leaf(5.0);
    let c = add_op(&graph, a, b).unwrap();
    let _later = mul_op(&graph, c, unrelated).unwrap();

    let order = topological_sort(&graph, c).unwrap();
    assert_eq!(order, vec![a, b, c]);
}

#[test]
fn test_backward_seed_and_leaf() {
    let graph = Graph::new();
    let a = graph.create_leaf(4.0);
    graph.set_grad(a, 7.0).unwrap();
    backward(&graph, a).unwrap();
    assert_eq!(graph.grad(a).unwrap(), 1.0);
}

#[test]
fn test_backward_accumulates_shared_operand() {
    // c = a*a + a*b at a=3, b=4 -> dc/da = 2a + b = 10, dc/db = a = 3
    let graph = Graph::new();
    let a = graph.create_leaf(3.0);
    let b = graph.create_leaf(4.0);
    let aa = mul_op(&graph, a, a).unwrap();
    let ab = mul_op(&graph, a, b).unwrap();
    let c = add_op(&graph, aa, ab).unwrap();

    backward(&graph, c).unwrap();
    assert_eq!(graph.grad(c).unwrap(), 1.0);
    assert_relative_eq!(graph.grad(a).unwrap(), 10.0);
    assert_relative_eq!(graph.grad(b).unwrap(), 3.0);
}

#[test]
fn test_backward_twice_doubles_without_reset() {
    let graph = Graph::new();
    let a = graph.create_leaf(3.0);
    let b = graph.create_leaf(4.0);
    let c = mul_op(&graph, a, b).unwrap();

    backward(&graph, c).unwrap();
    let (first_a, first_b) = (graph.grad(a).unwrap(), graph.grad(b).unwrap());
    backward(&graph, c).unwrap();
    assert_relative_eq!(graph.grad(a).unwrap(), 2.0 * first_a);
    assert_relative_eq!(graph.grad(b).unwrap(), 2.0 * first_b);
    assert_eq!(graph.grad(c).unwrap(), 1.0);

    graph.zero_grad();
    backward(&graph, c).unwrap();
    assert_relative_eq!(graph.grad(a).unwrap(), first_a);
}

#[test]
fn test_backward_deep_chain() {
    let graph = Graph::new();
    let x = graph.create_leaf(1.0);
    let mut y = x;
    for _ in 0..200_000 {
        y = neg_op(&graph, y).unwrap();
    }
    backward(&graph, y).unwrap();
    assert_eq!(graph.value(y).unwrap(), 1.0);
    assert_eq!(graph.grad(x).unwrap(), 1.0);
}

#[test]
fn test_backward_skips_provenance_nodes() {
    let graph = Graph::new();
    let a = graph.create_leaf(1.0);
    let b = graph.create_leaf(2.0);
    let c = graph.create_result(3.0, Operation::None, &[a, b]).unwrap();
    backward(&graph, c).unwrap();
    assert_eq!(graph.grad(c).unwrap(), 1.0);
    assert_eq!(graph.grad(a).unwrap(), 0.0);
    assert_eq!(graph.grad(b).unwrap(), 0.0);
    assert_eq!(topological_sort(&graph, c).unwrap(), vec![a, b, c]);
}

#[test]
fn test_apply_rule_single_step() {
    let graph = Graph::new();
    let a = graph.create_leaf(2.0);
    let b = graph.create_leaf(3.0);
    let c = mul_op(&graph, a, b).unwrap();
    let d = neg_op(&graph, c).unwrap();

    graph.set_grad(c, 2.0).unwrap();
    apply_rule(&graph, c).unwrap();
    assert_eq!(graph.grad(a).unwrap(), 6.0);
    assert_eq!(graph.grad(b).unwrap(), 4.0);
    // The consumer of c was not touched.
    assert_eq!(graph.grad(d).unwrap(), 0.0);

    // Leaves have nothing to apply.
    apply_rule(&graph, a).unwrap();
    assert_eq!(graph.grad(b).unwrap(), 4.0);
}

#[test]
fn test_backward_foreign_output() {
    let graph = Graph::new();
    graph.create_leaf(0.0);
    graph.create_leaf(0.0);
    let other = Graph::new();
    other.create_leaf(0.0);
    let foreign = other.create_leaf(1.0);
    assert_eq!(
        backward(&graph, foreign),
        Err(ScalarGradError::ForeignNode)
    );
    assert_eq!(graph.grad(NodeId(1, graph.tag())).unwrap(), 0.0);
    assert_eq!(
        backward(&graph, NodeId(5, graph.tag())),
        Err(ScalarGradError::UnknownNode { id: 5, len: 2 })
    );
    assert!(topological_sort(&graph, foreign).is_err());
    assert!(apply_rule(&graph, foreign).is_err());
}
