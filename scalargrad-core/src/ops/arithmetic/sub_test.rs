use super::*;
use crate::error::ScalarGradError;
use crate::utils::testing::check_grads;

#[test]
fn test_sub_forward_and_backward() {
    let graph = Graph::new();
    let a = graph.create_leaf(5.0);
    let b = graph.create_leaf(3.0);
    let c = sub_op(&graph, a, b).unwrap();
    assert_eq!(graph.value(c).unwrap(), 2.0);
    check_grads(&graph, c, &[a, b], &[1.0, -1.0], 1e-12);
}

#[test]
fn test_sub_reflected_literal() {
    let graph = Graph::new();
    let b = graph.create_leaf(3.0);
    let c = sub_op(&graph, 10.0, b).unwrap();
    assert_eq!(graph.value(c).unwrap(), 7.0);
    check_grads(&graph, c, &[b], &[-1.0], 1e-12);
}

#[test]
fn test_sub_foreign_operand_leaves_graph_unchanged() {
    let graph = Graph::new();
    let other = Graph::new();
    other.create_leaf(0.0);
    let foreign = other.create_leaf(0.0);
    let result = sub_op(&graph, 1.0, foreign);
    assert_eq!(result, Err(ScalarGradError::ForeignNode));
    assert_eq!(graph.len(), 0);

    // A failed call must not leave a node behind for the foreign id to hit.
    assert_eq!(sub_op(&graph, 2.0, foreign), Err(ScalarGradError::ForeignNode));
    assert!(graph.is_empty());
}

#[test]
fn test_sub_out_of_range_operand() {
    let graph = Graph::new();
    let a = graph.create_leaf(1.0);
    let missing = NodeId(4, graph.tag());
    assert_eq!(
        sub_op(&graph, a, missing),
        Err(ScalarGradError::UnknownNode { id: 4, len: 1 })
    );
    assert_eq!(graph.len(), 1);
}
