//! Reverse-mode differentiation over a [`Graph`](crate::graph::Graph).
//!
//! [`backward`] seeds the output gradient with `1.0`, orders the graph
//! topologically and replays every node's [`BackwardOp`] in reverse order so
//! that each node has received all of its upstream contributions before it
//! distributes its own gradient.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::BackwardOp;
pub use graph::{apply_rule, backward, topological_sort};
