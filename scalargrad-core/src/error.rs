use crate::node::Operation;
use thiserror::Error;

/// Custom error type for the scalargrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    #[error("Unknown node: id {id} is out of bounds for a graph of {len} nodes")]
    UnknownNode { id: usize, len: usize },

    #[error("Node belongs to a different graph")]
    ForeignNode,

    #[error("Cannot set the value of non-leaf node {id}: only leaves are mutable")]
    NonLeafMutation { id: usize },

    #[error("Non-finite input rejected for field '{field}': {value}")]
    NonFiniteInput { field: &'static str, value: f64 },

    #[error("Operation {operation:?} expects {expected} children, got {actual}")]
    ArityMismatch {
        operation: Operation,
        expected: usize,
        actual: usize,
    },
}
