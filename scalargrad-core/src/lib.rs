//! # scalargrad-core
//!
//! A scalar reverse-mode automatic differentiation engine. Every number is a
//! node in a computation graph built as the computation runs; a single
//! `backward` call propagates gradients from an output to every node that
//! contributed to it.
//!
//! ```
//! use scalargrad_core::Graph;
//!
//! let graph = Graph::new();
//! let x = graph.var(2.0);
//! let y = graph.var(3.0);
//! let z = (x * y + x.pow(2.0)).relu();
//! z.backward().unwrap();
//! assert_eq!(z.value(), 10.0);
//! assert_eq!(x.grad(), 7.0); // y + 2x
//! assert_eq!(y.grad(), 2.0); // x
//! ```

pub mod autograd;
pub mod config;
pub mod error;
pub mod graph;
pub mod node;
pub mod operand;
pub mod ops;
pub mod utils;
pub mod var;

pub use autograd::{backward, topological_sort};
pub use config::GraphConfig;
pub use error::ScalarGradError;
pub use graph::Graph;
pub use node::{NodeId, Operation};
pub use operand::Operand;
pub use var::Var;
