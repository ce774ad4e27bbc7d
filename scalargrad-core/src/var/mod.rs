use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::{NodeId, Operation};

mod arithmetic;
mod autograd_methods;
mod debug;

pub use arithmetic::VarOperand;

/// Handle to one node of a [`Graph`], with operator overloading.
///
/// `Var` is `Copy`: it is just a reference to the graph plus a [`NodeId`].
/// Every arithmetic expression appends new nodes to the same graph, so a
/// computation reads like plain `f64` code:
///
/// ```
/// use scalargrad_core::Graph;
///
/// let graph = Graph::new();
/// let a = graph.var(3.0);
/// let b = graph.var(4.0);
/// let c = a * a + a * b;
/// c.backward().unwrap();
/// assert_eq!(c.value(), 21.0);
/// assert_eq!(a.grad(), 10.0);
/// assert_eq!(b.grad(), 3.0);
/// ```
#[derive(Clone, Copy)]
pub struct Var<'g> {
    pub(crate) graph: &'g Graph,
    pub(crate) id: NodeId,
}

impl Graph {
    /// Creates a leaf and returns a handle to it.
    pub fn var(&self, value: f64) -> Var<'_> {
        Var {
            graph: self,
            id: self.create_leaf(value),
        }
    }

    /// Returns a handle to an existing node.
    pub fn wrap(&self, id: NodeId) -> Result<Var<'_>, ScalarGradError> {
        self.check(id)?;
        Ok(Var { graph: self, id })
    }
}

// A `Var` always holds an id that was validated against its graph, and the
// arena never shrinks, so the accessors below index directly.
impl<'g> Var<'g> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn value(&self) -> f64 {
        self.graph.read_nodes()[self.id.0].value
    }

    pub fn grad(&self) -> f64 {
        self.graph.read_nodes()[self.id.0].grad
    }

    pub fn operation(&self) -> Operation {
        self.graph.read_nodes()[self.id.0].operation()
    }

    pub fn is_leaf(&self) -> bool {
        self.graph.read_nodes()[self.id.0].is_leaf()
    }

    /// Direct operands of this node, in operand order.
    pub fn children(&self) -> Vec<Var<'g>> {
        self.graph.read_nodes()[self.id.0]
            .children()
            .into_iter()
            .map(|id| Var {
                graph: self.graph,
                id,
            })
            .collect()
    }

    /// See [`Graph::set_value`].
    pub fn set_value(&self, value: f64) -> Result<(), ScalarGradError> {
        self.graph.set_value(self.id, value)
    }

    /// See [`Graph::set_grad`].
    pub fn set_grad(&self, grad: f64) -> Result<(), ScalarGradError> {
        self.graph.set_grad(self.id, grad)
    }

    /// Whether both handles point at the same node of the same graph.
    pub fn same_node(&self, other: &Var<'_>) -> bool {
        std::ptr::eq(self.graph, other.graph) && self.id == other.id
    }
}

impl PartialEq for Var<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.same_node(other)
    }
}

impl Eq for Var<'_> {}
