use crate::config::GraphConfig;
use crate::error::ScalarGradError;
use crate::node::{BinaryKind, Node, NodeId, Operation, Rule, UnaryKind};
use std::cell::{Ref, RefCell, RefMut};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_GRAPH_TAG: AtomicU64 = AtomicU64::new(1);

/// Arena owning every node of one computation.
///
/// Nodes are appended as the computation runs and are addressed by
/// [`NodeId`]. Because a node can only reference nodes that already exist,
/// the child relation is acyclic by construction. Dropping the graph frees
/// all of its nodes at once.
///
/// The arena sits behind a `RefCell` so that handles holding a shared
/// `&Graph` can keep building on it. This also makes `Graph` `!Sync`.
#[derive(Debug)]
pub struct Graph {
    nodes: RefCell<Vec<Node>>,
    config: GraphConfig,
    tag: u64,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Graph {
            nodes: RefCell::new(Vec::with_capacity(config.capacity)),
            config,
            tag: NEXT_GRAPH_TAG.fetch_add(1, Ordering::Relaxed),
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.nodes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.borrow().is_empty()
    }

    /// Borrows the arena for reading.
    pub(crate) fn read_nodes(&self) -> Ref<'_, Vec<Node>> {
        self.nodes.borrow()
    }

    /// Borrows the arena for writing.
    pub(crate) fn write_nodes(&self) -> RefMut<'_, Vec<Node>> {
        self.nodes.borrow_mut()
    }

    /// Tag stamped into every [`NodeId`] this graph hands out.
    pub(crate) fn tag(&self) -> u64 {
        self.tag
    }

    /// Returns an error unless `id` addresses a node of this graph.
    pub(crate) fn check(&self, id: NodeId) -> Result<(), ScalarGradError> {
        if id.1 != self.tag {
            return Err(ScalarGradError::ForeignNode);
        }
        let len = self.len();
        if id.0 < len {
            Ok(())
        } else {
            Err(ScalarGradError::UnknownNode { id: id.0, len })
        }
    }

    fn push(&self, node: Node) -> NodeId {
        let mut nodes = self.write_nodes();
        nodes.push(node);
        NodeId(nodes.len() - 1, self.tag)
    }

    /// Creates an input or constant node: gradient 0, no children, no rule.
    pub fn create_leaf(&self, value: f64) -> NodeId {
        self.push(Node::leaf(value))
    }

    /// Creates a node with an explicit value, operation and child list.
    ///
    /// The backward rule is bound from `operation`. `Operation::None` accepts
    /// any number of children and records them as provenance only.
    ///
    /// # Errors
    /// * `ArityMismatch` if the child count does not fit `operation`.
    /// * `ForeignNode` if a child was created by another graph.
    /// * `UnknownNode` if a child is out of range.
    pub fn create_result(
        &self,
        value: f64,
        operation: Operation,
        children: &[NodeId],
    ) -> Result<NodeId, ScalarGradError> {
        for child in children {
            self.check(*child)?;
        }
        if let Some(expected) = operation.arity() {
            if expected != children.len() {
                return Err(ScalarGradError::ArityMismatch {
                    operation,
                    expected,
                    actual: children.len(),
                });
            }
        }

        let rule = match operation {
            Operation::None if children.is_empty() => Rule::Leaf,
            Operation::None => Rule::Opaque {
                children: children.to_vec(),
            },
            Operation::Add => binary(children, BinaryKind::Add),
            Operation::Sub => binary(children, BinaryKind::Sub),
            Operation::Mul => binary(children, BinaryKind::Mul),
            Operation::Div => binary(children, BinaryKind::Div),
            Operation::Pow => binary(children, BinaryKind::Pow),
            Operation::Neg => unary(children, UnaryKind::Neg),
            Operation::Relu => unary(children, UnaryKind::Relu),
        };
        Ok(self.push_result(value, rule))
    }

    /// Appends an operation output whose children have already been validated.
    pub(crate) fn push_result(&self, value: f64, rule: Rule) -> NodeId {
        let operation = rule.operation();
        let id = self.push(Node::with_rule(value, rule));
        if self.config.warn_non_finite && !value.is_finite() {
            log::warn!(
                "Operation '{}' produced non-finite value {} at node {}",
                operation,
                value,
                id
            );
        }
        id
    }

    /// Returns a copy of the node stored at `id`.
    pub fn node(&self, id: NodeId) -> Result<Node, ScalarGradError> {
        self.check(id)?;
        Ok(self.read_nodes()[id.0].clone())
    }

    pub fn value(&self, id: NodeId) -> Result<f64, ScalarGradError> {
        self.check(id)?;
        Ok(self.read_nodes()[id.0].value)
    }

    pub fn grad(&self, id: NodeId) -> Result<f64, ScalarGradError> {
        self.check(id)?;
        Ok(self.read_nodes()[id.0].grad)
    }

    pub fn operation(&self, id: NodeId) -> Result<Operation, ScalarGradError> {
        self.check(id)?;
        Ok(self.read_nodes()[id.0].operation())
    }

    /// Direct operands of `id`, in operand order.
    pub fn children(&self, id: NodeId) -> Result<Vec<NodeId>, ScalarGradError> {
        self.check(id)?;
        Ok(self.read_nodes()[id.0].children())
    }

    pub fn is_leaf(&self, id: NodeId) -> Result<bool, ScalarGradError> {
        self.check(id)?;
        Ok(self.read_nodes()[id.0].is_leaf())
    }

    /// Overwrites the value of a leaf.
    ///
    /// # Errors
    /// * `NonLeafMutation` if `id` was produced by an operation.
    /// * `NonFiniteInput` if `value` is NaN or infinite and the graph rejects those.
    pub fn set_value(&self, id: NodeId, value: f64) -> Result<(), ScalarGradError> {
        self.check(id)?;
        self.check_finite("value", value)?;
        let mut nodes = self.write_nodes();
        let node = &mut nodes[id.0];
        if !node.is_leaf() {
            return Err(ScalarGradError::NonLeafMutation { id: id.0 });
        }
        node.value = value;
        Ok(())
    }

    /// Overwrites the gradient of any node (e.g. to seed or reset it).
    pub fn set_grad(&self, id: NodeId, grad: f64) -> Result<(), ScalarGradError> {
        self.check(id)?;
        self.check_finite("grad", grad)?;
        self.write_nodes()[id.0].grad = grad;
        Ok(())
    }

    fn check_finite(&self, field: &'static str, value: f64) -> Result<(), ScalarGradError> {
        if self.config.reject_non_finite && !value.is_finite() {
            return Err(ScalarGradError::NonFiniteInput { field, value });
        }
        Ok(())
    }

    /// Resets the gradient of every node to 0.0.
    ///
    /// `backward` never clears gradients itself; call this before running it
    /// again on the same graph.
    pub fn zero_grad(&self) {
        for node in self.write_nodes().iter_mut() {
            node.grad = 0.0;
        }
    }

    /// Creates a new leaf holding the current value of `id`, cut off from its history.
    pub fn detach(&self, id: NodeId) -> Result<NodeId, ScalarGradError> {
        let value = self.value(id)?;
        Ok(self.create_leaf(value))
    }
}

fn binary(children: &[NodeId], kind: BinaryKind) -> Rule {
    Rule::Binary {
        left: children[0],
        right: children[1],
        kind,
    }
}

fn unary(children: &[NodeId], kind: UnaryKind) -> Rule {
    Rule::Unary {
        operand: children[0],
        kind,
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
