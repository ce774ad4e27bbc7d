use std::fmt;

/// Index of a node inside its [`Graph`](crate::graph::Graph) arena, tagged
/// with the graph that created it.
///
/// Ids are handed out in creation order, so every child id is strictly
/// smaller than the id of the node that consumes it. Two graphs never share
/// a tag, so an id presented to the wrong graph is rejected instead of
/// aliasing whatever node sits at the same index.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize, pub(crate) u64);

impl NodeId {
    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Operations with two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryKind {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryKind {
    /// Forward value of `a <op> b`.
    pub fn forward(self, a: f64, b: f64) -> f64 {
        match self {
            BinaryKind::Add => a + b,
            BinaryKind::Sub => a - b,
            BinaryKind::Mul => a * b,
            BinaryKind::Div => a / b,
            BinaryKind::Pow => a.powf(b),
        }
    }
}

/// Operations with a single operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryKind {
    Neg,
    Relu,
}

impl UnaryKind {
    pub fn forward(self, a: f64) -> f64 {
        match self {
            UnaryKind::Neg => -a,
            // NaN is not > 0, so it maps to 0.
            UnaryKind::Relu => {
                if a > 0.0 {
                    a
                } else {
                    0.0
                }
            }
        }
    }
}

/// Tag identifying how a node was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    None,
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Neg,
    Relu,
}

impl Operation {
    /// Short symbol used when printing a node's provenance.
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::None => "",
            Operation::Add => "+",
            Operation::Sub => "-",
            Operation::Mul => "*",
            Operation::Div => "/",
            Operation::Pow => "^",
            Operation::Neg => "~",
            Operation::Relu => "R",
        }
    }

    /// Number of operands the operation consumes, `None` when any count is accepted.
    pub fn arity(self) -> Option<usize> {
        match self {
            Operation::None => None,
            Operation::Neg | Operation::Relu => Some(1),
            _ => Some(2),
        }
    }
}

impl From<BinaryKind> for Operation {
    fn from(kind: BinaryKind) -> Self {
        match kind {
            BinaryKind::Add => Operation::Add,
            BinaryKind::Sub => Operation::Sub,
            BinaryKind::Mul => Operation::Mul,
            BinaryKind::Div => Operation::Div,
            BinaryKind::Pow => Operation::Pow,
        }
    }
}

impl From<UnaryKind> for Operation {
    fn from(kind: UnaryKind) -> Self {
        match kind {
            UnaryKind::Neg => Operation::Neg,
            UnaryKind::Relu => Operation::Relu,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Provenance of a node together with the backward rule it implies.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// Input or constant: no children, nothing to propagate.
    Leaf,
    Unary {
        operand: NodeId,
        kind: UnaryKind,
    },
    Binary {
        left: NodeId,
        right: NodeId,
        kind: BinaryKind,
    },
    /// Children recorded without a differentiable operation.
    Opaque { children: Vec<NodeId> },
}

impl Rule {
    pub fn operation(&self) -> Operation {
        match self {
            Rule::Leaf | Rule::Opaque { .. } => Operation::None,
            Rule::Unary { kind, .. } => (*kind).into(),
            Rule::Binary { kind, .. } => (*kind).into(),
        }
    }

    /// The `index`-th child in operand order.
    pub fn child(&self, index: usize) -> Option<NodeId> {
        match (self, index) {
            (Rule::Unary { operand, .. }, 0) => Some(*operand),
            (Rule::Binary { left, .. }, 0) => Some(*left),
            (Rule::Binary { right, .. }, 1) => Some(*right),
            (Rule::Opaque { children }, i) => children.get(i).copied(),
            _ => None,
        }
    }

    pub fn children(&self) -> Vec<NodeId> {
        (0..).map_while(|i| self.child(i)).collect()
    }

    /// Whether backward has anything to do for this node.
    pub fn is_differentiable(&self) -> bool {
        matches!(self, Rule::Unary { .. } | Rule::Binary { .. })
    }
}

/// One scalar of the computation graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) value: f64,
    pub(crate) grad: f64,
    pub(crate) rule: Rule,
}

impl Node {
    pub(crate) fn leaf(value: f64) -> Self {
        Node {
            value,
            grad: 0.0,
            rule: Rule::Leaf,
        }
    }

    pub(crate) fn with_rule(value: f64, rule: Rule) -> Self {
        Node {
            value,
            grad: 0.0,
            rule,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn grad(&self) -> f64 {
        self.grad
    }

    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    pub fn operation(&self) -> Operation {
        self.rule.operation()
    }

    pub fn children(&self) -> Vec<NodeId> {
        self.rule.children()
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.rule, Rule::Leaf)
    }
}
