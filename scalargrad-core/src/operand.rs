use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use num_traits::AsPrimitive;

/// Anything an operation accepts as an input: an existing node or a plain number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Node(NodeId),
    Literal(f64),
}

impl From<NodeId> for Operand {
    fn from(id: NodeId) -> Self {
        Operand::Node(id)
    }
}

macro_rules! impl_literal_operand {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand {
                fn from(value: $t) -> Self {
                    Operand::Literal(value.as_())
                }
            }
        )*
    };
}

impl_literal_operand!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Graph {
    /// Turns an operand into a node of this graph, wrapping literals as fresh leaves.
    pub fn coerce(&self, operand: impl Into<Operand>) -> Result<NodeId, ScalarGradError> {
        match operand.into() {
            Operand::Node(id) => {
                self.check(id)?;
                Ok(id)
            }
            Operand::Literal(value) => Ok(self.create_leaf(value)),
        }
    }

    /// Coerces several operands at once.
    ///
    /// Every node operand is validated before the first literal is turned
    /// into a leaf, so a rejected call leaves the graph untouched.
    pub fn coerce_all<const N: usize>(
        &self,
        operands: [Operand; N],
    ) -> Result<[NodeId; N], ScalarGradError> {
        for operand in &operands {
            if let Operand::Node(id) = operand {
                self.check(*id)?;
            }
        }
        Ok(operands.map(|operand| match operand {
            Operand::Node(id) => id,
            Operand::Literal(value) => self.create_leaf(value),
        }))
    }
}
