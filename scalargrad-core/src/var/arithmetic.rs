use crate::error::ScalarGradError;
use crate::node::{BinaryKind, NodeId, UnaryKind};
use crate::ops::{push_binary, push_unary};
use crate::var::Var;
use num_traits::AsPrimitive;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Right-hand side accepted by [`Var`] arithmetic: another handle or a plain number.
#[derive(Debug, Clone, Copy)]
pub enum VarOperand<'g> {
    Var(Var<'g>),
    Literal(f64),
}

impl<'g> From<Var<'g>> for VarOperand<'g> {
    fn from(var: Var<'g>) -> Self {
        VarOperand::Var(var)
    }
}

impl<'g> From<&Var<'g>> for VarOperand<'g> {
    fn from(var: &Var<'g>) -> Self {
        VarOperand::Var(*var)
    }
}

macro_rules! impl_literal_var_operand {
    ($($t:ty),*) => {
        $(
            impl From<$t> for VarOperand<'_> {
                fn from(value: $t) -> Self {
                    VarOperand::Literal(value.as_())
                }
            }
        )*
    };
}

impl_literal_var_operand!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<'g> Var<'g> {
    /// Creates `self <kind> rhs`. Literals become new leaves of this graph.
    ///
    /// # Errors
    /// Returns `ForeignNode` if `rhs` is a handle into another graph.
    pub fn try_binary(
        self,
        kind: BinaryKind,
        rhs: impl Into<VarOperand<'g>>,
    ) -> Result<Var<'g>, ScalarGradError> {
        let right = match rhs.into() {
            VarOperand::Var(var) if std::ptr::eq(self.graph, var.graph) => var.id,
            VarOperand::Var(_) => return Err(ScalarGradError::ForeignNode),
            VarOperand::Literal(value) => self.graph.create_leaf(value),
        };
        Ok(self.with_id(push_binary(self.graph, kind, self.id, right)))
    }

    /// Creates `lhs <kind> self` for a literal on the left.
    fn reflected(self, kind: BinaryKind, lhs: f64) -> Var<'g> {
        let left = self.graph.create_leaf(lhs);
        self.with_id(push_binary(self.graph, kind, left, self.id))
    }

    fn binary(self, kind: BinaryKind, rhs: impl Into<VarOperand<'g>>) -> Var<'g> {
        match self.try_binary(kind, rhs) {
            Ok(out) => out,
            Err(err) => panic!("Cannot apply {:?}: {}", kind, err),
        }
    }

    fn unary(self, kind: UnaryKind) -> Var<'g> {
        self.with_id(push_unary(self.graph, kind, self.id))
    }

    fn with_id(self, id: NodeId) -> Var<'g> {
        Var {
            graph: self.graph,
            id,
        }
    }

    /// Raises this node to a real power: `self ^ exponent`.
    ///
    /// # Panics
    /// Panics if `exponent` is a handle into another graph.
    pub fn pow(self, exponent: impl Into<VarOperand<'g>>) -> Var<'g> {
        self.binary(BinaryKind::Pow, exponent)
    }

    /// Rectified Linear Unit: `max(self, 0)`.
    pub fn relu(self) -> Var<'g> {
        self.unary(UnaryKind::Relu)
    }
}

impl<'g> Neg for Var<'g> {
    type Output = Var<'g>;

    fn neg(self) -> Var<'g> {
        self.unary(UnaryKind::Neg)
    }
}

impl<'g> Neg for &Var<'g> {
    type Output = Var<'g>;

    fn neg(self) -> Var<'g> {
        (*self).unary(UnaryKind::Neg)
    }
}

/// Implements a binary operator with a numeric literal on either side.
macro_rules! impl_literal_operator {
    ($trait:ident, $method:ident, $kind:expr; $($t:ty),*) => {
        $(
            impl<'g> $trait<$t> for Var<'g> {
                type Output = Var<'g>;

                fn $method(self, rhs: $t) -> Var<'g> {
                    self.binary($kind, rhs)
                }
            }

            impl<'g> $trait<$t> for &Var<'g> {
                type Output = Var<'g>;

                fn $method(self, rhs: $t) -> Var<'g> {
                    (*self).binary($kind, rhs)
                }
            }

            impl<'g> $trait<Var<'g>> for $t {
                type Output = Var<'g>;

                fn $method(self, rhs: Var<'g>) -> Var<'g> {
                    rhs.reflected($kind, self.as_())
                }
            }

            impl<'g> $trait<&Var<'g>> for $t {
                type Output = Var<'g>;

                fn $method(self, rhs: &Var<'g>) -> Var<'g> {
                    (*rhs).reflected($kind, self.as_())
                }
            }
        )*
    };
}

/// Implements a binary operator for every combination of `Var`, `&Var` and
/// the primitive numeric types.
///
/// # Panics
/// The generated operators panic when both operands are handles into
/// different graphs. Use [`Var::try_binary`] to get an error instead.
macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $kind:expr) => {
        impl<'g> $trait<Var<'g>> for Var<'g> {
            type Output = Var<'g>;

            fn $method(self, rhs: Var<'g>) -> Var<'g> {
                self.binary($kind, rhs)
            }
        }

        impl<'g> $trait<&Var<'g>> for Var<'g> {
            type Output = Var<'g>;

            fn $method(self, rhs: &Var<'g>) -> Var<'g> {
                self.binary($kind, rhs)
            }
        }

        impl<'g> $trait<Var<'g>> for &Var<'g> {
            type Output = Var<'g>;

            fn $method(self, rhs: Var<'g>) -> Var<'g> {
                (*self).binary($kind, rhs)
            }
        }

        impl<'g> $trait<&Var<'g>> for &Var<'g> {
            type Output = Var<'g>;

            fn $method(self, rhs: &Var<'g>) -> Var<'g> {
                (*self).binary($kind, rhs)
            }
        }

        impl_literal_operator!(
            $trait, $method, $kind;
            f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize
        );
    };
}

impl_binary_operator!(Add, add, BinaryKind::Add);
impl_binary_operator!(Sub, sub, BinaryKind::Sub);
impl_binary_operator!(Mul, mul, BinaryKind::Mul);
impl_binary_operator!(Div, div, BinaryKind::Div);

#[cfg(test)]
#[path = "arithmetic_test.rs"]
mod tests;
