/**
 * Plural Rules AST
 *
 * Defines the AST node types for plural-form rule expressions and
 * their evaluation against the plural variable `n`.
 */
use serde::{Deserialize, Serialize};

/// Binary operators of the plural-rule grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlfOp {
    /// `a % b`
    Mod,
    /// `a == b`
    Eq,
    /// `a != b`
    NotEq,
    /// `a >= b`
    GreaterEq,
    /// `a > b`
    Greater,
    /// `a <= b`
    LessEq,
    /// `a < b`
    Less,
    /// `a && b`
    And,
    /// `a || b`
    Or,
}

impl PlfOp {
    /// Operator spelling as it appears in rule expressions.
    pub fn as_str(self) -> &'static str {
        match self {
            PlfOp::Mod => "%",
            PlfOp::Eq => "==",
            PlfOp::NotEq => "!=",
            PlfOp::GreaterEq => ">=",
            PlfOp::Greater => ">",
            PlfOp::LessEq => "<=",
            PlfOp::Less => "<",
            PlfOp::And => "&&",
            PlfOp::Or => "||",
        }
    }
}

/// A plural-rule expression node.
///
/// Leaves are the variable `n` and unsigned integer literals; interior
/// nodes are binary operators and the ternary conditional. Nodes own
/// their children and are immutable once built by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PlfNode {
    /// Numeric literal.
    Literal(u32),
    /// The variable `n`.
    Variable,
    /// Binary operation `a <op> b`.
    Binary {
        op: PlfOp,
        a: Box<PlfNode>,
        b: Box<PlfNode>,
    },
    /// Ternary conditional `a ? b : c`.
    TerCond {
        a: Box<PlfNode>,
        b: Box<PlfNode>,
        c: Box<PlfNode>,
    },
}

impl PlfNode {
    /// Evaluate the expression for a given value of `n`.
    ///
    /// Evaluation is total: comparisons and logical operators yield 0
    /// or 1, and a modulo by zero yields 0. Both operands of `&&` and
    /// `||` are always evaluated.
    pub fn eval(&self, n: u64) -> u64 {
        match self {
            PlfNode::Literal(v) => u64::from(*v),
            PlfNode::Variable => n,
            PlfNode::Binary { op, a, b } => {
                let a = a.eval(n);
                let b = b.eval(n);
                match op {
                    PlfOp::Mod => {
                        if b == 0 {
                            0
                        } else {
                            a % b
                        }
                    }
                    PlfOp::Eq => u64::from(a == b),
                    PlfOp::NotEq => u64::from(a != b),
                    PlfOp::GreaterEq => u64::from(a >= b),
                    PlfOp::Greater => u64::from(a > b),
                    PlfOp::LessEq => u64::from(a <= b),
                    PlfOp::Less => u64::from(a < b),
                    PlfOp::And => u64::from(a != 0 && b != 0),
                    PlfOp::Or => u64::from(a != 0 || b != 0),
                }
            }
            PlfNode::TerCond { a, b, c } => {
                if a.eval(n) != 0 {
                    b.eval(n)
                } else {
                    c.eval(n)
                }
            }
        }
    }

    /// Render the canonical fully-parenthesized form of the expression.
    pub fn debug_dump(&self) -> String {
        super::serializer::serialize(self)
    }
}
