/**
 * Plural Rules Parser
 *
 * Recursive descent parser for plural-form rule expressions.
 *
 * Grammar, lowest precedence first:
 *
 * ```text
 * expr     := ternary
 * ternary  := or ( '?' ternary ':' ternary )?
 * or       := and ( '||' or )?
 * and      := eq  ( '&&' and )?
 * eq       := cmp ( ('==' | '!=') cmp )*
 * cmp      := mod ( ('>=' | '<=' | '>' | '<') mod )*
 * mod      := prim ( '%' prim )*
 * prim     := 'n' | NUMBER | '(' expr ')'
 * ```
 *
 * `?:`, `&&` and `||` associate to the right; the remaining binary
 * operators associate to the left.
 */
use super::ast::{PlfNode, PlfOp};
use super::lexer::{tokenize, Token, TokenKind};
use crate::error::{Error, Result};

/// Parse a plural-rule expression into an AST.
///
/// Errors carry a human-readable message and the zero-based byte
/// offset at which the fault was detected.
pub fn parse_plural_rules(input: &str) -> Result<PlfNode> {
    let tokens = tokenize(input)?;
    let mut parser = RuleParser::new(input.len(), tokens);
    let node = parser.parse_expr()?;

    if let Some(token) = parser.current() {
        return Err(Error::plural_rules(
            format!("unexpected token at pos {}", token.pos),
            token.pos,
        ));
    }
    Ok(node)
}

/// Internal parser state.
struct RuleParser {
    tokens: Vec<Token>,
    index: usize,
    input_len: usize,
}

impl RuleParser {
    fn new(input_len: usize, tokens: Vec<Token>) -> Self {
        RuleParser {
            tokens,
            index: 0,
            input_len,
        }
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    fn advance(&mut self) {
        self.index += 1;
    }

    /// Position used in diagnostics: the current token's offset, or the
    /// input length at end of input.
    fn pos(&self) -> usize {
        match self.current() {
            Some(token) => token.pos,
            None => self.input_len,
        }
    }

    fn consume_optional(&mut self, kind: TokenKind) -> bool {
        if let Some(token) = self.current() {
            if token.kind == kind {
                self.advance();
                return true;
            }
        }
        false
    }

    /// If the current token is one of `ops`, consume it.
    fn consume_optional_op(&mut self, ops: &[PlfOp]) -> Option<PlfOp> {
        if let Some(token) = self.current() {
            for &op in ops {
                if token.is_op(op) {
                    self.advance();
                    return Some(op);
                }
            }
        }
        None
    }

    fn parse_expr(&mut self) -> Result<PlfNode> {
        self.parse_ternary()
    }

    /// Parse ternary conditional (`a ? b : c`), right-associative.
    fn parse_ternary(&mut self) -> Result<PlfNode> {
        let cond = self.parse_or()?;

        if self.consume_optional(TokenKind::Question) {
            let true_branch = self.parse_ternary()?;
            if !self.consume_optional(TokenKind::TerDelim) {
                return Err(Error::plural_rules(
                    format!("expected ternary delimiter at pos {}", self.pos()),
                    self.pos(),
                ));
            }
            let false_branch = self.parse_ternary()?;
            return Ok(PlfNode::TerCond {
                a: Box::new(cond),
                b: Box::new(true_branch),
                c: Box::new(false_branch),
            });
        }

        Ok(cond)
    }

    /// Parse logical OR (`||`). Chains group to the right:
    /// `a || b || c` becomes `(a||(b||c))`.
    fn parse_or(&mut self) -> Result<PlfNode> {
        let a = self.parse_and()?;

        if self.consume_optional_op(&[PlfOp::Or]).is_some() {
            let b = self.parse_or()?;
            return Ok(PlfNode::Binary {
                op: PlfOp::Or,
                a: Box::new(a),
                b: Box::new(b),
            });
        }

        Ok(a)
    }

    /// Parse logical AND (`&&`). Chains group to the right.
    fn parse_and(&mut self) -> Result<PlfNode> {
        let a = self.parse_eq()?;

        if self.consume_optional_op(&[PlfOp::And]).is_some() {
            let b = self.parse_and()?;
            return Ok(PlfNode::Binary {
                op: PlfOp::And,
                a: Box::new(a),
                b: Box::new(b),
            });
        }

        Ok(a)
    }

    /// Parse equality operators (`==`, `!=`), left-associative.
    fn parse_eq(&mut self) -> Result<PlfNode> {
        let mut result = self.parse_cmp()?;

        while let Some(op) = self.consume_optional_op(&[PlfOp::Eq, PlfOp::NotEq]) {
            let b = self.parse_cmp()?;
            result = PlfNode::Binary {
                op,
                a: Box::new(result),
                b: Box::new(b),
            };
        }

        Ok(result)
    }

    /// Parse comparison operators (`>=`, `>`, `<=`, `<`),
    /// left-associative.
    fn parse_cmp(&mut self) -> Result<PlfNode> {
        let mut result = self.parse_mod()?;

        while let Some(op) = self.consume_optional_op(&[
            PlfOp::GreaterEq,
            PlfOp::Greater,
            PlfOp::LessEq,
            PlfOp::Less,
        ]) {
            let b = self.parse_mod()?;
            result = PlfNode::Binary {
                op,
                a: Box::new(result),
                b: Box::new(b),
            };
        }

        Ok(result)
    }

    /// Parse modulo (`%`), left-associative.
    fn parse_mod(&mut self) -> Result<PlfNode> {
        let mut result = self.parse_prim()?;

        while self.consume_optional_op(&[PlfOp::Mod]).is_some() {
            let b = self.parse_prim()?;
            result = PlfNode::Binary {
                op: PlfOp::Mod,
                a: Box::new(result),
                b: Box::new(b),
            };
        }

        Ok(result)
    }

    /// Parse a primary: the variable, a literal, or a bracketed
    /// expression. A bracketed expression contributes no node of its
    /// own.
    fn parse_prim(&mut self) -> Result<PlfNode> {
        let token = match self.current() {
            Some(token) => *token,
            None => {
                return Err(Error::plural_rules(
                    format!("expected expression at pos {}", self.input_len),
                    self.input_len,
                ));
            }
        };

        match token.kind {
            TokenKind::Variable => {
                self.advance();
                Ok(PlfNode::Variable)
            }
            TokenKind::Number => {
                self.advance();
                Ok(PlfNode::Literal(token.num_value))
            }
            TokenKind::BrOpen => {
                self.advance();
                let inner = self.parse_expr()?;
                if !self.consume_optional(TokenKind::BrClose) {
                    return Err(Error::plural_rules(
                        format!("expected closing bracket at pos {}", self.pos()),
                        self.pos(),
                    ));
                }
                Ok(inner)
            }
            _ => Err(Error::plural_rules(
                format!("expected expression at pos {}", token.pos),
                token.pos,
            )),
        }
    }
}
