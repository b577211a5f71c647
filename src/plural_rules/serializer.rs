/**
 * Plural Rules Serializer
 *
 * Renders an AST as its canonical fully-parenthesized infix form, e.g.
 * `((n%10)==1)`. The output is stable: re-parsing a dump yields an AST
 * with an identical dump.
 */
use super::ast::PlfNode;

/// Serialize an AST to its canonical string form.
pub fn serialize(node: &PlfNode) -> String {
    match node {
        PlfNode::Literal(v) => v.to_string(),
        PlfNode::Variable => "n".to_string(),
        PlfNode::Binary { op, a, b } => {
            format!("({}{}{})", serialize(a), op.as_str(), serialize(b))
        }
        PlfNode::TerCond { a, b, c } => {
            format!("({}?{}:{})", serialize(a), serialize(b), serialize(c))
        }
    }
}
