use crate::frontend::lexer::Ops;

// Plain enum, evaluated by matching. Constants never make it in here, the
// parser folds them into numbers, and unary minus is `0 - x`.
#[derive(Debug, Clone, PartialEq)]
pub enum ASTExpr {
    NumberExpr(f64),
    BinaryExpr {
        op: Ops,
        left: Box<ASTExpr>,
        right: Box<ASTExpr>,
    },
    CallExpr {
        // always lowercase
        name: String,
        args: Vec<ASTExpr>,
    },
}
