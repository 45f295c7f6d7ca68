use thiserror::Error;

use crate::backend::builtins;
use crate::frontend::{ast::ASTExpr, lexer::Ops};

// The parser already resolves names and checks arities, so these only show
// up if a tree was built by hand or the two disagree about the tables.
#[derive(Error, PartialEq, Debug)]
pub enum EvalError {
    #[error("Undefined function {0}")]
    UnknownFunction(String),

    #[error("Incorrect number of arguments passed to {name}, expected {expected}, got {actual}")]
    ArityMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },
}

/// Walks the tree, left operand before right and arguments in order.
///
/// Numeric trouble is not an error: `1/0` is infinite and `0/0` is NaN.
pub fn evaluate_ast(expr: &ASTExpr) -> Result<f64, EvalError> {
    match expr {
        ASTExpr::NumberExpr(num) => Ok(*num),

        ASTExpr::BinaryExpr { op, left, right } => {
            let lhs = evaluate_ast(left)?;
            let rhs = evaluate_ast(right)?;

            Ok(match op {
                Ops::Plus => lhs + rhs,
                Ops::Minus => lhs - rhs,
                Ops::Mult => lhs * rhs,
                Ops::Div => lhs / rhs,
            })
        }

        ASTExpr::CallExpr { name, args } => {
            let values = args
                .iter()
                .map(evaluate_ast)
                .collect::<Result<Vec<f64>, _>>()?;

            let function = builtins::function(name).ok_or_else(|| {
                log::error!("call to unresolved function {name} reached the evaluator");
                EvalError::UnknownFunction(name.clone())
            })?;

            function.call(&values).ok_or_else(|| {
                log::error!("call to {name} with {} arguments reached the evaluator", values.len());
                EvalError::ArityMismatch {
                    name: name.clone(),
                    expected: function.arity(),
                    actual: values.len(),
                }
            })
        }
    }
}
