//! Evaluates arithmetic expressions such as `180*atan2(log(e), log10(10))/pi`.
//!
//! Text goes through the [`frontend`] (lexer, then recursive-descent parser)
//! into an [`ASTExpr`], which the [`backend`] walks to produce an `f64`.
//! Names of constants and functions are case-insensitive.

#[macro_use]
extern crate lazy_static;

pub mod backend;
pub mod error;
pub mod frontend;

pub use backend::evaluator::evaluate_ast;
pub use error::EvaluationError;
pub use frontend::ast::ASTExpr;

use frontend::{lexer::Lex, parser};

/// Lexes and parses `expression` without evaluating it.
pub fn parse_expression(expression: &str) -> Result<ASTExpr, EvaluationError> {
    let tokens = expression.lex()?;
    let ast = parser::parse(tokens)?;

    log::debug!("parsed {expression:?} into {ast:?}");

    Ok(ast)
}

/// Evaluates `expression`.
///
/// A successful result can still be infinite or NaN.
///
/// ```
/// let val = calcrs::evaluate("(2.5 - 1.35) * 2.0").unwrap();
/// assert!((val - 2.3).abs() < 1e-9);
/// ```
pub fn evaluate(expression: &str) -> Result<f64, EvaluationError> {
    let ast = parse_expression(expression)?;
    let val = evaluate_ast(&ast)?;

    log::debug!("{expression:?} evaluated to {val}");

    Ok(val)
}
