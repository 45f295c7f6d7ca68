use thiserror::Error;

use crate::backend::evaluator::EvalError;
use crate::frontend::{lexer::LexError, parser::ParserError};

/// Anything that can go wrong between the input text and its value.
#[derive(Error, PartialEq, Debug)]
pub enum EvaluationError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParserError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}
